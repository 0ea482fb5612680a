pub mod doctor_service;
pub mod maps_client;
pub mod pharmacy_service;
pub mod profile_service;
pub mod search_client;
