pub mod maps_service;
pub mod types;
