pub mod doctor_service;
pub mod types;
