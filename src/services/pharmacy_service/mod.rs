pub mod pharmacy_service;
pub mod types;
