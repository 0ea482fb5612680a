pub mod profile_service_error;
pub mod profile_update;
