pub mod google_geocode_response;
pub mod maps_service_error;
