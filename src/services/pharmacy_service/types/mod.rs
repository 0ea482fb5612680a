pub mod pharmacies_response;
