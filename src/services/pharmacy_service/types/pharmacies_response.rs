use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PharmacyAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Serialize, Deserialize)]
pub struct PharmacyLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: PharmacyAddress,
}

#[derive(Serialize, Deserialize)]
pub struct PharmacyHours {
    pub open: String,
    pub close: String,
    pub open24: bool,
    #[serde(default)]
    pub days: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub phone: Option<String>,
    pub location: PharmacyLocation,
    pub hours: PharmacyHours,
    pub delivery: Option<bool>,
    pub has_medicine: Option<bool>,
    pub distance: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PharmaciesResponse {
    /// Decoded per record, see [`crate::services::search_client::decode_records`].
    pub data: Option<Vec<serde_json::Value>>,
}
