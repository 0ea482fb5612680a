use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DoctorsListRequest {
    pub lat: f64,
    pub lon: f64,
    pub specialty: String,
}

#[derive(Serialize, Deserialize)]
pub struct DoctorsListResponseDoctor {
    pub name: String,
    pub address: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct DoctorsListResponseBody {
    /// Decoded per record, see [`crate::services::search_client::decode_records`].
    pub doctors: Option<Vec<serde_json::Value>>,
}

#[derive(Serialize, Deserialize)]
pub struct DoctorsListResponse {
    pub response: Option<DoctorsListResponseBody>,
}
