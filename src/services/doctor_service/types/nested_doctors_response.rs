use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorProfile {
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorVisitAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorPhone {
    pub number: String,
    pub r#type: String,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorPractice {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub visit_address: Option<NestedDoctorVisitAddress>,
    #[serde(default)]
    pub phones: Vec<NestedDoctorPhone>,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorSpecialty {
    pub uid: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorInsurancePlan {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorInsurance {
    pub insurance_plan: NestedDoctorInsurancePlan,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctor {
    pub uid: String,
    pub profile: NestedDoctorProfile,
    #[serde(default)]
    pub practices: Vec<NestedDoctorPractice>,
    #[serde(default)]
    pub specialties: Vec<NestedDoctorSpecialty>,
    #[serde(default)]
    pub insurances: Vec<NestedDoctorInsurance>,
}

#[derive(Serialize, Deserialize)]
pub struct NestedDoctorsResponse {
    pub data: Option<Vec<serde_json::Value>>,
}
