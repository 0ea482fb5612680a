use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A_POS")]
    APos,
    #[serde(rename = "A_NEG")]
    ANeg,
    #[serde(rename = "B_POS")]
    BPos,
    #[serde(rename = "B_NEG")]
    BNeg,
    #[serde(rename = "AB_POS")]
    AbPos,
    #[serde(rename = "AB_NEG")]
    AbNeg,
    #[serde(rename = "O_POS")]
    OPos,
    #[serde(rename = "O_NEG")]
    ONeg,
}

/// Parses the labels shown in the form, e.g. `AB+`.
impl FromStr for BloodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A+" => Ok(BloodGroup::APos),
            "A-" => Ok(BloodGroup::ANeg),
            "B+" => Ok(BloodGroup::BPos),
            "B-" => Ok(BloodGroup::BNeg),
            "AB+" => Ok(BloodGroup::AbPos),
            "AB-" => Ok(BloodGroup::AbNeg),
            "O+" => Ok(BloodGroup::OPos),
            "O-" => Ok(BloodGroup::ONeg),
            other => Err(format!("unknown blood group \"{}\"", other)),
        }
    }
}

pub const SEX_OPTIONS: [&str; 4] = ["Male", "Female", "Other", "Prefer not to say"];

#[derive(Serialize, Deserialize)]
pub struct ProfileUpdateMetadata {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub age: u32,
    #[serde(rename = "bloodGroup")]
    pub blood_group: BloodGroup,
    pub sex: String,
    pub address: String,
    pub metadata: ProfileUpdateMetadata,
}

#[derive(Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}
