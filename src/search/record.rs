use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Doctors,
    Pharmacies,
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SearchKind::Doctors => write!(f, "doctors"),
            SearchKind::Pharmacies => write!(f, "pharmacies"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Opening hours as reported by the remote, `HH:MM` strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub open: String,
    pub close: String,
    pub open24: bool,
    #[serde(default)]
    pub days: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordDetails {
    Doctor {
        title: Option<String>,
        bio: Option<String>,
        #[serde(default)]
        insurances: Vec<String>,
    },
    Pharmacy {
        rating: f64,
        delivery: bool,
        has_medicine: bool,
        image_url: Option<String>,
        // informational only, `distance_km` is what filters and sorts
        reported_distance_km: Option<f64>,
    },
}

/// A doctor or pharmacy normalized from whichever schema the remote speaks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    pub display_name: String,
    pub location: Coordinate,
    pub categories: Vec<String>,
    pub contact: Contact,
    pub distance_km: Option<f64>,
    pub availability: Option<Availability>,
    pub details: RecordDetails,
    #[serde(default)]
    pub highlighted: bool,
}

impl ResultRecord {
    /// Whether the record satisfies what the user asked for: a doctor listing the
    /// requested specialty (or plain "doctor" when none was given), or a pharmacy
    /// that stocks the medicine.
    pub fn matches_category(&self, category: Option<&str>) -> bool {
        match &self.details {
            RecordDetails::Doctor { .. } => {
                let wanted = category.unwrap_or("doctor");
                self.categories.iter().any(|c| c == wanted)
            }
            RecordDetails::Pharmacy { has_medicine, .. } => *has_medicine,
        }
    }
}

#[cfg(test)]
impl ResultRecord {
    pub fn doctor_fixture(id: &str, location: Coordinate) -> Self {
        ResultRecord {
            id: id.to_string(),
            display_name: format!("Dr. {}", id),
            location,
            categories: vec!["doctor".to_string()],
            contact: Contact::default(),
            distance_km: None,
            availability: None,
            details: RecordDetails::Doctor {
                title: None,
                bio: None,
                insurances: vec![],
            },
            highlighted: false,
        }
    }

    pub fn pharmacy_fixture(id: &str, location: Coordinate, close: &str, open24: bool) -> Self {
        ResultRecord {
            id: id.to_string(),
            display_name: format!("Pharmacy {}", id),
            location,
            categories: vec![],
            contact: Contact::default(),
            distance_km: None,
            availability: Some(Availability {
                open: "08:00".to_string(),
                close: close.to_string(),
                open24,
                days: vec![],
            }),
            details: RecordDetails::Pharmacy {
                rating: 4.0,
                delivery: false,
                has_medicine: true,
                image_url: None,
                reported_distance_km: None,
            },
            highlighted: false,
        }
    }
}
