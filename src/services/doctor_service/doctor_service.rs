use std::str::FromStr;

use async_trait::async_trait;
use tracing::warn;
use urlencoding::encode;

use super::types::{
    doctors_list_response::{DoctorsListRequest, DoctorsListResponse, DoctorsListResponseDoctor},
    nested_doctors_response::{NestedDoctor, NestedDoctorPractice, NestedDoctorsResponse},
};
use crate::{
    search::{
        coordinate::Coordinate,
        error::SearchError,
        query::SearchQuery,
        record::{Contact, RecordDetails, ResultRecord, SearchKind},
    },
    services::search_client::{decode_records, read_json, SearchClient},
};

/// The two response shapes doctor backends have been deployed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoctorApiSchema {
    /// `POST /doctors_list/`, flat records, no radius constraint on the server.
    List,
    /// `GET /doctors`, profile/practices/specialties records, radius applied by the server.
    Nested,
}

impl FromStr for DoctorApiSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(DoctorApiSchema::List),
            "nested" => Ok(DoctorApiSchema::Nested),
            other => Err(format!("unknown doctor API schema \"{}\"", other)),
        }
    }
}

#[derive(Clone)]
pub struct DoctorServiceConfig {
    pub host: String,
    pub schema: DoctorApiSchema,
}

#[derive(Clone)]
pub struct DoctorService {
    config: DoctorServiceConfig,
    client: reqwest::Client,
}

impl DoctorService {
    pub fn new(config: DoctorServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    async fn search_list(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>, SearchError> {
        let url = format!("{}/doctors_list/", self.config.host);

        let resp = self
            .client
            .post(&url)
            .json(&DoctorsListRequest {
                lat: query.origin.lat,
                lon: query.origin.lng,
                specialty: query
                    .category
                    .clone()
                    .unwrap_or_else(|| "doctor".to_string()),
            })
            .send()
            .await
            .map_err(SearchError::remote)?;

        let doctors = read_json::<DoctorsListResponse>(resp)
            .await?
            .response
            .and_then(|r| r.doctors)
            .ok_or_else(|| SearchError::malformed("missing response.doctors"))?;

        Ok(normalize_listed(decode_records(SearchKind::Doctors, doctors)))
    }

    async fn search_nested(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>, SearchError> {
        let mut url = format!(
            "{}/doctors?lat={}&lng={}&radius={}",
            self.config.host, query.origin.lat, query.origin.lng, query.radius_km
        );
        if let Some(specialty) = &query.category {
            url.push_str(&format!("&specialty={}", encode(specialty)));
        }

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SearchError::remote)?;

        let doctors = read_json::<NestedDoctorsResponse>(resp)
            .await?
            .data
            .ok_or_else(|| SearchError::malformed("missing data"))?;

        Ok(normalize_nested(decode_records(SearchKind::Doctors, doctors)))
    }
}

#[async_trait]
impl SearchClient for DoctorService {
    fn kind(&self) -> SearchKind {
        SearchKind::Doctors
    }

    fn filters_radius_locally(&self) -> bool {
        self.config.schema == DoctorApiSchema::List
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>, SearchError> {
        match self.config.schema {
            DoctorApiSchema::List => self.search_list(query).await,
            DoctorApiSchema::Nested => self.search_nested(query).await,
        }
    }
}

/// Listed doctors carry no id, so ids are positional within one response.
pub fn normalize_listed(doctors: Vec<DoctorsListResponseDoctor>) -> Vec<ResultRecord> {
    doctors
        .into_iter()
        .enumerate()
        .filter_map(|(i, doctor)| {
            let Some(location) = Coordinate::checked(doctor.latitude, doctor.longitude) else {
                warn!("Skipping doctor {} with invalid coordinates", doctor.name);
                return None;
            };

            Some(ResultRecord {
                id: format!("doctor-{}", i),
                display_name: doctor.name,
                location,
                categories: doctor.category,
                contact: Contact {
                    address: doctor.address.filter(|a| !a.is_empty()),
                    phone: None,
                },
                distance_km: None,
                availability: None,
                details: RecordDetails::Doctor {
                    title: None,
                    bio: None,
                    insurances: vec![],
                },
                highlighted: false,
            })
        })
        .collect()
}

fn practice_location(practice: &NestedDoctorPractice) -> Option<Coordinate> {
    Coordinate::checked(practice.lat?, practice.lon?)
}

/// Doctors are placed at their first practice with usable coordinates; those
/// without one cannot go on the map and are skipped.
pub fn normalize_nested(doctors: Vec<NestedDoctor>) -> Vec<ResultRecord> {
    doctors
        .into_iter()
        .filter_map(|doctor| {
            let Some((practice, location)) = doctor
                .practices
                .iter()
                .find_map(|p| practice_location(p).map(|l| (p, l)))
            else {
                warn!("Skipping doctor {} without a practice location", doctor.uid);
                return None;
            };

            let profile = &doctor.profile;
            let display_name = match &profile.title {
                Some(title) => format!("{} {}, {}", profile.first_name, profile.last_name, title),
                None => format!("{} {}", profile.first_name, profile.last_name),
            };

            let address = practice.visit_address.as_ref().map(|a| {
                format!("{}, {}, {} {}", a.street, a.city, a.state, a.zip)
            });
            let phone = practice
                .phones
                .iter()
                .find(|p| p.r#type == "landline")
                .or_else(|| practice.phones.first())
                .map(|p| p.number.clone());

            Some(ResultRecord {
                id: doctor.uid.clone(),
                display_name,
                location,
                categories: doctor.specialties.iter().map(|s| s.name.clone()).collect(),
                contact: Contact { address, phone },
                distance_km: None,
                availability: None,
                details: RecordDetails::Doctor {
                    title: profile.title.clone(),
                    bio: profile.bio.clone(),
                    insurances: doctor
                        .insurances
                        .iter()
                        .map(|i| i.insurance_plan.name.clone())
                        .collect(),
                },
                highlighted: false,
            })
        })
        .collect()
}
