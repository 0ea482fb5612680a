use async_trait::async_trait;
use tracing::warn;
use urlencoding::encode;

use super::types::pharmacies_response::{PharmaciesResponse, Pharmacy};
use crate::{
    search::{
        coordinate::Coordinate,
        error::SearchError,
        query::SearchQuery,
        record::{Availability, Contact, RecordDetails, ResultRecord, SearchKind},
    },
    services::search_client::{decode_records, read_json, SearchClient},
};

#[derive(Clone)]
pub struct PharmacyServiceConfig {
    pub host: String,
    /// Set for backends that ignore the `radius` parameter.
    pub filter_radius_locally: bool,
}

#[derive(Clone)]
pub struct PharmacyService {
    config: PharmacyServiceConfig,
    client: reqwest::Client,
}

impl PharmacyService {
    pub fn new(config: PharmacyServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        let mut url = format!(
            "{}/api/pharmacies?lat={}&lng={}&radius={}",
            self.config.host, query.origin.lat, query.origin.lng, query.radius_km
        );
        if let Some(medicine) = &query.category {
            url.push_str(&format!("&medicineName={}", encode(medicine)));
        }
        if let Some(until) = &query.time_filter {
            url.push_str(&format!("&untilTime={}", encode(until)));
        }
        url
    }
}

#[async_trait]
impl SearchClient for PharmacyService {
    fn kind(&self) -> SearchKind {
        SearchKind::Pharmacies
    }

    fn filters_radius_locally(&self) -> bool {
        self.config.filter_radius_locally
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>, SearchError> {
        let resp = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(SearchError::remote)?;

        let pharmacies = read_json::<PharmaciesResponse>(resp)
            .await?
            .data
            .ok_or_else(|| SearchError::malformed("missing data"))?;

        Ok(decode_records::<Pharmacy>(SearchKind::Pharmacies, pharmacies)
            .into_iter()
            .filter_map(normalize)
            .collect())
    }
}

fn normalize(pharmacy: Pharmacy) -> Option<ResultRecord> {
    let Some(location) = Coordinate::checked(pharmacy.location.lat, pharmacy.location.lng) else {
        warn!("Skipping pharmacy {} with invalid coordinates", pharmacy.id);
        return None;
    };

    let address = &pharmacy.location.address;

    Some(ResultRecord {
        id: pharmacy.id,
        display_name: pharmacy.name,
        location,
        categories: vec![],
        contact: Contact {
            address: Some(format!(
                "{}, {}, {} {}",
                address.street, address.city, address.state, address.zip
            )),
            phone: pharmacy.phone.filter(|p| !p.is_empty()),
        },
        distance_km: None,
        availability: Some(Availability {
            open: pharmacy.hours.open,
            close: pharmacy.hours.close,
            open24: pharmacy.hours.open24,
            days: pharmacy.hours.days,
        }),
        details: RecordDetails::Pharmacy {
            rating: pharmacy.rating.unwrap_or_default(),
            delivery: pharmacy.delivery.unwrap_or_default(),
            has_medicine: pharmacy.has_medicine.unwrap_or_default(),
            image_url: pharmacy.image_url.filter(|u| !u.is_empty()),
            reported_distance_km: pharmacy.distance,
        },
        highlighted: false,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::search::query;

    fn service(server: &mockito::ServerGuard) -> PharmacyService {
        PharmacyService::new(
            PharmacyServiceConfig {
                host: server.url(),
                filter_radius_locally: false,
            },
            reqwest::Client::new(),
        )
    }

    fn pharmacy_json(id: &str, lat: f64, lng: f64, close: &str, open24: bool) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Pharmacy {}", id),
            "rating": 4.5,
            "phone": "415-555-0100",
            "location": {
                "lat": lat,
                "lng": lng,
                "address": { "street": "1 Market St", "city": "San Francisco", "state": "CA", "zip": "94105" }
            },
            "hours": { "open": "08:00", "close": close, "open24": open24, "days": ["Mon", "Tue"] },
            "delivery": true,
            "has_medicine": true,
            "distance": 1.2,
            "image_url": ""
        })
    }

    #[tokio::test]
    async fn sends_filters_and_normalizes_records() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/pharmacies")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lat".into(), "37.7749".into()),
                mockito::Matcher::UrlEncoded("lng".into(), "-122.4194".into()),
                mockito::Matcher::UrlEncoded("radius".into(), "10".into()),
                mockito::Matcher::UrlEncoded("medicineName".into(), "Amoxicillin 500mg".into()),
                mockito::Matcher::UrlEncoded("untilTime".into(), "21:00".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": [pharmacy_json("p1", 37.78, -122.41, "22:00", false)] }).to_string())
            .create_async()
            .await;

        let query = query::build(
            Coordinate::new(37.7749, -122.4194),
            10.0,
            Some("Amoxicillin 500mg"),
            Some("21:00"),
        );
        let records = service(&server).search(&query).await.unwrap();

        mock.assert();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, "p1");
        assert_eq!(record.location, Coordinate::new(37.78, -122.41));
        assert_eq!(record.contact.phone.as_deref(), Some("415-555-0100"));
        assert_eq!(
            record.contact.address.as_deref(),
            Some("1 Market St, San Francisco, CA 94105")
        );
        assert_eq!(record.availability.as_ref().unwrap().close, "22:00");
        assert_eq!(
            record.details,
            RecordDetails::Pharmacy {
                rating: 4.5,
                delivery: true,
                has_medicine: true,
                image_url: None,
                reported_distance_km: Some(1.2),
            }
        );
    }

    #[tokio::test]
    async fn empty_object_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/pharmacies")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_body("{}")
            .create_async()
            .await;

        let query = query::build(Coordinate::new(37.7749, -122.4194), 5.0, None, None);
        let result = service(&server).search(&query).await;

        assert!(matches!(result, Err(SearchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn empty_list_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/pharmacies")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_body(json!({ "data": [] }).to_string())
            .create_async()
            .await;

        let query = query::build(Coordinate::new(37.7749, -122.4194), 5.0, None, None);
        let records = service(&server).search(&query).await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_is_remote_unavailable() {
        let service = PharmacyService::new(
            PharmacyServiceConfig {
                host: "http://127.0.0.1:1".to_string(),
                filter_radius_locally: false,
            },
            reqwest::Client::new(),
        );

        let query = query::build(Coordinate::new(37.7749, -122.4194), 5.0, None, None);
        let result = service.search(&query).await;

        assert!(matches!(result, Err(SearchError::RemoteUnavailable(_))));
    }

    #[tokio::test]
    #[traced_test]
    async fn bad_record_does_not_drop_the_rest() {
        let mut server = mockito::Server::new_async().await;
        let mut unrated = pharmacy_json("p2", 37.77, -122.42, "22:00", false);
        unrated["rating"] = serde_json::Value::Null;
        let mut without_hours = pharmacy_json("p3", 37.77, -122.42, "22:00", false);
        without_hours.as_object_mut().unwrap().remove("hours");

        server
            .mock("GET", "/api/pharmacies")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_body(
                json!({
                    "data": [
                        pharmacy_json("p1", 37.78, -122.41, "22:00", false),
                        unrated,
                        without_hours
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let query = query::build(Coordinate::new(37.7749, -122.4194), 5.0, None, None);
        let records = service(&server).search(&query).await.unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert!(matches!(
            records[1].details,
            RecordDetails::Pharmacy { rating, .. } if rating == 0.0
        ));
        assert!(logs_contain("Skipping undecodable pharmacies record"));
    }
}
