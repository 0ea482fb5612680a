use axum::{
    extract::{Path, State},
    response::Response,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::screen_response::search_response;
use crate::{
    search::{
        flow::{SearchFlow, SearchRequest},
        location::DeviceLocation,
        query::{parse_time_filter, DEFAULT_RADIUS_KM},
    },
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};

fn validate_until(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_time_filter(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("time");
    error.message = Some("Must be a time of day in HH:MM format".into());
    Err(error)
}

#[derive(Validate, Deserialize)]
pub struct GetPharmaciesPayload {
    #[validate(length(max = 300, message = "Must be at most 300 characters"))]
    pub address: Option<String>,

    pub lat: Option<f64>,
    pub lng: Option<f64>,

    #[validate(length(max = 100, message = "Must be at most 100 characters"))]
    pub medicine: Option<String>,

    /// Only pharmacies open until at least this time, `HH:MM`.
    #[validate(custom(function = "validate_until"))]
    pub until: Option<String>,

    pub radius: Option<f64>,
}

pub async fn get_pharmacies(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedQuery(payload): ValidatedQuery<GetPharmaciesPayload>,
) -> Result<Response, AppError> {
    let flow = SearchFlow {
        store: &state.screens,
        geocoder: &state.maps_service,
        client: state.pharmacy_service.as_ref(),
        default_origin: state.default_origins.pharmacies,
    };

    let outcome = flow
        .run(
            id,
            SearchRequest {
                address: payload.address,
                device: DeviceLocation::from_parts(payload.lat, payload.lng),
                radius_km: payload.radius.unwrap_or(DEFAULT_RADIUS_KM),
                category: payload.medicine,
                time_filter: payload.until,
            },
        )
        .await?;

    Ok(search_response(outcome))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use crate::{
        app::{gen_mock_app, open_screen},
        routes::screen_response::SearchResponse,
        search::{coordinate::Coordinate, screen::ScreenStatus},
    };

    fn pharmacy(id: &str, lat: f64, lng: f64, close: &str, open24: bool) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Pharmacy {}", id),
            "rating": 4.2,
            "phone": "415-555-0199",
            "location": {
                "lat": lat,
                "lng": lng,
                "address": { "street": "500 Castro St", "city": "San Francisco", "state": "CA", "zip": "94114" }
            },
            "hours": { "open": "09:00", "close": close, "open24": open24, "days": [] },
            "delivery": false,
            "has_medicine": id != "p3",
            "distance": 0.5,
            "image_url": "https://img.example/p.png"
        })
    }

    #[tokio::test]
    #[traced_test]
    async fn geocodes_address_and_filters_by_closing_time() {
        let mut mock_app = gen_mock_app().await;
        let screen = open_screen(&mock_app.app, "pharmacies").await;

        let geocode = mock_app
            .google_server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::UrlEncoded(
                "address".into(),
                "Castro, San Francisco".into(),
            ))
            .with_body(
                json!({
                    "status": "OK",
                    "results": [{
                        "formatted_address": "Castro, San Francisco, CA",
                        "geometry": { "location": { "lat": 37.7609, "lng": -122.435 } }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let pharmacies = mock_app
            .pharmacy_server
            .mock("GET", "/api/pharmacies")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lat".into(), "37.7609".into()),
                mockito::Matcher::UrlEncoded("lng".into(), "-122.435".into()),
                mockito::Matcher::UrlEncoded("medicineName".into(), "Aspirin".into()),
                mockito::Matcher::UrlEncoded("untilTime".into(), "21:30".into()),
            ]))
            .with_body(
                json!({
                    "data": [
                        pharmacy("p1", 37.7612, -122.4351, "20:00", false),
                        pharmacy("p2", 37.7650, -122.4300, "22:00", false),
                        pharmacy("p3", 37.7700, -122.4400, "00:00", true)
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = mock_app
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!(
                        "/screens/{}/pharmacies?address=Castro%2C%20San%20Francisco&medicine=Aspirin&until=21:30&radius=5",
                        screen.id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        geocode.assert();
        pharmacies.assert();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: SearchResponse = serde_json::from_slice(&body).unwrap();

        let ids: Vec<_> = body.data.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3"]);
        assert!(body.data.results[0].highlighted);
        assert!(!body.data.results[1].highlighted);
        assert_eq!(body.data.status, ScreenStatus::Results { count: 2 });
        assert_eq!(body.data.map_center, Coordinate::new(37.7609, -122.435));
        assert_eq!(body.data.origin, Some(Coordinate::new(37.7609, -122.435)));
    }

    #[tokio::test]
    #[traced_test]
    async fn unresolvable_first_address_is_unprocessable() {
        let mut mock_app = gen_mock_app().await;
        let screen = open_screen(&mock_app.app, "pharmacies").await;

        mock_app
            .google_server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_body(json!({ "status": "ZERO_RESULTS", "results": [] }).to_string())
            .create_async()
            .await;

        let response = mock_app
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/screens/{}/pharmacies?address=Atlantis", screen.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(logs_contain("Geocoding \"Atlantis\" failed"));
    }

    #[tokio::test]
    async fn rejects_malformed_time_filter() {
        let mock_app = gen_mock_app().await;
        let screen = open_screen(&mock_app.app, "pharmacies").await;

        let response = mock_app
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/screens/{}/pharmacies?until=late", screen.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
