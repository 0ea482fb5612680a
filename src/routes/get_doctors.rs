use axum::{
    extract::{Path, State},
    response::Response,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::screen_response::search_response;
use crate::{
    search::{
        flow::{SearchFlow, SearchRequest},
        location::DeviceLocation,
        query::DEFAULT_RADIUS_KM,
    },
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};

#[derive(Validate, Deserialize)]
pub struct GetDoctorsPayload {
    #[validate(length(max = 300, message = "Must be at most 300 characters"))]
    pub address: Option<String>,

    /// Device geolocation, absent when the browser refused or timed out.
    pub lat: Option<f64>,
    pub lng: Option<f64>,

    #[validate(length(max = 100, message = "Must be at most 100 characters"))]
    pub specialty: Option<String>,

    pub radius: Option<f64>,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_doctors(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedQuery(payload): ValidatedQuery<GetDoctorsPayload>,
) -> Result<Response, AppError> {
    let flow = SearchFlow {
        store: &state.screens,
        geocoder: &state.maps_service,
        client: state.doctor_service.as_ref(),
        default_origin: state.default_origins.doctors,
    };

    let outcome = flow
        .run(
            id,
            SearchRequest {
                address: payload.address,
                device: DeviceLocation::from_parts(payload.lat, payload.lng),
                radius_km: payload.radius.unwrap_or(DEFAULT_RADIUS_KM),
                category: payload.specialty,
                time_filter: None,
            },
        )
        .await?;

    Ok(search_response(outcome))
}
