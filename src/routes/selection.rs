use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::screen_response::ScreenResponse;
use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

#[derive(Validate, Deserialize)]
pub struct PutSelectionPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub record_id: String,
}

/// Marker or list click: selects a record from the current results and
/// centres the map on it.
pub async fn put_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<PutSelectionPayload>,
) -> Result<Response, AppError> {
    let view = state
        .screens
        .with_screen(id, |screen| {
            screen
                .select_record(&payload.record_id)
                .is_some()
                .then(|| screen.view())
        })
        .await
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "Screen not found"))?
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "Record not in current results"))?;

    Ok((StatusCode::OK, Json(ScreenResponse { data: view })).into_response())
}

pub async fn delete_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let view = state
        .screens
        .with_screen(id, |screen| {
            screen.clear_selection();
            screen.view()
        })
        .await
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "Screen not found"))?;

    Ok((StatusCode::OK, Json(ScreenResponse { data: view })).into_response())
}
