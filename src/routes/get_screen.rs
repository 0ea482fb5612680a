use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use super::screen_response::ScreenResponse;
use crate::{types::app_state::AppState, utils::app_error::AppError};

pub async fn get_screen(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let view = state
        .screens
        .view(id)
        .await
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "Screen not found"))?;

    Ok((StatusCode::OK, Json(ScreenResponse { data: view })).into_response())
}
