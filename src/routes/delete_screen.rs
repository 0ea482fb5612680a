use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::{types::app_state::AppState, utils::app_error::AppError};

pub async fn delete_screen(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.screens.remove(id).await {
        return Err(AppError::new(StatusCode::NOT_FOUND, "Screen not found"));
    }

    info!("Released screen {}", id);
    Ok(StatusCode::NO_CONTENT)
}
