use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use super::screen_response::ScreenResponse;
use crate::{
    search::record::SearchKind,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

#[derive(Validate, Deserialize)]
pub struct PostScreenPayload {
    pub kind: SearchKind,
}

pub async fn post_screen(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostScreenPayload>,
) -> Result<Response, AppError> {
    let view = state
        .screens
        .create(payload.kind, state.default_origins.for_kind(payload.kind))
        .await;

    info!("Opened {} screen {}", view.kind, view.id);

    Ok((StatusCode::CREATED, Json(ScreenResponse { data: view })).into_response())
}
