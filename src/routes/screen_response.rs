use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::search::{flow::SearchOutcome, screen::ScreenView};

#[derive(Serialize, Deserialize)]
pub struct ScreenResponse {
    pub data: ScreenView,
}

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: ScreenView,
    /// Set when a newer search superseded this one; `data` is then the
    /// screen as the newer search left it.
    pub stale: bool,
}

pub fn search_response(outcome: SearchOutcome) -> Response {
    let (data, stale) = match outcome {
        SearchOutcome::Applied(view) => (view, false),
        SearchOutcome::Stale(view) => (view, true),
    };

    (StatusCode::OK, Json(SearchResponse { data, stale })).into_response()
}
