use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    search::{error::SearchError, flow::FlowError},
    services::profile_service::types::profile_service_error::ProfileServiceError,
};

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponseJson {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<FlowError> for AppError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::ScreenNotFound(_) => AppError::new(StatusCode::NOT_FOUND, "Screen not found"),
            FlowError::WrongKind { expected, actual } => AppError::new(
                StatusCode::CONFLICT,
                &format!("Screen searches {}, not {}", actual, expected),
            ),
            FlowError::Search(SearchError::LocationUnavailable) => AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Could not determine your location. Enter an address and try again.",
            ),
            FlowError::Search(e) => {
                error!("Search failed: {}", e);
                AppError::new(
                    StatusCode::BAD_GATEWAY,
                    "Search service unavailable, please retry",
                )
            }
        }
    }
}

impl From<ProfileServiceError> for AppError {
    fn from(e: ProfileServiceError) -> Self {
        error!("Failed to update profile: {}", e);
        match e {
            ProfileServiceError::Rejected(message) => {
                AppError::new(StatusCode::BAD_GATEWAY, &message)
            }
            ProfileServiceError::Internal(_) => AppError::new(
                StatusCode::BAD_GATEWAY,
                "Failed to update profile. Please try again.",
            ),
        }
    }
}
