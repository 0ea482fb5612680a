use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{
    types::{app_state::AppState, session::Session},
    utils::app_error::AppError,
};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Enforces the shared API key when one is configured and attaches the
/// identity provider's user id, if forwarded, as a [`Session`].
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(ref auth_key) = state.auth_key {
        match headers.get("authorization") {
            Some(header) if header == auth_key => {}
            _ => return Err(AppError::new(StatusCode::UNAUTHORIZED, "Unauthorized")),
        }
    }

    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    request.extensions_mut().insert(Session { user_id });

    Ok(next.run(request).await)
}
