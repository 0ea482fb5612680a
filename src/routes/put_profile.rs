use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    services::profile_service::types::profile_update::{
        BloodGroup, ProfileUpdate, ProfileUpdateMetadata, SEX_OPTIONS,
    },
    types::{app_state::AppState, session::Session},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

fn validate_blood_group(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<BloodGroup>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("blood_group"))
}

fn validate_sex(value: &str) -> Result<(), ValidationError> {
    if SEX_OPTIONS.iter().any(|option| *option == value) {
        Ok(())
    } else {
        Err(ValidationError::new("sex"))
    }
}

#[derive(Validate, Deserialize)]
pub struct PutProfilePayload {
    #[validate(range(min = 1, max = 150, message = "Must be between 1 and 150"))]
    pub age: u32,

    #[validate(custom(function = "validate_blood_group"))]
    pub blood_group: String,

    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub address: String,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub phone_number: String,
}

#[derive(Serialize, Deserialize)]
pub struct PutProfileResponse {
    pub success: bool,
}

pub async fn put_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    ValidatedJson(payload): ValidatedJson<PutProfilePayload>,
) -> Result<Response, AppError> {
    let user_id = session
        .user_id
        .ok_or_else(|| AppError::new(StatusCode::UNAUTHORIZED, "Sign in to update your profile"))?;

    let blood_group = payload
        .blood_group
        .parse::<BloodGroup>()
        .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, &e))?;

    state
        .profile_service
        .update_profile(
            &user_id,
            &ProfileUpdate {
                age: payload.age,
                blood_group,
                sex: payload.sex,
                address: payload.address,
                metadata: ProfileUpdateMetadata {
                    phone_number: payload.phone_number,
                },
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(PutProfileResponse { success: true })).into_response())
}
