use tracing::info;
use urlencoding::encode;

use super::types::{
    profile_service_error::ProfileServiceError,
    profile_update::{ProfileUpdate, ProfileUpdateResponse},
};

#[derive(Clone)]
pub struct ProfileServiceConfig {
    pub host: String,
}

/// Client for the user-profile microservice keyed by identity-provider user id.
#[derive(Clone)]
pub struct ProfileService {
    config: ProfileServiceConfig,
    client: reqwest::Client,
}

impl ProfileService {
    pub fn new(config: ProfileServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<(), ProfileServiceError> {
        let url = format!("{}/api/users?clerkId={}", self.config.host, encode(user_id));

        let resp = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(|e| ProfileServiceError::Internal(format!("Failed to send request: {}", e)))?;

        // the service reports failures in the body, sometimes with a 4xx/5xx
        let body = resp.json::<ProfileUpdateResponse>().await.map_err(|e| {
            ProfileServiceError::Internal(format!("Failed to get response body: {}", e))
        })?;

        if !body.success {
            return Err(ProfileServiceError::Rejected(
                body.error
                    .unwrap_or_else(|| "Failed to update profile".to_string()),
            ));
        }

        info!("Updated profile for user {}", user_id);
        Ok(())
    }
}
