use async_trait::async_trait;
use tracing::debug;
use urlencoding::encode;

use super::types::{
    google_geocode_response::GoogleGeocodeResponse, maps_service_error::MapsServiceError,
};
use crate::search::{coordinate::Coordinate, error::SearchError, location::Geocoder};

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub async fn geocode_address(&self, address: &str) -> Result<Coordinate, MapsServiceError> {
        let url = format!(
            "{}/maps/api/geocode/json?address={}&key={}",
            self.config.host,
            encode(address),
            self.config.api_key
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| MapsServiceError::Internal(format!("Failed to send request: {}", e)))?;

        let body = resp.json::<GoogleGeocodeResponse>().await.map_err(|e| {
            MapsServiceError::Internal(format!("Failed to get response body: {}", e))
        })?;

        if body.status != "OK" {
            return Err(MapsServiceError::Status(body.status));
        }

        let first = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| MapsServiceError::Status("ZERO_RESULTS".to_string()))?;

        let location = Coordinate::checked(
            first.geometry.location.lat,
            first.geometry.location.lng,
        )
        .ok_or(MapsServiceError::InvalidCoordinate)?;

        debug!("Geocoded \"{}\" to {}", address, first.formatted_address);

        Ok(location)
    }
}

#[async_trait]
impl Geocoder for MapsService {
    async fn geocode(&self, address: &str) -> Result<Coordinate, SearchError> {
        self.geocode_address(address)
            .await
            .map_err(SearchError::remote)
    }
}
