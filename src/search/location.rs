use async_trait::async_trait;
use tracing::warn;

use super::{coordinate::Coordinate, error::SearchError};

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinate, SearchError>;
}

/// Where the device thinks it is. `Denied` covers refusal, timeouts and
/// coordinates that are out of range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeviceLocation {
    Known(Coordinate),
    Denied,
}

impl DeviceLocation {
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Self {
        match (lat, lng) {
            (Some(lat), Some(lng)) => match Coordinate::checked(lat, lng) {
                Some(coordinate) => DeviceLocation::Known(coordinate),
                None => {
                    warn!("Ignoring out-of-range device location {}, {}", lat, lng);
                    DeviceLocation::Denied
                }
            },
            _ => DeviceLocation::Denied,
        }
    }
}

pub struct LocationResolver<'a> {
    geocoder: &'a dyn Geocoder,
    default_origin: Coordinate,
}

impl<'a> LocationResolver<'a> {
    pub fn new(geocoder: &'a dyn Geocoder, default_origin: Coordinate) -> Self {
        Self {
            geocoder,
            default_origin,
        }
    }

    /// A typed address wins over the device. A failed geocode falls back to the
    /// previous origin; a denied device falls back to the deployment default so
    /// the user is never blocked.
    pub async fn resolve(
        &self,
        address: Option<&str>,
        device: DeviceLocation,
        previous: Option<Coordinate>,
    ) -> Result<Coordinate, SearchError> {
        if let Some(address) = address.map(str::trim).filter(|a| !a.is_empty()) {
            return match self.geocoder.geocode(address).await {
                Ok(coordinate) => Ok(coordinate),
                Err(e) => {
                    warn!("Geocoding \"{}\" failed: {}", address, e);
                    previous.ok_or(SearchError::LocationUnavailable)
                }
            };
        }

        match device {
            DeviceLocation::Known(coordinate) => Ok(coordinate),
            DeviceLocation::Denied => {
                warn!(
                    "Device location unavailable, using default {}, {}",
                    self.default_origin.lat, self.default_origin.lng
                );
                Ok(self.default_origin)
            }
        }
    }
}
