use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapsServiceError {
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Geocoding returned {0}")]
    Status(String),

    #[error("Geocoding returned an out-of-range coordinate")]
    InvalidCoordinate,
}
