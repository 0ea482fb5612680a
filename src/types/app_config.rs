use std::{env, net::SocketAddr, time::Duration};

use thiserror::Error;

use crate::{
    search::{coordinate::Coordinate, record::SearchKind},
    services::doctor_service::doctor_service::DoctorApiSchema,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Fallback map centres used when the device location is unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefaultOrigins {
    pub doctors: Coordinate,
    pub pharmacies: Coordinate,
}

impl DefaultOrigins {
    pub fn for_kind(&self, kind: SearchKind) -> Coordinate {
        match kind {
            SearchKind::Doctors => self.doctors,
            SearchKind::Pharmacies => self.pharmacies,
        }
    }
}

impl Default for DefaultOrigins {
    fn default() -> Self {
        Self {
            // Mathura
            doctors: Coordinate::new(27.492413, 77.673676),
            // San Francisco
            pharmacies: Coordinate::new(37.7749, -122.4194),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub google_host: String,
    pub google_key: String,
    pub doctor_host: String,
    pub doctor_schema: DoctorApiSchema,
    pub pharmacy_host: String,
    pub pharmacy_filter_radius_locally: bool,
    pub profile_host: String,
    pub auth_key: Option<String>,
    pub request_timeout: Duration,
    pub default_origins: DefaultOrigins,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("google_host", &self.google_host)
            .field("google_key", &"[redacted]")
            .field("doctor_host", &self.doctor_host)
            .field("doctor_schema", &self.doctor_schema)
            .field("pharmacy_host", &self.pharmacy_host)
            .field(
                "pharmacy_filter_radius_locally",
                &self.pharmacy_filter_radius_locally,
            )
            .field("profile_host", &self.profile_host)
            .field("auth_key", &self.auth_key.as_ref().map(|_| "[redacted]"))
            .field("request_timeout", &self.request_timeout)
            .field("default_origins", &self.default_origins)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup`, which returns `None` for unset names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

        let defaults = DefaultOrigins::default();

        Ok(Self {
            bind_addr: parse_or(
                "BIND_ADDR",
                optional("BIND_ADDR"),
                SocketAddr::from(([0, 0, 0, 0], 3000)),
            )?,
            google_host: optional("GOOGLE_MAPS_HOST")
                .unwrap_or_else(|| "https://maps.googleapis.com".to_string()),
            google_key: required("GOOGLE_MAPS_API_KEY")?,
            doctor_host: required("DOCTOR_API_HOST")?,
            doctor_schema: parse_or(
                "DOCTOR_API_SCHEMA",
                optional("DOCTOR_API_SCHEMA"),
                DoctorApiSchema::List,
            )?,
            pharmacy_host: required("PHARMACY_API_HOST")?,
            pharmacy_filter_radius_locally: parse_or(
                "PHARMACY_FILTER_RADIUS_LOCALLY",
                optional("PHARMACY_FILTER_RADIUS_LOCALLY"),
                false,
            )?,
            profile_host: required("PROFILE_API_HOST")?,
            auth_key: optional("AUTH_KEY"),
            request_timeout: timeout_or(optional("REQUEST_TIMEOUT_SECS"), 10)?,
            default_origins: DefaultOrigins {
                doctors: coordinate_or(
                    ("DEFAULT_DOCTOR_LAT", optional("DEFAULT_DOCTOR_LAT")),
                    ("DEFAULT_DOCTOR_LNG", optional("DEFAULT_DOCTOR_LNG")),
                    defaults.doctors,
                )?,
                pharmacies: coordinate_or(
                    ("DEFAULT_PHARMACY_LAT", optional("DEFAULT_PHARMACY_LAT")),
                    ("DEFAULT_PHARMACY_LNG", optional("DEFAULT_PHARMACY_LNG")),
                    defaults.pharmacies,
                )?,
            },
        })
    }
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}

fn timeout_or(value: Option<String>, default_secs: u64) -> Result<Duration, ConfigError> {
    let secs = parse_or("REQUEST_TIMEOUT_SECS", value, default_secs)?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            name: "REQUEST_TIMEOUT_SECS",
            reason: "must be at least 1 second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn coordinate_or(
    lat: (&'static str, Option<String>),
    lng: (&'static str, Option<String>),
    default: Coordinate,
) -> Result<Coordinate, ConfigError> {
    let lat_value = parse_or(lat.0, lat.1, default.lat)?;
    let lng_value = parse_or(lng.0, lng.1, default.lng)?;

    Coordinate::checked(lat_value, lng_value).ok_or(ConfigError::Invalid {
        name: lat.0,
        reason: format!("{}, {} is not a valid coordinate", lat_value, lng_value),
    })
}
