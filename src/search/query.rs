use chrono::NaiveTime;
use serde::Serialize;
use tracing::warn;

use super::coordinate::Coordinate;

pub const MIN_RADIUS_KM: f64 = 1.0;
pub const MAX_RADIUS_KM: f64 = 50.0;
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Built fresh for every search and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchQuery {
    pub origin: Coordinate,
    pub radius_km: f64,
    pub category: Option<String>,
    pub time_filter: Option<String>,
}

pub fn build(
    origin: Coordinate,
    radius_km: f64,
    category: Option<&str>,
    time_filter: Option<&str>,
) -> SearchQuery {
    SearchQuery {
        origin,
        radius_km: clamp_radius(radius_km),
        category: category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        time_filter: time_filter.and_then(normalize_time_filter),
    }
}

/// Out-of-range radii are clamped, not rejected.
pub fn clamp_radius(radius_km: f64) -> f64 {
    if radius_km.is_nan() {
        return DEFAULT_RADIUS_KM;
    }
    radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
}

pub fn parse_time_filter(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

/// Zero-pads `H:MM` so that later string comparisons order chronologically.
pub fn normalize_time_filter(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match parse_time_filter(trimmed) {
        Some(time) => Some(time.format("%H:%M").to_string()),
        None => {
            warn!("Dropping unparseable time filter: {}", trimmed);
            None
        }
    }
}
