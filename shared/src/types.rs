//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Coordinate used when the user keeps GPS detection off.
///
/// Roughly central West Bengal, so the nearest-region resolution still
/// produces a sensible default market.
pub const FALLBACK_COORDINATES: GpsCoordinates = GpsCoordinates {
    latitude: 23.5,
    longitude: 88.1,
};
