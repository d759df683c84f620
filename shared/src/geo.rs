//! Great-circle geometry and nearest-region resolution

use crate::markets::{MarketRegion, MARKET_REGIONS};
use crate::types::GpsCoordinates;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers
pub fn haversine_km(a: GpsCoordinates, b: GpsCoordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Resolve a coordinate to the nearest known market region.
///
/// Ties resolve to the earlier region in declaration order; the region set
/// is non-empty by construction so this never fails.
pub fn nearest_market(point: GpsCoordinates) -> &'static MarketRegion {
    nearest_of(point, MARKET_REGIONS).unwrap_or(&MARKET_REGIONS[0])
}

/// Nearest region out of an explicit candidate set; `None` only when the
/// set is empty. Strict comparison keeps the first of tied candidates.
pub fn nearest_of(
    point: GpsCoordinates,
    regions: &'static [MarketRegion],
) -> Option<&'static MarketRegion> {
    let mut iter = regions.iter();
    let mut best = iter.next()?;
    let mut best_dist = haversine_km(point, best.coordinates());
    for region in iter {
        let dist = haversine_km(point, region.coordinates());
        if dist < best_dist {
            best = region;
            best_dist = dist;
        }
    }
    Some(best)
}
