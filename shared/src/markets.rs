//! Static market reference data
//!
//! The dashboard covers the West Bengal district markets. The region list
//! and the crop compatibility table are compiled in, never fetched: they
//! change on the timescale of releases, not requests.

use crate::types::GpsCoordinates;

/// A named market region with its reference coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketRegion {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl MarketRegion {
    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

/// All known market regions (district headquarters coordinates)
pub const MARKET_REGIONS: &[MarketRegion] = &[
    MarketRegion { name: "Kolkata", latitude: 22.5726, longitude: 88.3639 },
    MarketRegion { name: "Howrah", latitude: 22.5958, longitude: 88.2636 },
    MarketRegion { name: "Hooghly", latitude: 22.8960, longitude: 88.2470 },
    MarketRegion { name: "Nadia", latitude: 23.4710, longitude: 88.5565 },
    MarketRegion { name: "North 24 Parganas", latitude: 22.8950, longitude: 88.4152 },
    MarketRegion { name: "South 24 Parganas", latitude: 22.3560, longitude: 88.4313 },
    MarketRegion { name: "Purba Medinipur", latitude: 22.0653, longitude: 87.9927 },
    MarketRegion { name: "Paschim Medinipur", latitude: 22.4310, longitude: 87.3216 },
    MarketRegion { name: "Jhargram", latitude: 22.4500, longitude: 86.9830 },
    MarketRegion { name: "Bankura", latitude: 23.2324, longitude: 87.0710 },
    MarketRegion { name: "Birbhum", latitude: 23.8400, longitude: 87.6200 },
    MarketRegion { name: "Purba Bardhaman", latitude: 23.2320, longitude: 87.8610 },
    MarketRegion { name: "Paschim Bardhaman", latitude: 23.6840, longitude: 87.5560 },
    MarketRegion { name: "Murshidabad", latitude: 24.1750, longitude: 88.2800 },
    MarketRegion { name: "Malda", latitude: 25.0108, longitude: 88.1411 },
    MarketRegion { name: "Dakshin Dinajpur", latitude: 25.1350, longitude: 88.7660 },
    MarketRegion { name: "Uttar Dinajpur", latitude: 25.6300, longitude: 88.3000 },
    MarketRegion { name: "Alipurduar", latitude: 26.4916, longitude: 89.5270 },
    MarketRegion { name: "Cooch Behar", latitude: 26.3257, longitude: 89.4450 },
    MarketRegion { name: "Jalpaiguri", latitude: 26.5435, longitude: 88.7205 },
    MarketRegion { name: "Darjeeling", latitude: 27.0410, longitude: 88.2663 },
    MarketRegion { name: "Kalimpong", latitude: 27.0680, longitude: 88.4710 },
    MarketRegion { name: "Purulia", latitude: 23.3320, longitude: 86.3650 },
];

/// Allowed crops per market, sorted within each entry.
///
/// Markets absent from this table carry no crop restriction.
pub const MARKET_CROPS: &[(&str, &[&str])] = &[
    ("Alipurduar", &["Maize", "Tea"]),
    ("Bankura", &["Oilseeds", "Pulses"]),
    ("Birbhum", &["Oilseeds", "Pulses", "Rice"]),
    ("Cooch Behar", &["Jute", "Maize", "Pineapple", "Tea"]),
    ("Dakshin Dinajpur", &["Pulses", "Rice", "Wheat"]),
    ("Darjeeling", &["Maize", "Tea"]),
    ("Hooghly", &["Jute", "Potato", "Rice", "Vegetables"]),
    ("Howrah", &["Banana", "Rice", "Vegetables"]),
    ("Jalpaiguri", &["Maize", "Pineapple", "Tea"]),
    ("Jhargram", &["Oilseeds", "Pulses"]),
    ("Kalimpong", &["Tea"]),
    ("Kolkata", &["Banana", "Rice", "Vegetables"]),
    ("Malda", &["Litchi", "Mango", "Rice", "Sugarcane", "Wheat"]),
    ("Murshidabad", &["Jute", "Mango", "Oilseeds", "Rice", "Sugarcane", "Wheat"]),
    ("Nadia", &["Jute", "Mango", "Oilseeds", "Pulses", "Rice"]),
    ("North 24 Parganas", &["Jute", "Rice", "Vegetables"]),
    ("Paschim Bardhaman", &["Oilseeds", "Potato", "Rice", "Wheat"]),
    ("Paschim Medinipur", &["Oilseeds", "Potato", "Rice", "Vegetables"]),
    ("Purba Bardhaman", &["Oilseeds", "Potato", "Rice", "Wheat"]),
    ("Purba Medinipur", &["Oilseeds", "Potato", "Rice", "Vegetables"]),
    ("Purulia", &["Maize", "Oilseeds", "Pulses"]),
    ("South 24 Parganas", &["Banana", "Potato", "Rice", "Vegetables"]),
    ("Uttar Dinajpur", &["Pineapple", "Rice", "Wheat"]),
];

/// Look up a market region by name
pub fn find_market(name: &str) -> Option<&'static MarketRegion> {
    MARKET_REGIONS.iter().find(|m| m.name == name)
}

/// Crops considered typical for a market, if the market is restricted
pub fn allowed_crops(market: &str) -> Option<&'static [&'static str]> {
    MARKET_CROPS
        .iter()
        .find(|(name, _)| *name == market)
        .map(|(_, crops)| *crops)
}

/// Whether a crop/market pairing passes the client-side gate.
///
/// Markets without a table entry are unrestricted, and an empty crop
/// selection is never rejected here (selection completeness is a separate
/// concern). This check is advisory: the server validates independently.
pub fn is_crop_compatible(market: &str, crop: &str) -> bool {
    if crop.is_empty() {
        return true;
    }
    match allowed_crops(market) {
        Some(crops) => crops.contains(&crop),
        None => true,
    }
}

/// The full crop vocabulary: sorted union of all allowed sets
pub fn all_crops() -> Vec<&'static str> {
    let mut crops: Vec<&'static str> = MARKET_CROPS
        .iter()
        .flat_map(|(_, crops)| crops.iter().copied())
        .collect();
    crops.sort_unstable();
    crops.dedup();
    crops
}
