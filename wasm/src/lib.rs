//! WebAssembly module for the Agri Price Dashboard
//!
//! Provides client-side computation for:
//! - Nearest-market resolution from a coordinate
//! - Crop/market compatibility checks
//! - Crop vocabulary and allowed-crop lookups
//! - Top-N heatmap ranking

use wasm_bindgen::prelude::*;

use shared::geo::{haversine_km, nearest_market};
use shared::markets::{all_crops, allowed_crops, is_crop_compatible};
use shared::types::GpsCoordinates;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Name of the market region nearest to a coordinate
#[wasm_bindgen]
pub fn nearest_market_name(lat: f64, lon: f64) -> String {
    nearest_market(GpsCoordinates::new(lat, lon)).name.to_string()
}

/// Distance in kilometers from a coordinate to a named market, or -1.0 for
/// an unknown market
#[wasm_bindgen]
pub fn distance_to_market_km(lat: f64, lon: f64, market: &str) -> f64 {
    match shared::markets::find_market(market) {
        Some(region) => haversine_km(GpsCoordinates::new(lat, lon), region.coordinates()),
        None => -1.0,
    }
}

/// Whether a crop/market pairing passes the client-side gate
#[wasm_bindgen]
pub fn check_crop_compatible(market: &str, crop: &str) -> bool {
    is_crop_compatible(market, crop)
}

/// Allowed crops for a market as a JSON array, or null when unrestricted
#[wasm_bindgen]
pub fn allowed_crops_json(market: &str) -> Result<JsValue, JsValue> {
    match allowed_crops(market) {
        Some(crops) => {
            let json = serde_json::to_string(crops)
                .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))?;
            Ok(JsValue::from_str(&json))
        }
        None => Ok(JsValue::NULL),
    }
}

/// The full crop vocabulary (sorted) as a JSON array
#[wasm_bindgen]
pub fn crop_vocabulary_json() -> Result<String, JsValue> {
    serde_json::to_string(&all_crops())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Rank heatmap entries by average price, descending, ties keeping their
/// input order. Takes and returns JSON arrays of `{market, crop, avgPrice}`.
#[wasm_bindgen]
pub fn top_markets_json(entries_json: &str, n: usize) -> Result<String, JsValue> {
    let mut entries: Vec<HeatmapEntry> = serde_json::from_str(entries_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid heatmap JSON: {}", e)))?;

    entries.sort_by(|a, b| b.avg_price.cmp(&a.avg_price));
    entries.truncate(n);

    serde_json::to_string(&entries)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_market_name() {
        assert_eq!(nearest_market_name(22.58, 88.30), "Howrah");
    }

    #[test]
    fn test_top_markets_ranking() {
        let input = r#"[
            {"market": "A", "crop": "Rice", "avgPrice": 30.0},
            {"market": "B", "crop": "Rice", "avgPrice": 45.0},
            {"market": "C", "crop": "Rice", "avgPrice": 45.0},
            {"market": "D", "crop": "Rice", "avgPrice": 10.0}
        ]"#;
        let out = top_markets_json(input, 2).unwrap();
        let ranked: Vec<HeatmapEntry> = serde_json::from_str(&out).unwrap();
        assert_eq!(ranked[0].market, "B");
        assert_eq!(ranked[1].market, "C");
    }

    #[test]
    fn test_unknown_market_distance() {
        assert_eq!(distance_to_market_km(22.0, 88.0, "Atlantis"), -1.0);
    }
}
