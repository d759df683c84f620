//! Regional price aggregate models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Average recent price for one market/crop pair.
///
/// Snapshots are recomputed wholesale by the server on each fetch; entries
/// carry no identity across fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapEntry {
    pub market: String,
    pub crop: String,
    pub avg_price: Decimal,
}
