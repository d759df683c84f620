//! Prediction history models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One past prediction, optionally reconciled with a realised price.
///
/// Entries are created server-side and mirrored here on fetch; `id` is an
/// opaque server-issued identifier, unique and stable for the entry's
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub crop: String,
    pub market: String,
    /// Target selling date from the original request
    #[serde(default)]
    pub date: Option<String>,
    pub predicted_price: Decimal,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub actual_price: Option<Decimal>,
    /// `actual_price - predicted_price`; positive means the realised price
    /// exceeded the prediction
    #[serde(default)]
    pub price_diff: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Whether the entry has been reconciled with a realised price
    pub fn has_actual(&self) -> bool {
        self.actual_price.is_some()
    }
}

/// Body for `POST /predict/actual`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActualPriceUpdate {
    pub prediction_id: String,
    pub actual_price: Decimal,
}
