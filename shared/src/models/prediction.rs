//! Prediction request and response models
//!
//! Field names mirror the API's JSON exactly: the envelope is camelCase,
//! while the nested weather payload keeps the snake_case keys it is served
//! with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{GpsCoordinates, FALLBACK_COORDINATES};

/// A prediction submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub crop: String,
    pub market: String,
    /// Target selling date, ISO `YYYY-MM-DD`
    pub date: String,
    pub lat: f64,
    pub lon: f64,
}

impl PredictionRequest {
    /// Build a request pinned to an explicit coordinate
    pub fn new(
        crop: impl Into<String>,
        market: impl Into<String>,
        date: impl Into<String>,
        location: GpsCoordinates,
    ) -> Self {
        Self {
            crop: crop.into(),
            market: market.into(),
            date: date.into(),
            lat: location.latitude,
            lon: location.longitude,
        }
    }

    /// Build a request using the fallback coordinate (GPS off)
    pub fn without_location(
        crop: impl Into<String>,
        market: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::new(crop, market, date, FALLBACK_COORDINATES)
    }

    pub fn location(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.lat, self.lon)
    }
}

/// Direction of the predicted short-term price trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Best selling day suggestion within the forecast horizon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub label: String,
    pub price: Decimal,
}

/// Current weather conditions at the queried location
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub feels_like_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub rainfall_mm: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One aggregated forecast day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: String,
    pub temp_c: f64,
    #[serde(default)]
    pub rainfall_mm: Option<f64>,
}

/// Crop suitability classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityLevel {
    Ideal,
    Moderate,
    Stressful,
}

/// Agronomic insight block attached to a prediction
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgroInsights {
    #[serde(default)]
    pub suitability_level: Option<SuitabilityLevel>,
    #[serde(default)]
    pub suitability_text: Option<String>,
    #[serde(default)]
    pub disease_risk: Option<String>,
    #[serde(default)]
    pub extreme_warning: Option<String>,
}

/// Price estimate for a nearby alternative market
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeMarket {
    pub market: String,
    pub price: Decimal,
}

/// A point on the next-days trend series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuturePoint {
    pub date: String,
    pub price: Decimal,
}

/// A successful prediction response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    #[serde(default)]
    pub prediction_id: Option<String>,
    pub predicted_price: Decimal,
    pub confidence_lower: Decimal,
    pub confidence_upper: Decimal,
    pub trend_direction: TrendDirection,
    #[serde(default)]
    pub best_day: Option<BestDay>,
    #[serde(default)]
    pub future_series: Vec<FuturePoint>,
    pub advice: String,
    #[serde(default)]
    pub weather: CurrentWeather,
    #[serde(default)]
    pub forecast_weather: Vec<DailyForecast>,
    #[serde(default)]
    pub agro_insights: AgroInsights,
    #[serde(default)]
    pub alternative_markets: Vec<AlternativeMarket>,
    #[serde(default)]
    pub feature_importance_summary: Vec<String>,
}
