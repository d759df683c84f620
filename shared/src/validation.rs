//! Pure pre-submission validation
//!
//! These checks run client-side before any network call. They gate the
//! obviously-wrong inputs; the server validates independently and remains
//! the source of truth.

use rust_decimal::Decimal;

use crate::markets::{allowed_crops, is_crop_compatible};
use crate::models::PredictionRequest;

/// Validate a realised price before posting it
pub fn validate_actual_price(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Actual price must be a positive number");
    }
    Ok(())
}

/// Validate a coordinate pair is on the globe
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a prediction request before submission.
///
/// Incompatible crop/market pairings return a message listing the allowed
/// crops verbatim so the caller can surface a corrective hint.
pub fn validate_prediction_request(request: &PredictionRequest) -> Result<(), String> {
    if request.crop.is_empty() {
        return Err("Select a crop before submitting".to_string());
    }
    if request.market.is_empty() {
        return Err("Select a market before submitting".to_string());
    }
    if request.date.is_empty() {
        return Err("Select a target selling date".to_string());
    }
    validate_coordinates(request.lat, request.lon).map_err(str::to_string)?;

    if !is_crop_compatible(&request.market, &request.crop) {
        // Incompatibility implies the market has a table entry
        let allowed = allowed_crops(&request.market).unwrap_or_default();
        return Err(format!(
            "\"{}\" is not typically grown in {}. For {}, choose one of: {}",
            request.crop,
            request.market,
            request.market,
            allowed.join(", ")
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_actual_price_positive() {
        assert!(validate_actual_price(dec("0.01")).is_ok());
        assert!(validate_actual_price(dec("42.5")).is_ok());
    }

    #[test]
    fn test_actual_price_rejects_zero_and_negative() {
        assert!(validate_actual_price(Decimal::ZERO).is_err());
        assert!(validate_actual_price(dec("-5")).is_err());
    }

    #[test]
    fn test_coordinates_in_range() {
        assert!(validate_coordinates(22.57, 88.36).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_request_with_compatible_pairing() {
        let req = PredictionRequest::without_location("Tea", "Darjeeling", "2025-07-01");
        assert!(validate_prediction_request(&req).is_ok());
    }

    #[test]
    fn test_request_with_incompatible_pairing_lists_allowed_set() {
        let req = PredictionRequest::without_location("Rice", "Darjeeling", "2025-07-01");
        let err = validate_prediction_request(&req).unwrap_err();
        assert!(err.contains("Maize, Tea"), "message was: {err}");
        assert!(err.contains("Darjeeling"));
    }

    #[test]
    fn test_request_with_unknown_market_passes() {
        let req = PredictionRequest::without_location("Rice", "Siliguri", "2025-07-01");
        assert!(validate_prediction_request(&req).is_ok());
    }

    #[test]
    fn test_request_missing_fields() {
        let req = PredictionRequest::without_location("", "Kolkata", "2025-07-01");
        assert!(validate_prediction_request(&req).is_err());
        let req = PredictionRequest::without_location("Rice", "", "2025-07-01");
        assert!(validate_prediction_request(&req).is_err());
        let req = PredictionRequest::without_location("Rice", "Kolkata", "");
        assert!(validate_prediction_request(&req).is_err());
    }
}
