//! Asynchronous coordinate sources
//!
//! Device geolocation is modeled as an async operation that either yields a
//! coordinate pair or fails with `LocationUnavailable`. Cancelling a pending
//! lookup is simply dropping the future (e.g. when the user toggles GPS off
//! before it resolves).

use shared::geo::nearest_market;
use shared::markets::MarketRegion;
use shared::types::{GpsCoordinates, FALLBACK_COORDINATES};

use crate::error::ApiResult;

/// A source of the user's current position
pub trait LocationProvider {
    fn current_position(&self) -> impl std::future::Future<Output = ApiResult<GpsCoordinates>> + Send;
}

/// A provider pinned to a fixed coordinate (manual mode)
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GpsCoordinates);

impl FixedLocation {
    /// The coordinate used when GPS detection is off
    pub fn fallback() -> Self {
        Self(FALLBACK_COORDINATES)
    }
}

impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> ApiResult<GpsCoordinates> {
        Ok(self.0)
    }
}

/// Resolve the provider's position to the nearest market region
pub async fn resolve_market<P: LocationProvider>(
    provider: &P,
) -> ApiResult<&'static MarketRegion> {
    let position = provider.current_position().await?;
    let market = nearest_market(position);
    tracing::debug!(
        lat = position.latitude,
        lon = position.longitude,
        market = market.name,
        "resolved position to market"
    );
    Ok(market)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    struct Unavailable;

    impl LocationProvider for Unavailable {
        async fn current_position(&self) -> ApiResult<GpsCoordinates> {
            Err(ApiError::LocationUnavailable("permission denied".into()))
        }
    }

    #[tokio::test]
    async fn test_fixed_provider_resolves() {
        let provider = FixedLocation(GpsCoordinates::new(22.58, 88.30));
        let market = resolve_market(&provider).await.unwrap();
        assert_eq!(market.name, "Howrah");
    }

    #[tokio::test]
    async fn test_fallback_coordinate_is_deterministic() {
        let market = resolve_market(&FixedLocation::fallback()).await.unwrap();
        // (23.5, 88.1) sits in central West Bengal, nearest to Purba Bardhaman
        assert_eq!(market.name, "Purba Bardhaman");
    }

    #[tokio::test]
    async fn test_unavailable_provider_propagates() {
        let err = resolve_market(&Unavailable).await.unwrap_err();
        assert!(matches!(err, ApiError::LocationUnavailable(_)));
    }
}
