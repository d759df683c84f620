//! Typed gateway over the prediction API
//!
//! One `reqwest::Client` per `ApiClient`; every method normalizes the
//! response into the client error taxonomy. No retries: each failure is
//! surfaced for user-visible handling.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use shared::models::{
    ActualPriceUpdate, HeatmapEntry, HistoryEntry, LoginRequest, LoginResponse,
    PredictionRequest, PredictionResult, RegisterRequest,
};

use crate::error::{ApiError, ApiResult, ErrorBody};

/// Prediction API client
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (including `/api`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Auth endpoints (consumed for the token only)
    // ------------------------------------------------------------------

    /// Exchange credentials for a bearer token
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // A 401 here is bad credentials, not an expired session
        let status = response.status();
        if !status.is_success() {
            return Err(self
                .read_error_body(response, &format!("Login failed (status {status})"))
                .await);
        }
        self.decode_body(response, "login").await
    }

    /// Create an account; the caller logs in separately afterwards
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        let response = self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self
                .read_error_body(response, &format!("Registration failed (status {status})"))
                .await);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Prediction endpoints
    // ------------------------------------------------------------------

    /// Submit a prediction request
    pub async fn predict(
        &self,
        request: &PredictionRequest,
        token: &str,
    ) -> ApiResult<PredictionResult> {
        tracing::debug!(crop = %request.crop, market = %request.market, "submitting prediction");
        let response = self
            .http
            .post(format!("{}/predict", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_authed(response, "Prediction").await
    }

    /// Validate the request locally, then submit it.
    ///
    /// Incompatible crop/market pairings and incomplete selections come
    /// back as `Validation` errors, with the allowed crop set listed
    /// verbatim, before any network traffic happens.
    pub async fn predict_validated(
        &self,
        request: &PredictionRequest,
        token: &str,
    ) -> ApiResult<PredictionResult> {
        shared::validation::validate_prediction_request(request).map_err(ApiError::Validation)?;
        self.predict(request, token).await
    }

    /// Fetch the user's prediction history, newest first
    pub async fn history(&self, token: &str) -> ApiResult<Vec<HistoryEntry>> {
        let response = self
            .http
            .get(format!("{}/predict/history", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_authed(response, "History fetch").await
    }

    /// Record the realised price for a past prediction
    pub async fn record_actual(&self, update: &ActualPriceUpdate, token: &str) -> ApiResult<()> {
        let response = self
            .http
            .post(format!("{}/predict/actual", self.base_url))
            .bearer_auth(token)
            .json(update)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.expect_authed_ok(response, "Saving actual price").await
    }

    /// Delete a prediction entry; irreversible from the client's view
    pub async fn delete_prediction(&self, id: &str, token: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(format!("{}/predict/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.expect_authed_ok(response, "Deleting prediction").await
    }

    /// Fetch the latest regional price averages, optionally for one crop
    pub async fn heatmap(&self, crop: Option<&str>, token: &str) -> ApiResult<Vec<HeatmapEntry>> {
        let mut request = self
            .http
            .get(format!("{}/heatmap/latest", self.base_url))
            .bearer_auth(token);
        if let Some(crop) = crop {
            request = request.query(&[("crop", crop)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_authed(response, "Heatmap fetch").await
    }

    // ------------------------------------------------------------------
    // Response normalization
    // ------------------------------------------------------------------

    /// Map an authenticated response: 401 is expiry, other non-2xx carry an
    /// `{error, detail?}` body, 2xx decodes into `T`
    async fn handle_authed<T: DeserializeOwned>(
        &self,
        response: Response,
        context: &str,
    ) -> ApiResult<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("{context} rejected: token expired");
            return Err(ApiError::AuthExpired);
        }
        if !status.is_success() {
            let err = self
                .read_error_body(response, &format!("{context} failed (status {status})"))
                .await;
            tracing::error!(%status, "{context} failed: {err}");
            return Err(err);
        }
        self.decode_body(response, context).await
    }

    /// Same as `handle_authed` but the success body is discarded
    async fn expect_authed_ok(&self, response: Response, context: &str) -> ApiResult<()> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("{context} rejected: token expired");
            return Err(ApiError::AuthExpired);
        }
        if !status.is_success() {
            let err = self
                .read_error_body(response, &format!("{context} failed (status {status})"))
                .await;
            tracing::error!(%status, "{context} failed: {err}");
            return Err(err);
        }
        Ok(())
    }

    /// Parse an error body, degrading to the fallback message when the body
    /// is absent or not JSON
    async fn read_error_body(&self, response: Response, fallback: &str) -> ApiError {
        let text = response.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or(ErrorBody {
            error: None,
            detail: None,
        });
        body.into_error(fallback)
    }

    async fn decode_body<T: DeserializeOwned>(
        &self,
        response: Response,
        context: &str,
    ) -> ApiResult<T> {
        response.json::<T>().await.map_err(|e| {
            ApiError::request_failed(format!("Failed to decode {context} response: {e}"))
        })
    }
}
