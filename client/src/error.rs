//! Error handling for the dashboard client
//!
//! Every component-level operation resolves to one of these kinds; nothing
//! is retried automatically and nothing fails silently. Malformed error
//! bodies degrade to a generic message rather than a crash.

use serde::Deserialize;
use thiserror::Error;

/// Client error taxonomy
#[derive(Error, Debug)]
pub enum ApiError {
    /// The bearer token was rejected (HTTP 401). Terminal for the session:
    /// the caller clears stored credentials and re-authenticates.
    #[error("Session expired, please log in again")]
    AuthExpired,

    /// The server rejected the request; surfaced to the user verbatim
    #[error("{message}")]
    RequestFailed {
        message: String,
        detail: Option<String>,
    },

    /// No usable response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Local pre-submission validation failed; no network call was made
    #[error("{0}")]
    Validation(String),

    /// The device position could not be determined
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

impl ApiError {
    /// A `RequestFailed` without extra detail
    pub fn request_failed(message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            message: message.into(),
            detail: None,
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::request_failed(format!("Failed to decode server response: {err}"))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Error body shape served by the API: `{error, detail?}`
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, alias = "details")]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Convert the parsed body into a `RequestFailed`, falling back to a
    /// generic message when the `error` field is missing
    pub fn into_error(self, fallback: &str) -> ApiError {
        ApiError::RequestFailed {
            message: self.error.unwrap_or_else(|| fallback.to_string()),
            detail: self.detail.map(|d| match d {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }),
        }
    }
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
