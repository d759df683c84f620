//! Authentication wire payloads
//!
//! Credentials are exchanged for an opaque bearer token; no token is ever
//! produced or verified client-side.

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub userid: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Profile block returned alongside the token
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub userid: String,
}

/// Body for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub userid: String,
    pub password: String,
    pub dob: String,
}
