//! Bearer-token storage
//!
//! The token is owned state with an explicit lifecycle: set after login,
//! read on demand for authenticated calls, cleared when the server signals
//! expiry. Access is single-threaded by the concurrency model, so no
//! locking is involved.

use crate::error::ApiError;

/// Holds the session's bearer token
#[derive(Debug, Default)]
pub struct TokenStore {
    token: Option<String>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly issued token
    pub fn set(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        tracing::debug!("bearer token stored");
    }

    /// The current token, if a session is active
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Drop the stored credential (logout or expiry)
    pub fn clear(&mut self) {
        if self.token.take().is_some() {
            tracing::info!("bearer token cleared");
        }
    }

    /// Clear the token when an operation reports expiry.
    ///
    /// Returns true if the error was an auth expiry, so the caller knows to
    /// redirect to re-authentication.
    pub fn absorb_auth_failure(&mut self, err: &ApiError) -> bool {
        if err.is_auth_expired() {
            self.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut store = TokenStore::new();
        assert!(!store.is_authenticated());

        store.set("abc.def.ghi");
        assert_eq!(store.token(), Some("abc.def.ghi"));

        store.clear();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_absorb_auth_failure_clears_only_on_expiry() {
        let mut store = TokenStore::new();
        store.set("abc");

        assert!(!store.absorb_auth_failure(&ApiError::Network("down".into())));
        assert!(store.is_authenticated());

        assert!(store.absorb_auth_failure(&ApiError::AuthExpired));
        assert!(!store.is_authenticated());
    }
}
