//! Agri Price Dashboard - client logic layer
//!
//! Resolves a user's location to a market region, gates crop/market
//! pairings, submits prediction requests to the remote API, and maintains
//! the local history and heatmap views that feed the dashboard's chart and
//! grid sinks.
//!
//! The layer is single-threaded and event-driven: operations are async and
//! awaited to completion before dependent refreshes run. The stores resolve
//! overlapping loads with per-store sequence numbers.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod location;
pub mod stores;

pub use api::ApiClient;
pub use auth::TokenStore;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use location::{resolve_market, FixedLocation, LocationProvider};
pub use stores::{HeatmapAggregator, HistoryStore};
