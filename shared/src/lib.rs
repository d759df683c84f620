//! Shared types and reference data for the Agri Price Dashboard
//!
//! This crate contains the wire models, static market reference data, and
//! pure computations (geolocation resolution, compatibility checks) shared
//! between the client library and the WASM bindings.

pub mod geo;
pub mod markets;
pub mod models;
pub mod types;
pub mod validation;

pub use geo::*;
pub use markets::*;
pub use models::*;
pub use types::*;
pub use validation::*;
