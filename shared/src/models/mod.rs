//! Wire models for the prediction API

mod auth;
mod heatmap;
mod history;
mod prediction;

pub use auth::*;
pub use heatmap::*;
pub use history::*;
pub use prediction::*;
