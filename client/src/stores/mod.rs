//! Stateful views over server-owned collections

mod heatmap;
mod history;

pub use heatmap::*;
pub use history::*;
