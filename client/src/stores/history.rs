//! Authoritative local view over the user's prediction history
//!
//! The collection mirrors server state and is replaced wholesale on each
//! load. Overlapping loads are resolved with a monotonically increasing
//! sequence number: a response is applied only if it belongs to the newest
//! issued request, so stale responses are discarded deterministically
//! instead of "last response wins".

use rust_decimal::Decimal;

use shared::models::{ActualPriceUpdate, HistoryEntry};
use shared::validation::validate_actual_price;

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};

/// In-memory mirror of the user's prediction history
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    issued: u64,
    applied: u64,
}

/// Ticket identifying one issued load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSeq(u64);

impl LoadSeq {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub(crate) fn value(self) -> u64 {
        self.0
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a sequence number for a load about to start
    pub fn begin_load(&mut self) -> LoadSeq {
        self.issued += 1;
        LoadSeq(self.issued)
    }

    /// Replace the collection if `seq` is still the newest issued request.
    ///
    /// Returns whether the response was applied. Server ordering
    /// (newest-first) is kept as-is.
    pub fn apply(&mut self, seq: LoadSeq, entries: Vec<HistoryEntry>) -> bool {
        if seq.0 != self.issued || seq.0 <= self.applied {
            tracing::debug!(seq = seq.0, issued = self.issued, "discarding stale history response");
            return false;
        }
        self.applied = seq.0;
        self.entries = entries;
        true
    }

    /// Fetch the history and replace the collection
    pub async fn load(&mut self, client: &ApiClient, token: &str) -> ApiResult<()> {
        let seq = self.begin_load();
        let entries = client.history(token).await?;
        self.apply(seq, entries);
        Ok(())
    }

    /// Record the realised price for an entry.
    ///
    /// Non-positive prices are rejected locally without a network call. On
    /// success the caller reloads the collection rather than mutating it
    /// here: the server computes `priceDiff` and stays authoritative.
    pub async fn record_actual(
        &self,
        client: &ApiClient,
        token: &str,
        id: &str,
        actual_price: Decimal,
    ) -> ApiResult<()> {
        validate_actual_price(actual_price).map_err(|msg| ApiError::Validation(msg.to_string()))?;

        let update = ActualPriceUpdate {
            prediction_id: id.to_string(),
            actual_price,
        };
        client.record_actual(&update, token).await
    }

    /// Delete an entry. The caller confirms with the user beforehand and,
    /// on success, reloads both history and heatmap views.
    pub async fn delete(&self, client: &ApiClient, token: &str, id: &str) -> ApiResult<()> {
        client.delete_prediction(id, token).await
    }

    /// Entries matching both filters; an empty filter means no restriction
    /// on that dimension
    pub fn filtered_view(&self, crop: Option<&str>, market: Option<&str>) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|e| crop.is_none_or(|c| e.crop == c))
            .filter(|e| market.is_none_or(|m| e.market == m))
            .collect()
    }

    /// Distinct crops in the collection, sorted for stable display
    pub fn distinct_crops(&self) -> Vec<String> {
        let mut crops: Vec<String> = self.entries.iter().map(|e| e.crop.clone()).collect();
        crops.sort_unstable();
        crops.dedup();
        crops
    }

    /// Distinct markets in the collection, sorted for stable display
    pub fn distinct_markets(&self) -> Vec<String> {
        let mut markets: Vec<String> = self.entries.iter().map(|e| e.market.clone()).collect();
        markets.sort_unstable();
        markets.dedup();
        markets
    }

    /// Entries oldest-first, for chart plotting
    pub fn chronological(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().collect()
    }

    /// Entries in server order (newest-first)
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the mirrored collection (logout)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
