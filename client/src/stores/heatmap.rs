//! Regional price heatmap view
//!
//! A read-only snapshot of per-market average prices, replaced wholesale on
//! each load with the same sequence gating as the history store. The only
//! derived view is a stable top-N ranking.

use shared::models::HeatmapEntry;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::stores::LoadSeq;

/// Default ranking size shown on the dashboard
pub const DEFAULT_TOP_N: usize = 5;

/// In-memory snapshot of the latest regional averages
#[derive(Debug, Default)]
pub struct HeatmapAggregator {
    entries: Vec<HeatmapEntry>,
    issued: u64,
    applied: u64,
}

impl HeatmapAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a sequence number for a load about to start
    pub fn begin_load(&mut self) -> LoadSeq {
        self.issued += 1;
        LoadSeq::new(self.issued)
    }

    /// Replace the snapshot if `seq` is still the newest issued request
    pub fn apply(&mut self, seq: LoadSeq, entries: Vec<HeatmapEntry>) -> bool {
        if seq.value() != self.issued || seq.value() <= self.applied {
            tracing::debug!(
                seq = seq.value(),
                issued = self.issued,
                "discarding stale heatmap response"
            );
            return false;
        }
        self.applied = seq.value();
        self.entries = entries;
        true
    }

    /// Fetch the latest averages, optionally scoped to one crop
    pub async fn load(
        &mut self,
        client: &ApiClient,
        crop: Option<&str>,
        token: &str,
    ) -> ApiResult<()> {
        let seq = self.begin_load();
        let entries = client.heatmap(crop, token).await?;
        self.apply(seq, entries);
        Ok(())
    }

    /// The `n` highest-priced entries, descending by average price.
    ///
    /// The sort is stable: equal prices keep their fetch order.
    pub fn top_n(&self, n: usize) -> Vec<&HeatmapEntry> {
        let mut ranked: Vec<&HeatmapEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.avg_price.cmp(&a.avg_price));
        ranked.truncate(n);
        ranked
    }

    /// The dashboard's default top-5 ranking
    pub fn top5(&self) -> Vec<&HeatmapEntry> {
        self.top_n(DEFAULT_TOP_N)
    }

    /// Snapshot in fetch order
    pub fn entries(&self) -> &[HeatmapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the snapshot (logout)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
