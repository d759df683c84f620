//! Heatmap aggregator tests
//!
//! Covers the stable top-N ranking and the wholesale-replacement load
//! semantics shared with the history store.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use dashboard_client::HeatmapAggregator;
use shared::models::HeatmapEntry;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn entry(market: &str, avg: &str) -> HeatmapEntry {
    HeatmapEntry {
        market: market.to_string(),
        crop: "Rice".to_string(),
        avg_price: dec(avg),
    }
}

fn aggregator_with(entries: Vec<HeatmapEntry>) -> HeatmapAggregator {
    let mut agg = HeatmapAggregator::new();
    let seq = agg.begin_load();
    agg.apply(seq, entries);
    agg
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_top_n_sorts_descending_with_stable_ties() {
    let agg = aggregator_with(vec![
        entry("A", "30"),
        entry("B", "45"),
        entry("C", "45"),
        entry("D", "10"),
    ]);

    let top = agg.top_n(2);
    let names: Vec<&str> = top.iter().map(|e| e.market.as_str()).collect();
    // B and C tie at 45; B came first in fetch order and stays first
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn test_top_n_larger_than_collection() {
    let agg = aggregator_with(vec![entry("A", "30"), entry("B", "45")]);
    assert_eq!(agg.top_n(10).len(), 2);
}

#[test]
fn test_top5_default_size() {
    let entries = (0..8).map(|i| entry(&format!("M{i}"), "20")).collect();
    let agg = aggregator_with(entries);
    assert_eq!(agg.top5().len(), 5);
}

#[test]
fn test_entries_keep_fetch_order() {
    let agg = aggregator_with(vec![entry("Z", "1"), entry("A", "2")]);
    assert_eq!(agg.entries()[0].market, "Z");
}

#[test]
fn test_load_replaces_wholesale() {
    let mut agg = aggregator_with(vec![entry("A", "30"), entry("B", "45")]);

    let seq = agg.begin_load();
    agg.apply(seq, vec![entry("C", "12")]);
    assert_eq!(agg.len(), 1);
    assert_eq!(agg.entries()[0].market, "C");
}

#[test]
fn test_stale_response_is_discarded() {
    let mut agg = HeatmapAggregator::new();

    let first = agg.begin_load();
    let second = agg.begin_load();

    assert!(agg.apply(second, vec![entry("new", "50")]));
    assert!(!agg.apply(first, vec![entry("old", "99")]));
    assert_eq!(agg.entries()[0].market, "new");
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// top_n output is sorted descending and is a prefix-sized subset
    #[test]
    fn prop_top_n_sorted_descending(
        prices in proptest::collection::vec(0i64..10_000, 0..50),
        n in 0usize..10
    ) {
        let entries: Vec<HeatmapEntry> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| HeatmapEntry {
                market: format!("M{i}"),
                crop: "Rice".to_string(),
                avg_price: Decimal::new(*p, 1),
            })
            .collect();
        let agg = aggregator_with(entries);

        let top = agg.top_n(n);
        prop_assert_eq!(top.len(), n.min(prices.len()));
        prop_assert!(top.windows(2).all(|w| w[0].avg_price >= w[1].avg_price));

        // Nothing outside the ranking beats anything inside it
        if let Some(last) = top.last() {
            let in_top: Vec<&str> = top.iter().map(|e| e.market.as_str()).collect();
            for e in agg.entries() {
                if !in_top.contains(&e.market.as_str()) {
                    prop_assert!(e.avg_price <= last.avg_price);
                }
            }
        }
    }

    /// Equal prices preserve fetch order (stability)
    #[test]
    fn prop_ties_keep_fetch_order(count in 1usize..20) {
        let entries: Vec<HeatmapEntry> = (0..count)
            .map(|i| entry(&format!("M{i}"), "42"))
            .collect();
        let agg = aggregator_with(entries);

        let top = agg.top_n(count);
        for (i, e) in top.iter().enumerate() {
            let expected = format!("M{i}");
            prop_assert_eq!(e.market.as_str(), expected.as_str());
        }
    }
}
