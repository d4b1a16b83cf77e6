//! Merging per-row metrics across products and ranking them.

use rustc_hash::FxHashMap;

use crate::models::{DestinationMetric, RankedResult};

/// Drop unresolved metrics, merge by destination code and rank by page views
///
/// With exactly one product the resolved metrics are returned in row order,
/// neither merged nor sorted. Otherwise metrics sharing a destination code are
/// summed into the first one seen, and the result is sorted by page views
/// descending with ties kept in first-seen order.
#[must_use]
pub fn aggregate_and_rank(metrics: Vec<DestinationMetric>, product_count: usize) -> RankedResult {
    let total = metrics.len();
    let resolved: Vec<DestinationMetric> =
        metrics.into_iter().filter(DestinationMetric::is_resolved).collect();

    if resolved.len() < total {
        log::debug!("Dropped {} unresolved rows", total - resolved.len());
    }

    if product_count == 1 {
        return resolved;
    }

    let mut merged: Vec<DestinationMetric> = Vec::with_capacity(resolved.len());
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for metric in resolved {
        let Some(code) = metric.destination_code.clone() else {
            continue;
        };
        match positions.get(&code) {
            Some(&pos) => {
                let existing = &mut merged[pos];
                existing.page_views = existing.page_views.saturating_add(metric.page_views);
            }
            None => {
                positions.insert(code, merged.len());
                merged.push(metric);
            }
        }
    }

    // sort_by is stable: equal page views keep first-seen order
    merged.sort_by(|a, b| b.page_views.cmp(&a.page_views));
    merged
}
