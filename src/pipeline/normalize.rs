//! Resolving analytics rows to destination metrics.

use crate::analytics::{AnalyticsRow, Dimension};
use crate::catalog::{CatalogIndex, SlugKey};
use crate::models::{DestinationMetric, ProductId};

/// Resolve one row to a metric
///
/// Page path rows are looked up in the catalog index by their country/city
/// slug; destination code rows are taken as they are. A row that does not
/// resolve yields a metric without a destination code. Every metric carries
/// the full product list of the run.
#[must_use]
pub fn normalize_row(
    row: &AnalyticsRow,
    dimension: Dimension,
    index: &CatalogIndex,
    products: &[ProductId],
) -> DestinationMetric {
    let destination_code = match dimension {
        Dimension::PagePath => SlugKey::from_page_path(&row.dimension_value)
            .and_then(|key| index.code_for(&key))
            .map(str::to_string),
        Dimension::DestinationCode => Some(row.dimension_value.trim())
            .filter(|code| !code.is_empty())
            .map(str::to_string),
    };

    if destination_code.is_none() {
        log::debug!(
            "No destination for '{}' ({} views)",
            row.dimension_value,
            row.view_count
        );
    }

    DestinationMetric::new(destination_code, row.view_count, products.to_vec())
}

/// Resolve every row, preserving row order
#[must_use]
pub fn normalize_rows(
    rows: &[AnalyticsRow],
    dimension: Dimension,
    index: &CatalogIndex,
    products: &[ProductId],
) -> Vec<DestinationMetric> {
    rows.iter()
        .map(|row| normalize_row(row, dimension, index, products))
        .collect()
}
