//! Building the catalog index from per-product catalogs.

use std::time::Instant;

use crate::catalog::index::CatalogIndex;
use crate::catalog::source::CatalogSource;
use crate::error::Result;
use crate::models::{Market, ProductId};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Fetch every product's catalog in order and index it by country/city slug
///
/// Products are fetched one at a time. Entries from later products replace
/// earlier ones that share a slug. The first failed fetch aborts the build and
/// its error is returned unchanged.
pub async fn build_catalog_index<S>(
    source: &S,
    products: &[ProductId],
    market: &Market,
) -> Result<CatalogIndex>
where
    S: CatalogSource + ?Sized,
{
    let start = Instant::now();
    let subject = format!("market {market}");
    log_operation_start("Building destination catalog for", &subject);

    let mut index = CatalogIndex::new();
    for product in products {
        let destinations = source.fetch_destinations(market, product).await?;
        log::debug!(
            "Fetched {} destinations for {market}/{product}",
            destinations.len()
        );
        for record in destinations {
            index.insert_record(record);
        }
    }

    log_operation_complete("indexed", &subject, index.len(), Some(start.elapsed()));
    Ok(index)
}
