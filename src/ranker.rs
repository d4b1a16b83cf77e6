//! Ranked destination report: the entry point tying catalog, analytics and
//! the pipeline stages together.

use std::time::Instant;

use crate::analytics::{AnalyticsQuery, AnalyticsSource};
use crate::catalog::{CatalogSource, build_catalog_index};
use crate::config::RankerConfig;
use crate::error::{RankerError, Result};
use crate::models::{DateRange, Market, ProductId, RankedResult};
use crate::pipeline::{aggregate_and_rank, normalize_rows};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Produces ranked destinations for a market from a catalog and an analytics source
///
/// Sources and configuration are fixed at construction; each call to
/// [`ranked_destinations`](Self::ranked_destinations) is one independent run.
#[derive(Debug)]
pub struct DestinationRanker<C, A> {
    catalog: C,
    analytics: A,
    config: RankerConfig,
}

impl<C, A> DestinationRanker<C, A>
where
    C: CatalogSource,
    A: AnalyticsSource,
{
    #[must_use]
    pub const fn new(catalog: C, analytics: A, config: RankerConfig) -> Self {
        Self {
            catalog,
            analytics,
            config,
        }
    }

    /// Rank destinations of `market` by page views
    ///
    /// `products` defaults to the configured product list and `date_range` to
    /// the configured trailing window ending yesterday. The analytics query and
    /// the catalog build run concurrently on the current task; rows are
    /// resolved only once both have completed. A failure of either aborts the
    /// run and is returned as produced.
    pub async fn ranked_destinations(
        &self,
        market: &Market,
        products: Option<&[ProductId]>,
        date_range: Option<DateRange>,
    ) -> Result<RankedResult> {
        let products = products.unwrap_or(&self.config.default_products);
        if products.is_empty() {
            return Err(RankerError::config("at least one product is required"));
        }

        let date_range = match date_range {
            Some(range) => range,
            None => DateRange::trailing_from_today(self.config.lookback_days)?,
        };

        let query = AnalyticsQuery {
            market: market.clone(),
            products: products.to_vec(),
            date_range,
            dimension: self.config.dimension,
            min_page_views: self.config.min_page_views,
        };

        let start = Instant::now();
        let subject = format!(
            "market {market}, products {}, {date_range}",
            products.iter().map(ProductId::as_str).collect::<Vec<_>>().join("|")
        );
        log_operation_start("Ranking destinations for", &subject);

        let (rows, index) = futures::try_join!(
            self.analytics.run_query(&query),
            build_catalog_index(&self.catalog, products, market),
        )?;

        let metrics = normalize_rows(&rows, query.dimension, &index, products);
        let ranked = aggregate_and_rank(metrics, products.len());

        log_operation_complete("ranked", &subject, ranked.len(), Some(start.elapsed()));
        Ok(ranked)
    }
}
