//! Configuration for ranking runs.

use std::str::FromStr;
use std::time::Duration;

use crate::analytics::Dimension;
use crate::error::{RankerError, Result};
use crate::models::{DEFAULT_LOOKBACK_DAYS, ProductId};

/// Catalog API serving per-market, per-product destination lists
pub const DEFAULT_CATALOG_BASE_URL: &str =
    "https://rhps-api.martech.eflangtech.com/v2/destinationsStories";

/// Configuration for the `DestinationRanker`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerConfig {
    /// Base URL of the catalog API
    pub catalog_base_url: String,
    /// Products used when a run names none
    pub default_products: Vec<ProductId>,
    /// Length of the default reporting window, ending yesterday
    pub lookback_days: u64,
    /// Report dimension, which also selects the row resolution strategy
    pub dimension: Dimension,
    /// Inclusion threshold passed to the analytics source
    pub min_page_views: u64,
    /// Timeout for each catalog request
    pub request_timeout: Duration,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            default_products: ProductId::defaults(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            dimension: Dimension::PagePath,
            min_page_views: 1,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl RankerConfig {
    /// Defaults overlaid with `CATALOG_API_URL`, `RANKER_PRODUCTS`,
    /// `RANKER_LOOKBACK_DAYS`, `RANKER_MIN_PAGE_VIEWS` and `RANKER_DIMENSION`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CATALOG_API_URL") {
            config.catalog_base_url = url;
        }
        if let Some(products) = lookup("RANKER_PRODUCTS") {
            config.default_products = parse_products(&products)?;
        }
        if let Some(days) = lookup("RANKER_LOOKBACK_DAYS") {
            config.lookback_days = parse_var("RANKER_LOOKBACK_DAYS", &days)?;
        }
        if let Some(views) = lookup("RANKER_MIN_PAGE_VIEWS") {
            config.min_page_views = parse_var("RANKER_MIN_PAGE_VIEWS", &views)?;
        }
        if let Some(dimension) = lookup("RANKER_DIMENSION") {
            config.dimension = dimension.parse()?;
        }

        Ok(config)
    }
}

/// Parse a comma separated product list, rejecting an empty one
pub fn parse_products(value: &str) -> Result<Vec<ProductId>> {
    let products: Vec<ProductId> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ProductId::new)
        .collect();

    if products.is_empty() {
        return Err(RankerError::config("product list is empty"));
    }
    Ok(products)
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| RankerError::config(format!("{name}='{value}': {e}")))
}
