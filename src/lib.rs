//! A Rust library for ranking travel destinations by analytics page views,
//! joined against a per-product destination catalog.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod ranker;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::RankerConfig;
pub use error::{RankerError, Result};
pub use ranker::DestinationRanker;

// Domain models
pub use models::{DateRange, DestinationMetric, DestinationRecord, Market, ProductId, RankedResult};

// Catalog and analytics collaborators
pub use analytics::{AnalyticsQuery, AnalyticsRow, AnalyticsSource, Dimension, FileAnalyticsSource};
pub use catalog::{CatalogIndex, CatalogSource, HttpCatalogSource, SlugKey, build_catalog_index};

// Pipeline stages
pub use pipeline::{aggregate_and_rank, normalize_row, normalize_rows};
