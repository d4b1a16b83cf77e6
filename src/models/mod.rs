//! Domain models for destination ranking
//!
//! Catalog records, per-destination metrics and the small value types
//! (markets, products, date ranges) they are keyed by.

pub mod destination;
pub mod metric;
pub mod types;

pub use destination::DestinationRecord;
pub use metric::{DestinationMetric, RankedResult};
pub use types::{DEFAULT_LOOKBACK_DAYS, DEFAULT_PRODUCTS, DateRange, Market, ProductId};
