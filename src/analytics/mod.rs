//! Page view analytics: the report request, its rows and the sources producing them.

pub mod query;
pub mod row;
pub mod source;

pub use query::{AnalyticsQuery, Dimension};
pub use row::AnalyticsRow;
pub use source::{AnalyticsSource, FileAnalyticsSource};
