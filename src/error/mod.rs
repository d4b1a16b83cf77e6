//! Error handling for the destination ranking pipeline.

use chrono::NaiveDate;

/// Boxed error used to carry collaborator failures without losing their source chain
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Specialized error type for ranking runs
#[derive(Debug, thiserror::Error)]
pub enum RankerError {
    /// Fetching or decoding one product's destination catalog failed
    #[error("Catalog fetch failed for {market}/{product}: {source}")]
    CatalogFetch {
        market: String,
        product: String,
        #[source]
        source: BoxError,
    },

    /// The analytics source could not produce its report
    #[error("Analytics query failed ({context}): {source}")]
    Query {
        context: String,
        #[source]
        source: BoxError,
    },

    /// Market code is not a two-letter code
    #[error("Invalid market code '{0}': expected two ASCII letters")]
    InvalidMarket(String),

    /// Date range ends before it starts
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl RankerError {
    /// Create a catalog fetch error for a market/product pair
    pub fn catalog_fetch(
        market: impl Into<String>,
        product: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::CatalogFetch {
            market: market.into(),
            product: product.into(),
            source: source.into(),
        }
    }

    /// Create an analytics query error
    pub fn query(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Query {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error aborted the catalog index build
    #[must_use]
    pub const fn is_catalog_failure(&self) -> bool {
        matches!(self, Self::CatalogFetch { .. })
    }

    /// Whether this error came from the analytics source
    #[must_use]
    pub const fn is_query_failure(&self) -> bool {
        matches!(self, Self::Query { .. })
    }
}

/// Result type for ranking operations
pub type Result<T> = std::result::Result<T, RankerError>;
