//! The report request handed to an analytics source.

use std::fmt;
use std::str::FromStr;

use crate::catalog::slug::DESTINATIONS_SEGMENT;
use crate::error::RankerError;
use crate::models::{DateRange, Market, ProductId};

/// Which dimension the analytics report is broken down by
///
/// Selects how rows are resolved to destinations: page paths go through the
/// catalog slug index, destination codes are used as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    #[default]
    PagePath,
    DestinationCode,
}

impl FromStr for Dimension {
    type Err = RankerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page-path" | "pagepath" => Ok(Self::PagePath),
            "destination-code" | "destcode" => Ok(Self::DestinationCode),
            other => Err(RankerError::config(format!("unknown dimension '{other}'"))),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PagePath => f.write_str("page-path"),
            Self::DestinationCode => f.write_str("destination-code"),
        }
    }
}

/// Description of the page view report for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub market: Market,
    pub products: Vec<ProductId>,
    pub date_range: DateRange,
    pub dimension: Dimension,
    /// Rows must have strictly more views than this to be reported
    pub min_page_views: u64,
}

impl AnalyticsQuery {
    /// Whether a page path is a destination page of one of the requested products
    ///
    /// Accepts `/<product>/destinations/<country>/<city>/`, optionally behind a
    /// locale segment. The path must end in a slash.
    #[must_use]
    pub fn includes_page_path(&self, page_path: &str) -> bool {
        if !page_path.starts_with('/') || !page_path.ends_with('/') {
            return false;
        }

        let segments: Vec<&str> = page_path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(marker) = segments.iter().position(|s| *s == DESTINATIONS_SEGMENT) else {
            return false;
        };
        if !(1..=2).contains(&marker) || segments.len() < marker + 3 {
            return false;
        }

        let product = segments[marker - 1];
        self.products.iter().any(|p| p.as_str() == product)
    }
}
