//! Small value types shared across the pipeline: markets, products and date ranges.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RankerError, Result};

/// Products queried when the caller does not name any
pub const DEFAULT_PRODUCTS: [&str; 4] = ["lt", "ils", "aya", "upa"];

/// Default length of the reporting window in days
pub const DEFAULT_LOOKBACK_DAYS: u64 = 30;

/// Two-letter storefront code, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Market(String);

impl Market {
    /// Parse and validate a market code
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_lowercase()))
        } else {
            Err(RankerError::InvalidMarket(code.to_string()))
        }
    }

    /// Lowercase form, as used by the catalog API
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase form, as recorded by the analytics market dimension
    #[must_use]
    pub fn to_uppercase_code(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Market {
    type Error = RankerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Market> for String {
    fn from(market: Market) -> Self {
        market.0
    }
}

/// Identifier of one storefront sub-brand
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The four sub-brands reported on by default
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        DEFAULT_PRODUCTS.iter().map(|p| Self::new(*p)).collect()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Inclusive reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting one that ends before it starts
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(RankerError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days` days before `today`: starts `days` ago and ends yesterday
    pub fn trailing(today: NaiveDate, days: u64) -> Result<Self> {
        if days == 0 {
            return Err(RankerError::config("lookback window must be at least one day"));
        }
        let start = today
            .checked_sub_days(Days::new(days))
            .ok_or_else(|| RankerError::config(format!("lookback of {days} days underflows")))?;
        let end = today
            .pred_opt()
            .ok_or_else(|| RankerError::config("no day precedes the reporting date"))?;
        Self::new(start, end)
    }

    /// Default window relative to the local calendar date
    pub fn trailing_from_today(days: u64) -> Result<Self> {
        Self::trailing(chrono::Local::now().date_naive(), days)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
