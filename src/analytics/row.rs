//! Analytics report rows.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the page view report
///
/// `dimension_value` is a page path or a destination code depending on the
/// [`Dimension`](crate::analytics::Dimension) the report was run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsRow {
    #[serde(alias = "pagePath", alias = "destCode", alias = "dimension")]
    pub dimension_value: String,
    #[serde(
        alias = "screenPageViews",
        alias = "viewCount",
        alias = "views",
        deserialize_with = "view_count_from_number_or_string"
    )]
    pub view_count: u64,
}

impl AnalyticsRow {
    #[must_use]
    pub fn new(dimension_value: impl Into<String>, view_count: u64) -> Self {
        Self {
            dimension_value: dimension_value.into(),
            view_count,
        }
    }
}

/// Report APIs return metric values as strings; exports may hold plain numbers
fn view_count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Number(u64),
        Text(String),
    }

    match RawCount::deserialize(deserializer)? {
        RawCount::Number(n) => Ok(n),
        RawCount::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid view count '{s}': {e}"))),
    }
}
