//! Destination records as delivered by the catalog API.

use serde::{Deserialize, Serialize};

/// One destination entry from a product's catalog
///
/// Field names follow the catalog wire format. Records are immutable once
/// fetched and owned by the [`CatalogIndex`](crate::catalog::CatalogIndex)
/// for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub name: String,
    /// Destination code in `CITY-COUNTRY` form, empty when the catalog has none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Path such as `de/lt/destinations/united-kingdom/st-andrews`, with or without a trailing slash
    pub full_slug: String,
}

impl DestinationRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
        full_slug: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            description: description.into(),
            full_slug: full_slug.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
