//! Per-destination page view metrics, the unit of the ranked output.

use serde::Serialize;

use crate::models::types::ProductId;

/// Ranked report: unique by destination code, highest page views first
pub type RankedResult = Vec<DestinationMetric>;

/// Page views attributed to one destination
///
/// `city_code` and `country_code` are always derived from `destination_code`
/// through [`DestinationMetric::new`], so an absent code implies absent parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationMetric {
    pub destination_code: Option<String>,
    pub page_views: u64,
    pub products: Vec<ProductId>,
    pub city_code: Option<String>,
    pub country_code: Option<String>,
}

impl DestinationMetric {
    /// Create a metric, splitting the destination code into city and country parts
    #[must_use]
    pub fn new(destination_code: Option<String>, page_views: u64, products: Vec<ProductId>) -> Self {
        let (city_code, country_code) = destination_code
            .as_deref()
            .map_or((None, None), split_destination_code);

        Self {
            destination_code,
            page_views,
            products,
            city_code,
            country_code,
        }
    }

    /// Whether the row resolved to a destination and may be aggregated
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.destination_code.is_some()
    }
}

/// Split `CITY-COUNTRY` into its parts; a code without a hyphen has no country part
#[must_use]
pub fn split_destination_code(code: &str) -> (Option<String>, Option<String>) {
    let mut parts = code.split('-');
    let city = parts.next().map(str::to_string);
    let country = parts.next().map(str::to_string);
    (city, country)
}
