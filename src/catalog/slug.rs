//! Country/city slug keys joining catalog entries to analytics page paths.

use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

/// Path segment that precedes the country and city in destination page paths
pub const DESTINATIONS_SEGMENT: &str = "destinations";

/// Raw split offsets of country and city in `/<product>/destinations/<country>/<city>/`
const COUNTRY_OFFSET: usize = 3;
const CITY_OFFSET: usize = 4;

/// Join key of the form `country/city/`, always slash-terminated
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlugKey(String);

impl SlugKey {
    /// Build a key from a country and a city segment
    #[must_use]
    pub fn new(country: &str, city: &str) -> Self {
        Self(format!("{country}/{city}/"))
    }

    /// Derive the key from a catalog `full_slug`
    ///
    /// Empty segments are dropped first so `a/b/c` and `a/b/c/` give the same
    /// key. Returns `None` when the slug has no segments at all.
    #[must_use]
    pub fn from_full_slug(full_slug: &str) -> Option<Self> {
        let segments: SmallVec<[&str; 8]> =
            full_slug.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return None;
        }

        let tail = &segments[segments.len().saturating_sub(2)..];
        Some(Self(format!("{}/", tail.iter().join("/"))))
    }

    /// Extract the key from an analytics page path
    ///
    /// Country and city are the two segments following `destinations`, which
    /// covers both `/<product>/destinations/..` and
    /// `/<locale>/<product>/destinations/..`. Paths without that marker fall
    /// back to the fixed split offsets 3 and 4.
    #[must_use]
    pub fn from_page_path(page_path: &str) -> Option<Self> {
        let segments: SmallVec<[&str; 8]> = page_path.split('/').collect();

        let (country, city) = match segments.iter().position(|s| *s == DESTINATIONS_SEGMENT) {
            Some(marker) => (segments.get(marker + 1)?, segments.get(marker + 2)?),
            None => (segments.get(COUNTRY_OFFSET)?, segments.get(CITY_OFFSET)?),
        };

        if country.is_empty() || city.is_empty() {
            return None;
        }
        Some(Self::new(country, city))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlugKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
