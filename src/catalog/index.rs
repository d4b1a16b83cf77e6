//! Slug to destination lookup built once per run.

use rustc_hash::FxHashMap;

use crate::catalog::slug::SlugKey;
use crate::models::DestinationRecord;

/// Mapping from country/city slug to the catalog record that carries it
///
/// Read-only once built. Inserting a key that is already present replaces the
/// earlier record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    entries: FxHashMap<SlugKey, DestinationRecord>,
}

impl CatalogIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, key: SlugKey, record: DestinationRecord) -> Option<DestinationRecord> {
        self.entries.insert(key, record)
    }

    /// Insert a record under the key derived from its `full_slug`
    ///
    /// Returns `false` when the slug yields no key and the record was skipped.
    pub fn insert_record(&mut self, record: DestinationRecord) -> bool {
        let Some(key) = SlugKey::from_full_slug(&record.full_slug) else {
            log::warn!(
                "Skipping destination {} with unusable slug '{}'",
                record.code,
                record.full_slug
            );
            return false;
        };

        if let Some(previous) = self.insert(key.clone(), record) {
            log::debug!("Slug {key} re-assigned, replacing destination {}", previous.code);
        }
        true
    }

    #[must_use]
    pub fn get(&self, key: &SlugKey) -> Option<&DestinationRecord> {
        self.entries.get(key)
    }

    /// Destination code of the record stored under `key`
    ///
    /// A record without a code does not resolve.
    #[must_use]
    pub fn code_for(&self, key: &SlugKey) -> Option<&str> {
        self.get(key)
            .map(|record| record.code.as_str())
            .filter(|code| !code.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlugKey, &DestinationRecord)> {
        self.entries.iter()
    }
}

impl FromIterator<DestinationRecord> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = DestinationRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert_record(record);
        }
        index
    }
}
