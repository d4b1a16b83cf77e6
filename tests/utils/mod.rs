//! In-memory collaborators and fixtures shared by the integration tests.

use std::sync::Mutex;

use destination_ranker::{
    AnalyticsQuery, AnalyticsRow, AnalyticsSource, CatalogSource, DestinationRecord, Market,
    ProductId, RankerError, Result,
};
use futures::future::BoxFuture;
use rustc_hash::FxHashMap;

/// Catalog source serving fixed per-product catalogs and recording fetch order
#[derive(Debug, Default)]
pub struct FakeCatalog {
    catalogs: FxHashMap<String, Vec<DestinationRecord>>,
    failing: Option<String>,
    fetched: Mutex<Vec<String>>,
}

impl FakeCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` for `product`
    #[must_use]
    pub fn with_product(mut self, product: &str, records: Vec<DestinationRecord>) -> Self {
        self.catalogs.insert(product.to_string(), records);
        self
    }

    /// Fail the fetch for `product`
    #[must_use]
    pub fn failing_on(mut self, product: &str) -> Self {
        self.failing = Some(product.to_string());
        self
    }

    /// Products fetched so far, in call order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl CatalogSource for FakeCatalog {
    fn fetch_destinations<'a>(
        &'a self,
        market: &'a Market,
        product: &'a ProductId,
    ) -> BoxFuture<'a, Result<Vec<DestinationRecord>>> {
        Box::pin(async move {
            self.fetched.lock().unwrap().push(product.to_string());
            if self.failing.as_deref() == Some(product.as_str()) {
                return Err(RankerError::catalog_fetch(
                    market.as_str(),
                    product.as_str(),
                    "HTTP status server error (503 Service Unavailable)",
                ));
            }
            Ok(self.catalogs.get(product.as_str()).cloned().unwrap_or_default())
        })
    }
}

/// Analytics source returning fixed rows and capturing the query it was given
#[derive(Debug, Default)]
pub struct FakeAnalytics {
    rows: Vec<AnalyticsRow>,
    fail: bool,
    last_query: Mutex<Option<AnalyticsQuery>>,
}

impl FakeAnalytics {
    #[must_use]
    pub fn with_rows(rows: Vec<AnalyticsRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last_query(&self) -> Option<AnalyticsQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

impl AnalyticsSource for FakeAnalytics {
    fn run_query<'a>(
        &'a self,
        query: &'a AnalyticsQuery,
    ) -> BoxFuture<'a, Result<Vec<AnalyticsRow>>> {
        Box::pin(async move {
            *self.last_query.lock().unwrap() = Some(query.clone());
            if self.fail {
                return Err(RankerError::query("runReport", "PERMISSION_DENIED"));
            }
            Ok(self.rows.clone())
        })
    }
}

/// Catalog record with an empty description
#[must_use]
pub fn record(name: &str, code: &str, full_slug: &str) -> DestinationRecord {
    DestinationRecord::new(name, code, "", full_slug)
}

#[must_use]
pub fn products(ids: &[&str]) -> Vec<ProductId> {
    ids.iter().map(|id| ProductId::new(*id)).collect()
}

#[must_use]
pub fn row(path: &str, views: u64) -> AnalyticsRow {
    AnalyticsRow::new(path, views)
}

#[must_use]
pub fn market(code: &str) -> Market {
    Market::new(code).unwrap()
}
