//! Catalog sources: where per-product destination lists come from.

use std::time::Duration;

use futures::future::BoxFuture;

use crate::error::{BoxError, RankerError, Result};
use crate::models::{DestinationRecord, Market, ProductId};

/// Provider of destination catalogs, one list per market and product
///
/// An empty list is a valid answer for a product without destinations. Any
/// failure is reported as [`RankerError::CatalogFetch`].
pub trait CatalogSource: Send + Sync {
    fn fetch_destinations<'a>(
        &'a self,
        market: &'a Market,
        product: &'a ProductId,
    ) -> BoxFuture<'a, Result<Vec<DestinationRecord>>>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn fetch_destinations<'a>(
        &'a self,
        market: &'a Market,
        product: &'a ProductId,
    ) -> BoxFuture<'a, Result<Vec<DestinationRecord>>> {
        (**self).fetch_destinations(market, product)
    }
}

/// Catalog source backed by the destination stories HTTP API
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogSource {
    /// Create a source with its own client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a source reusing an existing client
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `{base}/{market}/{product}`
    #[must_use]
    pub fn catalog_url(&self, market: &Market, product: &ProductId) -> String {
        format!("{}/{market}/{product}", self.base_url.trim_end_matches('/'))
    }

    async fn fetch(&self, market: &Market, product: &ProductId) -> Result<Vec<DestinationRecord>> {
        let fail = |e: BoxError| {
            RankerError::catalog_fetch(market.as_str(), product.as_str(), e)
        };

        let url = self.catalog_url(market, product);
        log::debug!("GET {url}");

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| fail(e.into()))?
            .bytes()
            .await
            .map_err(|e| fail(e.into()))?;

        serde_json::from_slice(&body).map_err(|e| fail(e.into()))
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_destinations<'a>(
        &'a self,
        market: &'a Market,
        product: &'a ProductId,
    ) -> BoxFuture<'a, Result<Vec<DestinationRecord>>> {
        Box::pin(self.fetch(market, product))
    }
}
