//! Analytics sources: producers of the page view report.

use std::path::{Path, PathBuf};

use futures::future::BoxFuture;

use crate::analytics::query::{AnalyticsQuery, Dimension};
use crate::analytics::row::AnalyticsRow;
use crate::error::{RankerError, Result};

/// Producer of the page view report for a query
///
/// Rows are expected pre-filtered by the query's threshold and ordered by
/// views descending; they are consumed as returned. Failures are reported as
/// [`RankerError::Query`].
pub trait AnalyticsSource: Send + Sync {
    fn run_query<'a>(&'a self, query: &'a AnalyticsQuery) -> BoxFuture<'a, Result<Vec<AnalyticsRow>>>;
}

impl<S: AnalyticsSource + ?Sized> AnalyticsSource for &S {
    fn run_query<'a>(&'a self, query: &'a AnalyticsQuery) -> BoxFuture<'a, Result<Vec<AnalyticsRow>>> {
        (**self).run_query(query)
    }
}

/// Analytics source reading a JSON export of the report from disk
///
/// The export is a JSON array of rows. Rows at or below the query's
/// `min_page_views` are dropped, as are page paths that are not destination
/// pages of a requested product. The rest are ordered by views descending,
/// as the live report would return them.
#[derive(Debug, Clone)]
pub struct FileAnalyticsSource {
    path: PathBuf,
}

impl FileAnalyticsSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_rows(&self, query: &AnalyticsQuery) -> Result<Vec<AnalyticsRow>> {
        let context = || format!("reading export {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RankerError::query(context(), e))?;
        let rows: Vec<AnalyticsRow> =
            serde_json::from_slice(&bytes).map_err(|e| RankerError::query(context(), e))?;

        let total = rows.len();
        let mut rows: Vec<AnalyticsRow> = rows
            .into_iter()
            .filter(|row| row.view_count > query.min_page_views)
            .filter(|row| match query.dimension {
                Dimension::PagePath => query.includes_page_path(&row.dimension_value),
                Dimension::DestinationCode => true,
            })
            .collect();
        rows.sort_by(|a, b| b.view_count.cmp(&a.view_count));

        log::debug!(
            "Export {} holds {total} rows, {} kept for products above {} views",
            self.path.display(),
            rows.len(),
            query.min_page_views
        );
        Ok(rows)
    }
}

impl AnalyticsSource for FileAnalyticsSource {
    fn run_query<'a>(&'a self, query: &'a AnalyticsQuery) -> BoxFuture<'a, Result<Vec<AnalyticsRow>>> {
        Box::pin(self.read_rows(query))
    }
}
