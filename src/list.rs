use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{
    error::{Result, SnapshotError},
    metric::MetricQuery,
    query::QueryParams,
    types::{ListSnapshotResponse, SnapshotRecord},
};

/// Fatal listing failure
///
/// Carries the records accumulated from the pages that did succeed, so
/// the caller decides whether partial results are worth anything.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct ListFailure {
    pub partial: Vec<SnapshotRecord>,
    #[source]
    pub error: SnapshotError,
}

/// Aggregates the full snapshot listing for one file by paging through
/// the metric endpoint
///
/// Pages are strictly sequential: each offset depends on the previous
/// page having succeeded. An empty page terminates the loop normally;
/// any failure aborts it immediately, without retry.
pub struct SnapshotLister {
    source: Arc<dyn MetricQuery>,
}

impl SnapshotLister {
    /// Create a lister over the given metric source
    pub fn new(source: Arc<dyn MetricQuery>) -> Self {
        Self { source }
    }

    /// Fetch every page and merge them into one ordered collection
    ///
    /// Records keep their server-returned order; sorting for display
    /// is the renderer's concern. There is no page-count ceiling: the
    /// loop runs until the service returns an empty page or fails.
    pub async fn list_snapshots(
        &self,
        params: QueryParams,
    ) -> std::result::Result<Vec<SnapshotRecord>, ListFailure> {
        let mut accumulated = Vec::new();
        let mut params = params;

        loop {
            let records = match self.fetch_page(&params).await {
                Ok(records) => records,
                Err(error) => {
                    return Err(ListFailure {
                        partial: accumulated,
                        error,
                    })
                }
            };

            if records.is_empty() {
                debug!(total = accumulated.len(), "listing complete");
                return Ok(accumulated);
            }

            debug!(
                offset = params.offset(),
                count = records.len(),
                "page fetched"
            );
            accumulated.extend(records);
            params = params.next_page();
        }
    }

    /// One page: query the source, decode, normalize absent to empty
    async fn fetch_page(&self, params: &QueryParams) -> Result<Vec<SnapshotRecord>> {
        let body = self.source.query(&params.to_sub_uri()).await?;
        let response = ListSnapshotResponse::from_json(&body)?;
        Ok(response.into_records())
    }
}
