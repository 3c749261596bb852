use async_trait::async_trait;

use crate::error::Result;

/// Core abstraction for querying a cluster management metric endpoint
///
/// Implementors issue one request for the given sub-URI and return the
/// raw response body. The pagination driver sees exactly one logical
/// call per page; failover across equivalent endpoints, if any, is an
/// implementation detail behind this trait.
#[async_trait]
pub trait MetricQuery: Send + Sync {
    /// Issue one query and return the raw response text
    ///
    /// Returns `SnapshotError::QueryFailed` when no endpoint answered.
    async fn query(&self, sub_uri: &str) -> Result<String>;

    /// Get a human-readable identifier for this source (for logging/debugging)
    fn identifier(&self) -> String;
}
