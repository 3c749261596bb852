pub mod error;
pub mod http;
pub mod list;
pub mod metric;
pub mod query;
pub mod render;
pub mod types;

pub use error::{Result, SnapshotError};
pub use http::HttpMetricClient;
pub use list::{ListFailure, SnapshotLister};
pub use metric::MetricQuery;
pub use query::QueryParams;
pub use render::{format_create_time, project_rows, render_table, sort_records, SnapshotRow};
pub use types::{ListSnapshotResponse, SnapshotRecord};
