use thiserror::Error;

/// Errors that can occur while listing snapshots
///
/// Both network-level and decode-level failures are fatal to the
/// current listing; the pagination driver never retries them.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("query failed: {message}")]
    QueryFailed { message: String },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for snapshot listing operations
pub type Result<T> = std::result::Result<T, SnapshotError>;
