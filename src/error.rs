use thiserror::Error;

/// Failure modes of a cookie store parse.
///
/// Malformed individual rows are not represented here: the mapper drops
/// them silently and the batch continues. Only store-level problems reach
/// the caller.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    /// The store could not be opened (missing file, corrupt header,
    /// permission denied). Surfaced at parse time; opening never fails.
    #[error("SQLite3 cookie database is not opened")]
    StoreUnavailable,

    /// The query ran against an opened store but the engine reported
    /// failure, e.g. a schema missing the expected table or columns.
    #[error("failed to read SQLite3 cookie database: {message}")]
    QueryExecution { message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryExecution {
            message: err.to_string(),
        }
    }
}
