//! Application error type and its HTTP mapping.

use lum_common::error::ApiError;
use thiserror::Error;

/// Storage-layer failure. Everything rusqlite reports collapses here; the
/// HTTP boundary logs the detail and answers with a generic 500.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for WebError {
    fn from(e: rusqlite::Error) -> Self {
        WebError::Database(e.to_string())
    }
}

impl From<WebError> for ApiError {
    fn from(err: WebError) -> Self {
        tracing::error!(%err, "storage failure");
        ApiError::internal("storage failure")
    }
}
