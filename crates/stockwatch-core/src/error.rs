//! Error types for stockwatch operations.

use thiserror::Error;

/// Main error type for inventory API operations.
///
/// Non-success HTTP statuses are treated uniformly as [`StockError::Rejected`]
/// except for 404, which gets its own variant so the threshold lookup can
/// remap a missing record to the default value instead of an error.
#[derive(Error, Debug)]
pub enum StockError {
    /// Request could not complete (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server rejected request (status {status})")]
    Rejected {
        /// HTTP status code of the response
        status: u16,
    },

    /// Requested resource does not exist
    #[error("Resource not found")]
    NotFound,

    /// Response body could not be decoded as the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL or request path could not be parsed
    #[error("Invalid URL: {0}")]
    Url(String),
}

impl StockError {
    /// Whether this error came back as an HTTP status (as opposed to a
    /// transport or decoding failure).
    pub fn is_status(&self) -> bool {
        matches!(self, StockError::Rejected { .. } | StockError::NotFound)
    }
}

/// Result type alias using StockError
pub type StockResult<T> = Result<T, StockError>;
