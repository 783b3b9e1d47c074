//! Error types for Calluna.

use thiserror::Error;

/// Errors that can occur during indexing and search.
#[derive(Error, Debug)]
pub enum CallunaError {
    /// A query string failed validation (e.g. more than one `*` in a
    /// single sub-token).
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The paragraph table could not be ingested.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A CSV row could not be read or deserialized.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error occurred while reading the corpus.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An index invariant was violated. This always indicates a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CallunaError {
    /// Create an invalid query error.
    pub fn invalid_query<S: Into<String>>(message: S) -> Self {
        CallunaError::InvalidQuery(message.into())
    }

    /// Create a corpus error.
    pub fn corpus<S: Into<String>>(message: S) -> Self {
        CallunaError::Corpus(message.into())
    }

    /// Create an internal error.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        CallunaError::Internal(message.into())
    }
}

/// Result type for Calluna operations.
pub type Result<T> = std::result::Result<T, CallunaError>;
