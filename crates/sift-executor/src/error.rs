//! Error types for filter execution.

use thiserror::Error;

/// Errors that can occur while executing a query against a store.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Parse, parameter or validation error from sift.
    #[error("query error: {0}")]
    Query(#[from] sift::SiftError),

    /// No record holds the requested value.
    #[error("string not found: '{value}'")]
    NotFound {
        /// The value that was looked up.
        value: String,
    },

    /// A record with the same content hash already exists.
    #[error("string already exists: {content_hash}")]
    AlreadyExists {
        /// Content hash of the existing record.
        content_hash: String,
    },

    /// Result set exceeds configured limit.
    #[error("result set too large: {count} exceeds limit {limit}")]
    ResultTooLarge {
        /// Number of results found.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
}

impl ExecutorError {
    /// Returns true for errors caused by the query or filter input.
    pub fn is_query_error(&self) -> bool {
        matches!(self, ExecutorError::Query(_))
    }
}

/// Result type for executor operations.
pub type ExecResult<T> = std::result::Result<T, ExecutorError>;
