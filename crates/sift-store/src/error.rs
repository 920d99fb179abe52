//! Error types for the store crate.

use sift::SiftError;
use sift_executor::ExecutorError;

#[cfg(feature = "persistence")]
use std::path::PathBuf;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store and service operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query, lookup or duplicate-insert error from the executor layer.
    #[error(transparent)]
    Executor(#[from] ExecutorError),

    /// The submitted value cannot be stored.
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    /// I/O error during persistence operations.
    #[cfg(feature = "persistence")]
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid snapshot format during load.
    #[cfg(feature = "persistence")]
    #[error("invalid snapshot format: {message}")]
    InvalidFormat { message: String },

    /// Serialization error.
    #[cfg(feature = "persistence")]
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[cfg(feature = "persistence")]
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// A snapshot record's content hash does not match its value.
    #[cfg(feature = "persistence")]
    #[error("hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}

impl From<SiftError> for StoreError {
    fn from(err: SiftError) -> Self {
        Self::Executor(ExecutorError::Query(err))
    }
}

impl StoreError {
    /// Creates an invalid value error.
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates an I/O error with path context.
    #[cfg(feature = "persistence")]
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    #[cfg(feature = "persistence")]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns the underlying query error, if this is one.
    pub fn as_query_error(&self) -> Option<&SiftError> {
        match self {
            Self::Executor(ExecutorError::Query(err)) => Some(err),
            _ => None,
        }
    }

    /// Returns true if a requested value does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Executor(ExecutorError::NotFound { .. }))
    }

    /// Returns true if the value is already stored.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Executor(ExecutorError::AlreadyExists { .. }))
    }

    /// Returns true if the filters contradict each other.
    pub fn is_conflict(&self) -> bool {
        matches!(self.as_query_error(), Some(SiftError::Conflict { .. }))
    }
}
