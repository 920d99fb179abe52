//! Error types for filter parsing and validation.

use thiserror::Error;

use crate::filter::FilterField;

/// Errors that can occur while building or checking a filter set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiftError {
    /// No phrase in the query was recognized.
    #[error("unrecognized query: '{query}'")]
    UnrecognizedQuery {
        /// The query text as submitted.
        query: String,
    },

    /// A recognized phrase produced a length bound that cannot be represented.
    #[error("invalid length constraint in '{phrase}': {reason}")]
    InvalidLengthConstraint {
        /// The phrase that produced the bound.
        phrase: String,
        /// Description of the problem.
        reason: String,
    },

    /// The filter set contradicts itself.
    #[error("conflicting filters ({}): {reason}", join_fields(.fields))]
    Conflict {
        /// The fields involved in the conflict.
        fields: Vec<FilterField>,
        /// Description of the conflict.
        reason: String,
    },

    /// One or more raw filter parameters could not be converted to their
    /// typed form.
    #[error("invalid parameters: {}", join_parameter_errors(.errors))]
    InvalidParameters {
        /// Every failing field, in canonical field order.
        errors: Vec<ParameterError>,
    },
}

/// A single raw parameter that failed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterError {
    /// The offending field.
    pub field: FilterField,
    /// Description of the problem.
    pub reason: String,
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl SiftError {
    /// Creates a conflict error for the given fields.
    pub fn conflict(fields: &[FilterField], reason: impl Into<String>) -> Self {
        Self::Conflict {
            fields: fields.to_vec(),
            reason: reason.into(),
        }
    }
}

fn join_fields(fields: &[FilterField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_parameter_errors(errors: &[ParameterError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for sift operations.
pub type SiftResult<T> = std::result::Result<T, SiftError>;
