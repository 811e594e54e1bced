//! Custom error types for the trade journal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::NumericField;

/// A numeric form field could not be parsed
///
/// Raised by the add-record flow. The store is never touched when this is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} must be a number (got '{input}')", .field.label())]
pub struct ValidationError {
    /// The offending field
    pub field: NumericField,
    /// The raw text that failed to parse
    pub input: String,
}

impl ValidationError {
    /// Create a validation error for a field and the text it rejected
    pub fn new(field: NumericField, input: impl Into<String>) -> Self {
        Self {
            field,
            input: input.into(),
        }
    }

    /// Machine name of the offending field (e.g. `"entry"`)
    pub fn field_name(&self) -> &'static str {
        self.field.name()
    }
}

/// The main error type for trade journal operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// A user-entered numeric field was invalid
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl JournalError {
    /// The field that failed validation, if this is a validation error
    pub fn invalid_field(&self) -> Option<NumericField> {
        match self {
            Self::Validation(err) => Some(err.field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for trade journal operations
pub type JournalResult<T> = Result<T, JournalError>;
