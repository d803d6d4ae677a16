//! # Error Types
//!
//! Structured error types for field_core. The numeric engine itself never
//! fails (degenerate geometry propagates as IEEE-754 non-finite values), so
//! these errors cover the configuration and file surfaces only.
//!
//! ## Example
//!
//! ```rust
//! use field_core::errors::{FieldError, FieldResult};
//!
//! fn validate_precision(digits: u32) -> FieldResult<()> {
//!     if !(4..=17).contains(&digits) {
//!         return Err(FieldError::InvalidInput {
//!             field: "precision".to_string(),
//!             value: digits.to_string(),
//!             reason: "Precision must be between 4 and 17 decimal digits".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for field_core operations
pub type FieldResult<T> = Result<T, FieldError>;

/// Structured error type for solver configuration and run setup.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FieldError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error while reading or writing a run configuration
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl FieldError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FieldError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FieldError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization_error(reason: impl Into<String>) -> Self {
        FieldError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FieldError::InvalidInput { .. } => "INVALID_INPUT",
            FieldError::FileError { .. } => "FILE_ERROR",
            FieldError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
