//! # Error Types
//!
//! Structured error types for fpcalc_core. The seismic formulas themselves
//! never fail: degenerate inputs are resolved by their fallback branches.
//! Errors only surface from input validation in the calculation pipelines
//! and from loading reference tables.
//!
//! ## Example
//!
//! ```rust
//! use fpcalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_ft: f64) -> CalcResult<()> {
//!     if height_ft <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "height_ft".to_string(),
//!             value: height_ft.to_string(),
//!             reason: "Building height must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fpcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and table-loading operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A reference table could not be parsed
    #[error("Failed to load {table} table: {reason}")]
    TableLoad { table: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a TableLoad error
    pub fn table_load(table: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::TableLoad {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::TableLoad { .. } => "TABLE_LOAD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("sds_g", "-0.5", "SDS cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::table_load("period", "bad json").error_code(), "TABLE_LOAD");
        assert_eq!(CalcError::file_error("read", "arch.json", "not found").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_table_load_message_names_table() {
        let err = CalcError::table_load("component", "missing field `Rpo`");
        assert_eq!(err.to_string(), "Failed to load component table: missing field `Rpo`");
    }
}
