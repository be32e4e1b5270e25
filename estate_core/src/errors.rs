//! # Error Types
//!
//! Structured error types for estate_core. Errors carry enough context for a
//! caller to point at the offending field and explain what to fix.
//!
//! ## Example
//!
//! ```rust
//! use estate_core::errors::{CalcError, CalcResult};
//!
//! fn validate_assets(total_assets: f64) -> CalcResult<()> {
//!     if total_assets < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "totalAssets",
//!             total_assets.to_string(),
//!             "Amount cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estate_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for share calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative amount, not a finite number)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
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

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
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
        let error = CalcError::invalid_input("totalAssets", "-5", "Amount cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("sons", "x", "bad").error_code(), "INVALID_INPUT");
        let parse_error = CalcError::SerializationError { reason: "bad".to_string() };
        assert_eq!(parse_error.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("-1").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_message() {
        let err = CalcError::invalid_input("debtAmount", "-250", "Amount cannot be negative");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'debtAmount': -250 - Amount cannot be negative"
        );
    }
}
