//! # Error Types
//!
//! Structured error types for waterfront_core. Every model validates its
//! inputs before computing anything, so a failed call never yields a partial
//! result. Errors serialize to JSON so consumers (CLI, HTTP service) can
//! relay them without re-parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use waterfront_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(depth_m: f64) -> CalcResult<()> {
//!     if depth_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "depth_m".to_string(),
//!             value: depth_m.to_string(),
//!             reason: "Depth must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for waterfront_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A precondition on a model input is violated
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An iterative solver did not reach a physically valid root
    #[error("Numerical convergence failure in {solver} after {iterations} iterations: {reason}")]
    NumericalConvergence {
        solver: String,
        iterations: usize,
        reason: String,
    },

    /// Jurisdiction code has no registered profile
    #[error("Unknown jurisdiction '{code}' (supported: {supported})")]
    UnknownJurisdiction { code: String, supported: String },

    /// File I/O error
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

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NumericalConvergence error
    pub fn numerical_convergence(solver: impl Into<String>, iterations: usize, reason: impl Into<String>) -> Self {
        CalcError::NumericalConvergence {
            solver: solver.into(),
            iterations,
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

    /// The offending field, when the error is tied to one input
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the caller supplied bad input (as opposed to a solver or I/O failure)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::UnknownJurisdiction { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NumericalConvergence { .. } => "NUMERICAL_CONVERGENCE",
            CalcError::UnknownJurisdiction { .. } => "UNKNOWN_JURISDICTION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}

// ============================================================================
// Validation helpers
// ============================================================================
//
// Comparisons are written so that NaN fails every check.

/// Require `value > 0`.
pub fn ensure_positive(field: &str, value: f64) -> CalcResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite value > 0"))
    }
}

/// Require `value >= 0`.
pub fn ensure_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite value >= 0"))
    }
}

/// Require a finite value of any sign.
pub fn ensure_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("depth_m", "-5", "Must be a finite value > 0");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("x", "0", "bad").error_code(), "INVALID_INPUT");
        assert_eq!(
            CalcError::numerical_convergence("dispersion", 100, "k <= 0").error_code(),
            "NUMERICAL_CONVERGENCE"
        );
        assert_eq!(CalcError::file_error("write", "a.csv", "denied").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("d", 1.0).is_ok());
        assert!(ensure_positive("d", 0.0).is_err());
        assert!(ensure_positive("d", -1.0).is_err());
        assert!(ensure_positive("d", f64::NAN).is_err());
        assert!(ensure_positive("d", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("u", 0.0).is_ok());
        assert!(ensure_non_negative("u", 3.0).is_ok());
        let err = ensure_non_negative("u", -0.1).unwrap_err();
        assert_eq!(err.field(), Some("u"));
        assert!(err.is_input_error());
        assert!(ensure_non_negative("u", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("a", -2.5).is_ok());
        assert!(ensure_finite("a", f64::NEG_INFINITY).is_err());
    }
}
