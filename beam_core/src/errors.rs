//! # Error Types
//!
//! Structured error types for beam_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_rigidity(ei_kn_m2: f64) -> BeamResult<()> {
//!     if ei_kn_m2 <= 0.0 {
//!         return Err(BeamError::InvalidInput {
//!             field: "ei_kn_m2".to_string(),
//!             value: ei_kn_m2.to_string(),
//!             reason: "Flexural rigidity must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (non-positive rigidity, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculation produced an unusable result (non-finite deflection, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::CalculationFailed { .. } => "CALCULATION_FAILED",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
