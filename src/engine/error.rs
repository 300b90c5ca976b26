//! Engine error type
//!
//! The engine raises exactly one kind of error: a measurement that fails
//! validation. Everything downstream of validation is closed-form arithmetic
//! and cannot fail.

use thiserror::Error;

/// A raw input that failed validation, named by field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid measurement: {field} {reason}")]
pub struct InvalidMeasurement {
    /// The offending input field (e.g. "weight_lbs")
    pub field: &'static str,
    /// Human-readable reason (e.g. "must be greater than 0")
    pub reason: String,
}

impl InvalidMeasurement {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, InvalidMeasurement>;
