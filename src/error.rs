//! Structured error types for classifier evaluation.

use thiserror::Error;

/// Unified error type for all evaluation operations.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Malformed call: empty input, mismatched lengths, a non-binary label
    /// column, or too few curve points to integrate.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Ground truth contains only one class, so the true-positive or
    /// false-positive rate has a zero denominator.
    #[error("undefined rate: {0}")]
    UndefinedRate(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvalError>;
