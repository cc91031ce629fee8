//! Errors raised by scalar operations.

use thiserror::Error;

/// Errors that can occur during complex arithmetic.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ComplexError {
    /// `power` was called with an exponent that is not an integer.
    #[error("the power must be an integer, got {0}")]
    NonIntegerExponent(f64),
}

/// Result alias for complex arithmetic.
pub type Result<T> = std::result::Result<T, ComplexError>;
