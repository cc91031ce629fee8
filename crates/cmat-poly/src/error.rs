//! Errors raised by polynomial arithmetic.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// The divisor was the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,
}

/// Result alias for polynomial arithmetic.
pub type Result<T> = std::result::Result<T, PolyError>;
