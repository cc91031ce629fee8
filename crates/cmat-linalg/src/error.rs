//! Errors raised by matrix and vector operations.

use cmat_complex::{Complex, ComplexError};
use cmat_poly::PolyError;
use thiserror::Error;

/// Errors that can occur in linear algebra operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LinalgError {
    /// Dimensions do not fit the operation.
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// The operation is undefined for these arguments.
    #[error("domain error: {0}")]
    Domain(String),

    /// The matrix has no inverse.
    #[error("matrix is singular")]
    Singular,

    /// An eigenvalue has fewer independent eigenvectors than its multiplicity.
    #[error(
        "matrix is not diagonalizable: eigenvalue {eigenvalue} has geometric multiplicity \
         {geometric} but algebraic multiplicity {algebraic}"
    )]
    NotDiagonalizable {
        /// The deficient eigenvalue.
        eigenvalue: Complex,
        /// Dimension of its eigenspace.
        geometric: usize,
        /// Multiplicity as a root of the characteristic polynomial.
        algebraic: usize,
    },

    /// A decomposition could not be resolved at the working precision.
    #[error("numerical failure: {0}")]
    Numerical(String),

    /// Polynomial arithmetic failed.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// Scalar arithmetic failed.
    #[error(transparent)]
    Complex(#[from] ComplexError),
}

/// Result alias for linear algebra operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

pub(crate) fn shape(message: impl Into<String>) -> LinalgError {
    LinalgError::Shape(message.into())
}

pub(crate) fn domain(message: impl Into<String>) -> LinalgError {
    LinalgError::Domain(message.into())
}
