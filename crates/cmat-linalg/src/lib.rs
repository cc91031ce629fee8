//! # cmat-linalg
//!
//! Dense linear algebra over the complex numbers.
//!
//! This crate provides:
//! - Row-major complex matrices with validated construction and
//!   shape-checked arithmetic
//! - Row and column vectors with Hermitian inner products, Gram–Schmidt
//!   and orthogonal complements
//! - Step-by-step Gauss–Jordan elimination as an iterator of row operations
//! - Rank, inverse, null spaces and complete solution sets of linear systems
//! - Determinants, characteristic polynomials, eigenvalues, diagonalization
//!   and the singular value decomposition
//! - Parallel matrix products via rayon
//!
//! ```
//! use cmat_linalg::{Matrix, Vector};
//!
//! let a = Matrix::new([[2, 1], [1, 1]]).unwrap();
//! let solution = a.solve(&Vector::column([1, 1])).unwrap().unwrap();
//! assert_eq!(solution.particular, Vector::column([0, 1]));
//! assert!(a.multiply(&a.inverse().unwrap()).unwrap().is_identity());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod elimination;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod vector;

pub use elimination::{EliminationIterator, EliminationState, EliminationStep, RowOperation};
pub use error::{LinalgError, Result};
pub use matrix::{Eigenspace, FreeDirection, Matrix, SolutionSet};
pub use parallel::ParallelConfig;
pub use vector::{Orientation, Vector};

#[cfg(test)]
mod proptests;
