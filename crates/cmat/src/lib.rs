//! # cmat
//!
//! A complex-number linear algebra and polynomial engine.
//!
//! ## Features
//!
//! - **Rounded complex scalars**: cartesian and polar forms kept in sync,
//!   stored at 12 significant digits and compared at 9
//! - **Sparse polynomials**: exact long division, synthetic division and
//!   Durand–Kerner root finding
//! - **Matrices and vectors**: shape-checked arithmetic, Hermitian inner
//!   products, Gram–Schmidt and orthogonal complements
//! - **Step-by-step elimination**: every elementary row operation of a
//!   Gauss–Jordan reduction, with the matrix after each step
//! - **Spectral tools**: determinants, characteristic polynomials,
//!   eigenspaces, diagonalization, SVD and matrix powers
//!
//! ## Quick Start
//!
//! ```rust
//! use cmat::prelude::*;
//!
//! let a = Matrix::new([[5, 4], [2, 3]]).unwrap();
//! let (u, d) = a.diagonalize().unwrap();
//! assert_eq!(d, Matrix::diagonal([1, 7]));
//!
//! let rebuilt = u.multiply(&d).unwrap().multiply(&u.inverse().unwrap()).unwrap();
//! assert_eq!(rebuilt, a);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cmat_complex as complex;
pub use cmat_linalg as linalg;
pub use cmat_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cmat_complex::{Complex, ComplexError, ComputeForm};
    pub use cmat_linalg::{
        EliminationIterator, EliminationStep, LinalgError, Matrix, Orientation, RowOperation,
        SolutionSet, Vector,
    };
    pub use cmat_poly::{PolyError, Polynomial, RootFinderConfig};
}
