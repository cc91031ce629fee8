//! # cmat-complex
//!
//! Complex scalars for the cmat linear-algebra engine.
//!
//! This crate provides:
//! - `Complex`: an immutable complex number with a cached polar form
//! - `ComputeForm`: polar or cartesian evaluation of products and powers
//! - The precision policy every cmat type relies on
//!
//! ## Precision
//!
//! Every constructor rounds to 12 significant digits and snaps values that
//! are within `1e-9` of an integer, so `0.1 + 0.2` is stored as `0.3` and
//! `cos(π/2)` as `0`. Equality is precision-bounded rather than bit-exact:
//!
//! ```rust
//! use cmat_complex::Complex;
//!
//! let a = Complex::from_cartesian(1.0, 4.0);
//! let b = Complex::from_cartesian(2.0, 3.0);
//! assert_eq!(a * b, Complex::from_cartesian(-10.0, 11.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod complex;
pub mod error;
pub mod precision;

#[cfg(test)]
mod proptests;

pub use complex::{Complex, ComputeForm};
pub use error::{ComplexError, Result};
