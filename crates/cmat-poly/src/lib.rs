//! # cmat-poly
//!
//! Univariate polynomials over the complex numbers.
//!
//! This crate provides:
//! - Sparse polynomials keyed by power, with named-method arithmetic
//! - Long division with remainder and synthetic deflation
//! - Horner evaluation across sparse gaps
//! - Durand–Kerner root finding with deflation ([`RootFinderConfig`])
//!
//! ```
//! use cmat_complex::Complex;
//! use cmat_poly::{Polynomial, RootFinderConfig};
//!
//! let p = Polynomial::from_coefficients([2, -3, 1]);
//! assert_eq!(p.to_string(), "x^2 - 3x + 2");
//! let mut roots = p.find_roots(&RootFinderConfig::default());
//! roots.sort_by(|a, b| a.real().total_cmp(&b.real()));
//! assert_eq!(roots, vec![Complex::from(1), Complex::from(2)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod polynomial;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, Result};
pub use polynomial::Polynomial;
pub use roots::RootFinderConfig;
