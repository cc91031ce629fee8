//! Determinants, characteristic polynomials and the decompositions built
//! on eigenvalues.

use cmat_complex::Complex;
use cmat_poly::{Polynomial, RootFinderConfig};
use tracing::debug;

use super::{Matrix, FORM};
use crate::error::{domain, LinalgError, Result};
use crate::vector::Vector;

/// Relative distance under which two computed eigenvalues are merged.
const EIGENVALUE_TOLERANCE: f64 = 1e-6;

/// Relative pivot size under which `λI - A` is treated as singular.
const NULL_SPACE_TOLERANCE: f64 = 1e-8;

/// Gram eigenvalues below this fraction of the largest give a zero singular
/// value.
const SINGULAR_VALUE_CUTOFF: f64 = 1e-9;

/// A distinct eigenvalue with its multiplicity and eigenvectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigenspace {
    /// The eigenvalue.
    pub eigenvalue: Complex,
    /// Multiplicity as a root of the characteristic polynomial.
    pub algebraic_multiplicity: usize,
    /// Basis of the null space of `λI - A`.
    pub basis: Vec<Vector>,
}

impl Eigenspace {
    /// Dimension of the eigenspace.
    #[must_use]
    pub fn geometric_multiplicity(&self) -> usize {
        self.basis.len()
    }
}

fn polynomial_determinant(matrix: &[Vec<Polynomial>]) -> Polynomial {
    if matrix.len() == 1 {
        return matrix[0][0].clone();
    }
    let mut det = Polynomial::zero();
    for (col, entry) in matrix[0].iter().enumerate() {
        if entry.is_zero() {
            continue;
        }
        let minor: Vec<Vec<Polynomial>> = matrix[1..]
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(c, _)| c != col)
                    .map(|(_, p)| p.clone())
                    .collect()
            })
            .collect();
        let term = entry.mul(&polynomial_determinant(&minor), FORM);
        det = if col % 2 == 0 { det.add(&term) } else { det.sub(&term) };
    }
    det
}

impl Matrix {
    fn require_square(&self, what: &str) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(domain(format!(
                "cannot calculate the {what} of a non-square matrix"
            )))
        }
    }

    fn cofactor_expansion(&self) -> Complex {
        if self.num_rows == 1 {
            return self[(0, 0)];
        }
        let mut det = Complex::ZERO;
        for col in 0..self.num_cols {
            let entry = self[(0, col)];
            if entry.is_zero() {
                continue;
            }
            let term = entry.multiply(&self.strike(0, col).cofactor_expansion(), FORM);
            det = if col % 2 == 0 {
                det.add(&term)
            } else {
                det.subtract(&term)
            };
        }
        det
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn determinant(&self) -> Result<Complex> {
        self.require_square("determinant")?;
        Ok(self.cofactor_expansion())
    }

    /// The characteristic polynomial `det(xI - A)`.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn characteristic_polynomial(&self) -> Result<Polynomial> {
        self.require_square("characteristic polynomial")?;
        let entries: Vec<Vec<Polynomial>> = (0..self.num_rows)
            .map(|i| {
                (0..self.num_cols)
                    .map(|j| {
                        if i == j {
                            Polynomial::linear_monic(self[(i, j)])
                        } else {
                            Polynomial::constant(-self[(i, j)])
                        }
                    })
                    .collect()
            })
            .collect();
        Ok(polynomial_determinant(&entries))
    }

    /// Eigenvalues with the default root finder settings.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn eigenvalues(&self) -> Result<Vec<Complex>> {
        self.eigenvalues_with(&RootFinderConfig::default())
    }

    /// Eigenvalues, repeated by algebraic multiplicity and rounded to
    /// `config.round_decimals` places.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn eigenvalues_with(&self, config: &RootFinderConfig) -> Result<Vec<Complex>> {
        Ok(self
            .spectrum(config)?
            .iter()
            .map(|value| value.fixed(config.round_decimals))
            .collect())
    }

    /// Eigenvalues at full stored precision.
    ///
    /// A triangular matrix yields its diagonal directly. Otherwise these are
    /// the roots of the characteristic polynomial.
    fn spectrum(&self, config: &RootFinderConfig) -> Result<Vec<Complex>> {
        self.require_square("eigenvalues")?;
        if self.is_triangular() {
            return Ok((0..self.num_rows).map(|i| self[(i, i)]).collect());
        }
        let polynomial = self.characteristic_polynomial()?;
        debug!(%polynomial, "characteristic polynomial");
        Ok(polynomial.find_roots_unrounded(config))
    }

    /// Eigenspaces with the default root finder settings.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn eigenspaces(&self) -> Result<Vec<Eigenspace>> {
        self.eigenspaces_with(&RootFinderConfig::default())
    }

    /// Distinct eigenvalues in ascending order (real part, then imaginary
    /// part), each with its multiplicity and eigenspace basis.
    ///
    /// Eigenvalues are kept at full precision. Values closer than a relative
    /// `1e-6` are merged, and the eigenvectors span the numerical null space
    /// of `λI - A`.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn eigenspaces_with(&self, config: &RootFinderConfig) -> Result<Vec<Eigenspace>> {
        let mut distinct: Vec<(Complex, usize)> = Vec::new();
        for eigenvalue in self.spectrum(config)? {
            let close = |value: &Complex| {
                value.subtract(&eigenvalue).abs() <= EIGENVALUE_TOLERANCE * value.abs().max(1.0)
            };
            match distinct.iter_mut().find(|(value, _)| close(value)) {
                Some((_, count)) => *count += 1,
                None => distinct.push((eigenvalue, 1)),
            }
        }
        distinct.sort_by(|(a, _), (b, _)| {
            let (a, b) = (a.fixed(config.round_decimals), b.fixed(config.round_decimals));
            a.real()
                .total_cmp(&b.real())
                .then(a.imaginary().total_cmp(&b.imaginary()))
        });

        distinct
            .into_iter()
            .map(|(eigenvalue, algebraic_multiplicity)| {
                let shifted = Self::scalar(eigenvalue, self.num_rows).sub(self)?;
                Ok(Eigenspace {
                    eigenvalue,
                    algebraic_multiplicity,
                    basis: shifted.null_space_with_tolerance(NULL_SPACE_TOLERANCE),
                })
            })
            .collect()
    }

    /// Diagonalization with the default root finder settings.
    ///
    /// # Errors
    ///
    /// See [`Matrix::diagonalize_with`].
    pub fn diagonalize(&self) -> Result<(Self, Self)> {
        self.diagonalize_with(&RootFinderConfig::default())
    }

    /// Returns `(U, D)` with `D` diagonal and `A = U D U⁻¹`.
    ///
    /// The columns of `U` are eigenvectors grouped by eigenvalue.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices and
    /// [`LinalgError::NotDiagonalizable`] when an eigenspace is smaller than
    /// the multiplicity of its eigenvalue.
    pub fn diagonalize_with(&self, config: &RootFinderConfig) -> Result<(Self, Self)> {
        let mut eigenvectors = Vec::with_capacity(self.num_rows);
        let mut diagonal = Vec::with_capacity(self.num_rows);

        for space in self.eigenspaces_with(config)? {
            if space.geometric_multiplicity() < space.algebraic_multiplicity {
                return Err(LinalgError::NotDiagonalizable {
                    eigenvalue: space.eigenvalue,
                    geometric: space.geometric_multiplicity(),
                    algebraic: space.algebraic_multiplicity,
                });
            }
            diagonal.extend(std::iter::repeat(space.eigenvalue).take(space.basis.len()));
            eigenvectors.extend(space.basis);
        }

        if eigenvectors.len() != self.num_rows {
            return Err(LinalgError::Numerical(format!(
                "found {} eigenvectors for a {}x{} matrix",
                eigenvectors.len(),
                self.num_rows,
                self.num_cols
            )));
        }

        Ok((Self::from_column_vectors(&eigenvectors)?, Self::diagonal(diagonal)))
    }

    /// Singular value decomposition with the default root finder settings.
    ///
    /// # Errors
    ///
    /// See [`Matrix::svd_with`].
    pub fn svd(&self) -> Result<(Self, Self, Self)> {
        self.svd_with(&RootFinderConfig::default())
    }

    /// Returns `(W, Σ, Vᴴ)` with `A = W Σ Vᴴ`.
    ///
    /// `W` and `V` are unitary and `Σ` has the singular values on its
    /// diagonal in descending order. Wide matrices are decomposed through
    /// their conjugate transpose so the smaller Gram matrix is used.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Numerical`] when the eigenspaces of `AᴴA`
    /// cannot be resolved at the configured root precision.
    pub fn svd_with(&self, config: &RootFinderConfig) -> Result<(Self, Self, Self)> {
        if self.num_rows < self.num_cols {
            let (w, sigma, v_h) = self.conjugate_transpose().svd_with(config)?;
            return Ok((v_h.conjugate_transpose(), sigma.transpose(), w.conjugate_transpose()));
        }

        let gram = self.conjugate_transpose().multiply(self)?;
        let mut spaces = gram.eigenspaces_with(config)?;
        spaces.reverse();

        let largest = spaces
            .iter()
            .map(|space| space.eigenvalue.real())
            .fold(0.0, f64::max);
        let mut right = Vec::with_capacity(self.num_cols);
        let mut singular_values = Vec::with_capacity(self.num_cols);
        for space in &spaces {
            let orthonormal = Vector::gram_schmidt(&space.basis, true)?;
            if orthonormal.len() < space.algebraic_multiplicity {
                return Err(LinalgError::Numerical(format!(
                    "eigenvalue {} of the Gram matrix has {} eigenvectors but multiplicity {}",
                    space.eigenvalue,
                    orthonormal.len(),
                    space.algebraic_multiplicity
                )));
            }
            let value = space.eigenvalue.real();
            let sigma = if value <= SINGULAR_VALUE_CUTOFF * largest {
                0.0
            } else {
                value.sqrt()
            };
            singular_values.extend(std::iter::repeat(sigma).take(orthonormal.len()));
            right.extend(orthonormal);
        }
        if right.len() != self.num_cols {
            return Err(LinalgError::Numerical(format!(
                "found {} right singular vectors for {} columns",
                right.len(),
                self.num_cols
            )));
        }

        let mut left = Vec::with_capacity(self.num_rows);
        for (v, &sigma) in right.iter().zip(&singular_values) {
            if sigma != 0.0 {
                left.push(self.multiply_vector(v)?.scale(1.0 / sigma));
            }
        }
        let left = if left.is_empty() {
            (0..self.num_rows)
                .map(|i| {
                    let mut unit = vec![Complex::ZERO; self.num_rows];
                    unit[i] = Complex::ONE;
                    Vector::column(unit)
                })
                .collect()
        } else {
            Vector::gram_schmidt(&Vector::complement_basis(&left)?, true)?
        };
        if left.len() != self.num_rows {
            return Err(LinalgError::Numerical(format!(
                "found {} left singular vectors for {} rows",
                left.len(),
                self.num_rows
            )));
        }

        let mut sigma = Self::zeros(self.num_rows, self.num_cols);
        for (i, &value) in singular_values.iter().enumerate() {
            sigma[(i, i)] = Complex::from(value);
        }

        Ok((
            Self::from_column_vectors(&left)?,
            sigma,
            Self::from_column_vectors(&right)?.conjugate_transpose(),
        ))
    }

    /// Integer power with the default root finder settings.
    ///
    /// # Errors
    ///
    /// See [`Matrix::power_with`].
    pub fn power(&self, n: i32) -> Result<Self> {
        self.power_with(n, &RootFinderConfig::default())
    }

    /// Raises a square matrix to a non-negative integer power.
    ///
    /// Diagonal matrices are powered entry-wise. Otherwise the matrix is
    /// diagonalized and `U Dⁿ U⁻¹` is used when `U D U⁻¹` reproduces the
    /// matrix; if not, repeated squaring is used.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices and negative `n`.
    pub fn power_with(&self, n: i32, config: &RootFinderConfig) -> Result<Self> {
        self.require_square("power")?;
        if n < 0 {
            return Err(domain(format!("cannot raise a matrix to the negative power {n}")));
        }
        if n == 0 {
            return Ok(Self::identity(self.num_rows));
        }
        if self.is_diagonal() {
            debug!(n, "powering diagonal entries");
            return Ok(Self::diagonal(
                (0..self.num_rows).map(|i| self[(i, i)].powi(n, FORM)),
            ));
        }
        if let Some(result) = self.power_by_diagonalization(n, config) {
            debug!(n, "powering through diagonalization");
            return Ok(result);
        }
        debug!(n, "powering by repeated squaring");
        self.power_by_squaring(n.unsigned_abs())
    }

    fn power_by_diagonalization(&self, n: i32, config: &RootFinderConfig) -> Option<Self> {
        let (u, d) = self.diagonalize_with(config).ok()?;
        let u_inv = u.inverse().ok()?;
        let rebuilt = u.multiply(&d).ok()?.multiply(&u_inv).ok()?;
        if rebuilt != *self {
            return None;
        }
        let d_n = Self::diagonal((0..d.num_rows).map(|i| d[(i, i)].powi(n, FORM)));
        u.multiply(&d_n).ok()?.multiply(&u_inv).ok()
    }

    fn power_by_squaring(&self, mut n: u32) -> Result<Self> {
        let mut result = Self::identity(self.num_rows);
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.multiply(&base)?;
            }
            n >>= 1;
            if n > 0 {
                base = base.multiply(&base)?;
            }
        }
        Ok(result)
    }
}
