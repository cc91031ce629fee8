//! Row and column vectors.

use std::fmt;

use cmat_complex::Complex;

use crate::elimination::EliminationIterator;
use crate::error::{domain, shape, Result};
use crate::matrix::{Matrix, FORM};

/// Whether a vector is laid out as a row or a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A `1 × n` vector.
    Row,
    /// An `n × 1` vector.
    Column,
}

impl Orientation {
    fn flipped(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

/// A vector of complex numbers with an orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    values: Vec<Complex>,
    orientation: Orientation,
}

impl Vector {
    /// Creates a vector.
    #[must_use]
    pub fn new<C: Into<Complex>>(values: impl IntoIterator<Item = C>, orientation: Orientation) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            orientation,
        }
    }

    /// Creates a row vector.
    #[must_use]
    pub fn row<C: Into<Complex>>(values: impl IntoIterator<Item = C>) -> Self {
        Self::new(values, Orientation::Row)
    }

    /// Creates a column vector.
    #[must_use]
    pub fn column<C: Into<Complex>>(values: impl IntoIterator<Item = C>) -> Self {
        Self::new(values, Orientation::Column)
    }

    /// Creates the zero vector.
    #[must_use]
    pub fn zero(len: usize, orientation: Orientation) -> Self {
        Self {
            values: vec![Complex::ZERO; len],
            orientation,
        }
    }

    /// Reads a `1 × n` matrix as a row vector or an `n × 1` matrix as a
    /// column vector.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the matrix has more than one row and column.
    pub fn from_matrix(matrix: &Matrix) -> Result<Self> {
        if matrix.rows() == 1 {
            Ok(Self::row(matrix.entries().iter().copied()))
        } else if matrix.columns() == 1 {
            Ok(Self::column(matrix.entries().iter().copied()))
        } else {
            Err(shape(format!(
                "a {}x{} matrix is not a vector",
                matrix.rows(),
                matrix.columns()
            )))
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row or column.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The entries.
    #[must_use]
    pub fn values(&self) -> &[Complex] {
        &self.values
    }

    /// Entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Complex> {
        self.values.get(index).copied()
    }

    /// Replaces the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `index` is out of range.
    pub fn set(&mut self, index: usize, value: impl Into<Complex>) -> Result<()> {
        let len = self.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| shape(format!("index {index} is outside a vector of length {len}")))?;
        *slot = value.into();
        Ok(())
    }

    /// The vector as a `1 × n` or `n × 1` matrix.
    ///
    /// # Errors
    ///
    /// Returns a shape error for the empty vector.
    pub fn as_matrix(&self) -> Result<Matrix> {
        let row = Matrix::new([self.values.iter().copied()])?;
        Ok(match self.orientation {
            Orientation::Row => row,
            Orientation::Column => row.transpose(),
        })
    }

    fn same_dimension(&self, other: &Self) -> bool {
        self.len() == other.len() && (self.len() == 1 || self.orientation == other.orientation)
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.same_dimension(other) {
            Ok(())
        } else {
            Err(shape(format!(
                "vectors of length {} ({:?}) and {} ({:?}) do not match",
                self.len(),
                self.orientation,
                other.len(),
                other.orientation
            )))
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&Complex, &Complex) -> Complex) -> Self {
        Self {
            values: self.values.iter().zip(&other.values).map(|(a, b)| f(a, b)).collect(),
            orientation: self.orientation,
        }
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the lengths or orientations differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(self.zip_with(other, Complex::add))
    }

    /// Entry-wise difference.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the lengths or orientations differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(self.zip_with(other, Complex::subtract))
    }

    /// Multiplies every entry by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: impl Into<Complex>) -> Self {
        let scalar = scalar.into();
        Self {
            values: self.values.iter().map(|v| v.multiply(&scalar, FORM)).collect(),
            orientation: self.orientation,
        }
    }

    /// Flips the orientation.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            values: self.values.clone(),
            orientation: self.orientation.flipped(),
        }
    }

    /// Conjugates every entry.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            values: self.values.iter().map(Complex::conjugate).collect(),
            orientation: self.orientation,
        }
    }

    /// Conjugates and flips the orientation.
    #[must_use]
    pub fn conjugate_transpose(&self) -> Self {
        self.transpose().conjugate()
    }

    fn hermitian_dot(&self, other: &Self) -> Complex {
        self.values
            .iter()
            .zip(&other.values)
            .fold(Complex::ZERO, |acc, (a, b)| acc.add(&a.multiply(&b.conjugate(), FORM)))
    }

    /// Hermitian inner product `Σ self_i · conj(other_i)`.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the lengths or orientations differ.
    pub fn dot(&self, other: &Self) -> Result<Complex> {
        self.check_dimension(other)?;
        Ok(self.hermitian_dot(other))
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm2(&self) -> f64 {
        self.hermitian_dot(self).real().sqrt()
    }

    /// The vector scaled to unit norm.
    ///
    /// # Errors
    ///
    /// Returns a domain error for the zero vector.
    pub fn normalized(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(domain("cannot normalize the zero vector"));
        }
        Ok(self.scale(1.0 / self.norm2()))
    }

    /// Returns true if the inner product vanishes.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the lengths or orientations differ.
    pub fn is_perpendicular(&self, other: &Self) -> Result<bool> {
        Ok(self.dot(other)?.is_zero())
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(Complex::is_zero)
    }

    /// Returns true if every entry is real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.values.iter().all(Complex::is_real)
    }

    /// Compares the entries at the default precision, ignoring orientation.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.values == other.values
    }

    /// Extends the vector to `len` entries with `fill`.
    ///
    /// Longer vectors are returned unchanged.
    #[must_use]
    pub fn pad(&self, len: usize, fill: impl Into<Complex>) -> Self {
        let mut padded = self.clone();
        if len > padded.len() {
            padded.values.resize(len, fill.into());
        }
        padded
    }

    /// Returns true if no vector is a combination of the others.
    ///
    /// Sets of fewer than two vectors are independent.
    #[must_use]
    pub fn linearly_independent(vectors: &[Self]) -> bool {
        if vectors.len() < 2 {
            return true;
        }
        Matrix::from_row_vectors(vectors).is_ok_and(|m| m.rank() == vectors.len())
    }

    /// Orthogonalizes `vectors` in order with the Gram–Schmidt process.
    ///
    /// Vectors that lie in the span of the earlier ones leave a zero residual
    /// and are dropped. With `normalize` every output has unit norm.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the vectors differ in length or orientation.
    pub fn gram_schmidt(vectors: &[Self], normalize: bool) -> Result<Vec<Self>> {
        let mut basis: Vec<Self> = Vec::with_capacity(vectors.len());
        for vector in vectors {
            let mut projection = Self::zero(vector.len(), vector.orientation);
            for u in &basis {
                let coefficient = vector.dot(u)?.divide(&u.hermitian_dot(u), FORM);
                projection = projection.add(&u.scale(coefficient))?;
            }
            let residual = vector.sub(&projection)?;
            if residual.is_zero() {
                continue;
            }
            basis.push(residual);
        }
        if normalize {
            basis = basis.iter().map(Self::normalized).collect::<Result<_>>()?;
        }
        Ok(basis)
    }

    /// Extends `vectors` with a basis of their orthogonal complement.
    ///
    /// The added vectors span the null space of the matrix whose rows are
    /// the conjugated inputs, so each is perpendicular to every input.
    ///
    /// # Errors
    ///
    /// Returns a domain error for an empty set and a shape error if the
    /// vectors differ in length.
    pub fn complement_basis(vectors: &[Self]) -> Result<Vec<Self>> {
        let Some(first) = vectors.first() else {
            return Err(domain("cannot complete an empty set of vectors"));
        };
        let conjugated: Vec<Self> = vectors.iter().map(Self::conjugate).collect();
        let complement = Matrix::from_row_vectors(&conjugated)?.null_space();

        let mut result = vectors.to_vec();
        result.extend(
            complement
                .into_iter()
                .map(|v| Self::new(v.values, first.orientation)),
        );
        Ok(result)
    }

    /// Keeps a maximal linearly independent subset, preserving order.
    ///
    /// A vector is kept when its column holds a pivot in the reduced row
    /// echelon form of the matrix whose columns are `vectors`.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the vectors differ in length.
    pub fn remove_linear_dependence(vectors: &[Self]) -> Result<Vec<Self>> {
        if vectors.is_empty() {
            return Ok(Vec::new());
        }
        let matrix = Matrix::from_column_vectors(vectors)?;
        let (_, pivots) = EliminationIterator::new(&matrix).finish_with_pivots();
        Ok(pivots.iter().map(|&(_, col)| vectors[col].clone()).collect())
    }
}

impl fmt::Display for Vector {
    /// `( a, b )` for rows and `( a, b )^T` for columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "( {} )", entries.join(", "))?;
        if self.orientation == Orientation::Column {
            write!(f, "^T")?;
        }
        Ok(())
    }
}
