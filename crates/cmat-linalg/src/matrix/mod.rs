//! Dense complex matrices.
//!
//! Entries are stored in row-major order. Every entry is a [`Complex`], so
//! all values carry the storage rounding of the scalar type and equality
//! compares at the default precision.

mod display;
mod reduce;
mod spectral;

use std::ops::{Index, IndexMut};

use cmat_complex::{Complex, ComputeForm};

use crate::elimination::RowOperation;
use crate::error::{domain, shape, Result};
use crate::vector::Vector;

pub use reduce::{FreeDirection, SolutionSet};
pub use spectral::Eigenspace;

/// Arithmetic form used by matrix operations.
pub(crate) const FORM: ComputeForm = ComputeForm::Polar;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<Complex>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a matrix from rows of scalars.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Shape`](crate::LinalgError::Shape) if there are
    /// no rows, the first row is empty, or the rows differ in length.
    pub fn new<R, C>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: Into<Complex>,
    {
        let mut data = Vec::new();
        let mut num_rows = 0;
        let mut num_cols = 0;

        for row in rows {
            let before = data.len();
            data.extend(row.into_iter().map(Into::into));
            let width = data.len() - before;
            if num_rows == 0 {
                if width == 0 {
                    return Err(shape("matrix rows must not be empty"));
                }
                num_cols = width;
            } else if width != num_cols {
                return Err(shape(format!(
                    "row {num_rows} has {width} entries, expected {num_cols}"
                )));
            }
            num_rows += 1;
        }

        if num_rows == 0 {
            return Err(shape("a matrix needs at least one row"));
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from rows of real numbers.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::new`].
    pub fn from_real<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::new(rows.iter().map(|row| row.as_ref().iter().copied()))
    }

    pub(crate) fn from_parts(data: Vec<Complex>, num_rows: usize, num_cols: usize) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a new matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Debug builds panic when a dimension is zero; matrices always have at
    /// least one row and one column.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        debug_assert!(
            num_rows >= 1 && num_cols >= 1,
            "a matrix needs at least one row and one column"
        );
        Self::from_parts(vec![Complex::ZERO; num_rows * num_cols], num_rows, num_cols)
    }

    /// Creates the `n × n` zero matrix.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `n` is zero.
    #[must_use]
    pub fn zero(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Creates `value · I` of size `n`.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `n` is zero.
    #[must_use]
    pub fn scalar(value: impl Into<Complex>, n: usize) -> Self {
        let value = value.into();
        let mut m = Self::zero(n);
        for i in 0..n {
            m[(i, i)] = value;
        }
        m
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::scalar(Complex::ONE, n)
    }

    /// Creates a square diagonal matrix.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `values` is empty.
    #[must_use]
    pub fn diagonal<C: Into<Complex>>(values: impl IntoIterator<Item = C>) -> Self {
        let values: Vec<Complex> = values.into_iter().map(Into::into).collect();
        let mut m = Self::zero(values.len());
        for (i, value) in values.into_iter().enumerate() {
            m[(i, i)] = value;
        }
        m
    }

    /// Stacks vectors as the rows of a matrix.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `vectors` is empty or the lengths differ.
    pub fn from_row_vectors(vectors: &[Vector]) -> Result<Self> {
        Self::new(vectors.iter().map(|v| v.values().to_vec()))
    }

    /// Places vectors side by side as the columns of a matrix.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `vectors` is empty or the lengths differ.
    pub fn from_column_vectors(vectors: &[Vector]) -> Result<Self> {
        Ok(Self::from_row_vectors(vectors)?.transpose())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.num_cols
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[Complex] {
        &self.data
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Checks if both matrices have the same dimensions.
    #[must_use]
    pub fn same_size(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows && self.num_cols == other.num_cols
    }

    /// Returns the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Complex> {
        if row < self.num_rows && col < self.num_cols {
            Some(self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a copy of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<Complex>> {
        (row < self.num_rows).then(|| self.row_slice(row).to_vec())
    }

    /// Returns a copy of the specified column.
    #[must_use]
    pub fn column(&self, col: usize) -> Option<Vec<Complex>> {
        (col < self.num_cols).then(|| (0..self.num_rows).map(|row| self[(row, col)]).collect())
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[Complex] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Sets the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns a shape error if the position is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<Complex>) -> Result<()> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(shape(format!(
                "position ({row}, {col}) is outside a {}x{} matrix",
                self.num_rows, self.num_cols
            )));
        }
        self[(row, col)] = value.into();
        Ok(())
    }

    /// Replaces a row.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `row` is out of range or `values` has the
    /// wrong length.
    pub fn set_row<C: Into<Complex> + Copy>(&mut self, row: usize, values: &[C]) -> Result<()> {
        if row >= self.num_rows {
            return Err(shape(format!("row {row} is out of range")));
        }
        if values.len() != self.num_cols {
            return Err(shape(format!(
                "row has {} entries, expected {}",
                values.len(),
                self.num_cols
            )));
        }
        for (col, &value) in values.iter().enumerate() {
            self[(row, col)] = value.into();
        }
        Ok(())
    }

    /// Replaces a column.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `col` is out of range or `values` has the
    /// wrong length.
    pub fn set_column<C: Into<Complex> + Copy>(&mut self, col: usize, values: &[C]) -> Result<()> {
        if col >= self.num_cols {
            return Err(shape(format!("column {col} is out of range")));
        }
        if values.len() != self.num_rows {
            return Err(shape(format!(
                "column has {} entries, expected {}",
                values.len(),
                self.num_rows
            )));
        }
        for (row, &value) in values.iter().enumerate() {
            self[(row, col)] = value.into();
        }
        Ok(())
    }

    fn map(&self, f: impl Fn(&Complex) -> Complex) -> Self {
        Self::from_parts(self.data.iter().map(f).collect(), self.num_rows, self.num_cols)
    }

    /// Adds two matrices.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.same_size(other) {
            return Err(shape(format!(
                "cannot add a {}x{} matrix to a {}x{} matrix",
                other.num_rows, other.num_cols, self.num_rows, self.num_cols
            )));
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a.add(b)).collect();
        Ok(Self::from_parts(data, self.num_rows, self.num_cols))
    }

    /// Subtracts two matrices.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the dimensions differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.scale(Complex::MINUS_ONE))
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: impl Into<Complex>) -> Self {
        let scalar = scalar.into();
        self.map(|v| v.multiply(&scalar, FORM))
    }

    /// Adds a scalar to every entry of a square matrix.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn add_scalar(&self, scalar: impl Into<Complex>) -> Result<Self> {
        if !self.is_square() {
            return Err(domain("cannot add a scalar to a non-square matrix"));
        }
        let scalar = scalar.into();
        Ok(self.map(|v| v.add(&scalar)))
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Errors
    ///
    /// Returns a shape error unless `self.columns() == other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.check_multiply(other)?;
        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                result[(i, j)] = self.row_times_column(other, i, j);
            }
        }
        Ok(result)
    }

    pub(crate) fn check_multiply(&self, other: &Self) -> Result<()> {
        if self.num_cols == other.num_rows {
            Ok(())
        } else {
            Err(shape(format!(
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                self.num_rows, self.num_cols, other.num_rows, other.num_cols
            )))
        }
    }

    pub(crate) fn row_times_column(&self, other: &Self, i: usize, j: usize) -> Complex {
        (0..self.num_cols).fold(Complex::ZERO, |acc, k| {
            acc.add(&self[(i, k)].multiply(&other[(k, j)], FORM))
        })
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// The result is a column vector.
    ///
    /// # Errors
    ///
    /// Returns a shape error unless `x.len() == self.columns()`.
    pub fn multiply_vector(&self, x: &Vector) -> Result<Vector> {
        if x.len() != self.num_cols {
            return Err(shape(format!(
                "cannot multiply a {}x{} matrix by a vector of length {}",
                self.num_rows,
                self.num_cols,
                x.len()
            )));
        }
        let values = (0..self.num_rows).map(|row| {
            self.row_slice(row)
                .iter()
                .zip(x.values())
                .fold(Complex::ZERO, |acc, (a, b)| acc.add(&a.multiply(b, FORM)))
        });
        Ok(Vector::column(values))
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Conjugates every entry.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        self.map(Complex::conjugate)
    }

    /// Returns the conjugate transpose.
    #[must_use]
    pub fn conjugate_transpose(&self) -> Self {
        self.transpose().conjugate()
    }

    /// Sum of the diagonal entries.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices.
    pub fn trace(&self) -> Result<Complex> {
        if !self.is_square() {
            return Err(domain("cannot calculate the trace of a non-square matrix"));
        }
        Ok((0..self.num_rows).fold(Complex::ZERO, |acc, i| acc.add(&self[(i, i)])))
    }

    /// Removes one row and one column.
    ///
    /// # Errors
    ///
    /// Returns a shape error if either index is out of range or the result
    /// would be empty.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(shape(format!("minor ({row}, {col}) is out of range")));
        }
        if self.num_rows < 2 || self.num_cols < 2 {
            return Err(shape("the minor of a single row or column is empty"));
        }
        Ok(self.strike(row, col))
    }

    /// Removes one row and one column without bounds checks.
    pub(crate) fn strike(&self, row: usize, col: usize) -> Self {
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(index, _)| index / self.num_cols != row && index % self.num_cols != col)
            .map(|(_, &v)| v)
            .collect();
        Self::from_parts(data, self.num_rows - 1, self.num_cols - 1)
    }

    /// Swaps two rows in-place.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of range.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Scales a row by a scalar.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn multiply_row(&mut self, row: usize, scalar: &Complex) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].multiply(scalar, FORM);
        }
    }

    /// Adds a scaled row to another: row[target] += scalar * row[source].
    ///
    /// # Panics
    ///
    /// Panics if either row is out of range.
    pub fn add_row(&mut self, target: usize, source: usize, scalar: &Complex) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].multiply(scalar, FORM);
            self[(target, k)] = self[(target, k)].add(&val);
        }
    }

    /// Applies an elementary row operation in-place.
    ///
    /// # Panics
    ///
    /// Panics if the operation names a row outside the matrix.
    pub fn apply_operation(&mut self, operation: &RowOperation) {
        match *operation {
            RowOperation::Swap { first, second } => self.swap_rows(first, second),
            RowOperation::Multiply { row, scalar } => self.multiply_row(row, &scalar),
            RowOperation::Add {
                target,
                source,
                scalar,
            } => self.add_row(target, source, &scalar),
            RowOperation::Noop => {}
        }
    }

    /// Applies a sequence of row operations in order.
    ///
    /// # Panics
    ///
    /// Panics if an operation names a row outside the matrix.
    pub fn apply_operations<'a>(&mut self, operations: impl IntoIterator<Item = &'a RowOperation>) {
        for operation in operations {
            self.apply_operation(operation);
        }
    }

    /// Compares dimensions and every entry at the default precision.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// True when both matrices have the same dimensions and no entries differ
    /// by more than `tolerance` in modulus.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.same_size(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.subtract(b).abs() <= tolerance)
    }

    fn all_entries(&self, f: impl Fn(usize, usize, &Complex) -> bool) -> bool {
        self.data
            .iter()
            .enumerate()
            .all(|(index, v)| f(index / self.num_cols, index % self.num_cols, v))
    }

    /// Returns true if every entry is real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.data.iter().all(Complex::is_real)
    }

    /// Real and equal to its transpose.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.is_real() && self.equals(&self.transpose())
    }

    /// Real and equal to the negated transpose.
    #[must_use]
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_real() && self.equals(&self.transpose().scale(Complex::MINUS_ONE))
    }

    /// Equal to its conjugate transpose.
    #[must_use]
    pub fn is_hermitian(&self) -> bool {
        self.equals(&self.conjugate_transpose())
    }

    /// Equal to the negated conjugate transpose.
    #[must_use]
    pub fn is_skew_hermitian(&self) -> bool {
        self.equals(&self.conjugate_transpose().scale(Complex::MINUS_ONE))
    }

    /// Square with zeros off the diagonal.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.is_square() && self.all_entries(|i, j, v| i == j || v.is_zero())
    }

    /// Zeros below the diagonal.
    #[must_use]
    pub fn is_upper_triangular(&self) -> bool {
        self.all_entries(|i, j, v| i <= j || v.is_zero())
    }

    /// Zeros above the diagonal.
    #[must_use]
    pub fn is_lower_triangular(&self) -> bool {
        self.all_entries(|i, j, v| i >= j || v.is_zero())
    }

    /// Upper or lower triangular.
    #[must_use]
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// Square with ones on the diagonal and zeros elsewhere.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_square() && self.equals(&Self::identity(self.num_rows))
    }

    /// Square with a non-zero determinant.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.determinant().is_ok_and(|det| !det.is_zero())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex;

    fn index(&self, (row, col): (usize, usize)) -> &Complex {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Complex {
        &mut self.data[row * self.num_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex {
        Complex::from_cartesian(re, im)
    }

    #[test]
    fn test_new_validates_shape() {
        assert!(Matrix::new(Vec::<Vec<i32>>::new()).is_err());
        assert!(Matrix::new([Vec::<i32>::new()]).is_err());
        assert!(Matrix::new(vec![vec![1, 2], vec![3]]).is_err());
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!((m.rows(), m.columns()), (2, 3));
        assert_eq!(m[(1, 2)], Complex::from(6));
    }

    #[test]
    fn test_from_real() {
        let m = Matrix::from_real(&[[1.5, 2.0], [0.0, -1.0]]).unwrap();
        assert_eq!(m.get(0, 0), Some(Complex::from(1.5)));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_special_constructors() {
        let id = Matrix::identity(3);
        assert!(id.is_identity());
        assert!(Matrix::zero(2).entries().iter().all(Complex::is_zero));
        assert_eq!(Matrix::scalar(5, 2), Matrix::new([[5, 0], [0, 5]]).unwrap());
        assert_eq!(Matrix::diagonal([1, 2]), Matrix::new([[1, 0], [0, 2]]).unwrap());
        assert_eq!((Matrix::zeros(2, 4).rows(), Matrix::zeros(2, 4).columns()), (2, 4));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least one row and one column")]
    fn test_zero_dimension_rejected() {
        let _ = Matrix::zeros(0, 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least one row and one column")]
    fn test_empty_diagonal_rejected() {
        let _ = Matrix::diagonal(Vec::<Complex>::new());
    }

    #[test]
    fn test_approx_eq() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::new([[1.0, 2.000_001], [3.0, 4.0]]).unwrap();
        assert!(a.approx_eq(&b, 1e-5));
        assert!(!a.approx_eq(&b, 1e-7));
        assert_ne!(a, b);
        assert!(!a.approx_eq(&Matrix::zeros(2, 3), 1.0));
    }

    #[test]
    fn test_from_vectors() {
        let vs = [Vector::row([1, 2]), Vector::row([3, 4])];
        let rows = Matrix::from_row_vectors(&vs).unwrap();
        let cols = Matrix::from_column_vectors(&vs).unwrap();
        assert_eq!(rows, Matrix::new([[1, 2], [3, 4]]).unwrap());
        assert_eq!(cols, rows.transpose());
        assert!(Matrix::from_row_vectors(&[]).is_err());
        assert!(Matrix::from_row_vectors(&[Vector::row([1]), Vector::row([1, 2])]).is_err());
    }

    #[test]
    fn test_row_and_column_access() {
        let mut m = Matrix::new([[1, 2], [3, 4]]).unwrap();
        assert_eq!(m.row(1), Some(vec![Complex::from(3), Complex::from(4)]));
        assert_eq!(m.column(0), Some(vec![Complex::from(1), Complex::from(3)]));
        assert_eq!(m.row(2), None);

        m.set_row(0, &[9, 8]).unwrap();
        m.set_column(1, &[7, 6]).unwrap();
        m.set(1, 0, c(0.0, 1.0)).unwrap();
        assert_eq!(m, Matrix::new([[c(9.0, 0.0), c(7.0, 0.0)], [c(0.0, 1.0), c(6.0, 0.0)]]).unwrap());

        assert!(m.set_row(0, &[1]).is_err());
        assert!(m.set_column(0, &[1, 2, 3]).is_err());
        assert!(m.set(5, 0, 1).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Matrix::new([[1, 2], [3, 4]]).unwrap();
        let b = Matrix::new([[4, 3], [2, 1]]).unwrap();
        assert_eq!(a.add(&b).unwrap(), Matrix::new([[5, 5], [5, 5]]).unwrap());
        assert_eq!(a.sub(&a).unwrap(), Matrix::zero(2));
        assert_eq!(a.scale(2), Matrix::new([[2, 4], [6, 8]]).unwrap());
        assert_eq!(a.add_scalar(1).unwrap(), Matrix::new([[2, 3], [4, 5]]).unwrap());
        assert!(Matrix::zeros(2, 3).add_scalar(1).is_err());
        assert!(a.add(&Matrix::zeros(2, 3)).is_err());
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::new([[1, 2, 3], [4, 5, 6]]).unwrap();
        let b = Matrix::new([[7, 8], [9, 10], [11, 12]]).unwrap();
        assert_eq!(
            a.multiply(&b).unwrap(),
            Matrix::new([[58, 64], [139, 154]]).unwrap()
        );
        assert!(a.multiply(&a).is_err());

        let x = Vector::column([1, 0, -1]);
        assert_eq!(a.multiply_vector(&x).unwrap(), Vector::column([-2, -2]));
        assert!(a.multiply_vector(&Vector::column([1, 2])).is_err());
    }

    #[test]
    fn test_complex_multiply() {
        let a = Matrix::new([[c(1.0, 1.0), c(0.0, 0.0)], [c(0.0, 2.0), c(1.0, 0.0)]]).unwrap();
        let product = a.multiply(&a).unwrap();
        assert_eq!(
            product,
            Matrix::new([[c(0.0, 2.0), c(0.0, 0.0)], [c(-2.0, 4.0), c(1.0, 0.0)]]).unwrap()
        );
    }

    #[test]
    fn test_structure() {
        let a = Matrix::new([[c(1.0, 1.0), c(2.0, 0.0)], [c(0.0, -3.0), c(4.0, 2.0)]]).unwrap();
        assert_eq!(a.transpose()[(0, 1)], c(0.0, -3.0));
        assert_eq!(a.conjugate()[(1, 1)], c(4.0, -2.0));
        assert_eq!(a.conjugate_transpose()[(1, 0)], c(2.0, 0.0));
        assert_eq!(a.conjugate_transpose()[(0, 1)], c(0.0, 3.0));
        assert_eq!(a.trace().unwrap(), c(5.0, 3.0));
        assert!(Matrix::zeros(2, 3).trace().is_err());
    }

    #[test]
    fn test_minor() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        assert_eq!(m.minor(1, 1).unwrap(), Matrix::new([[1, 3], [7, 9]]).unwrap());
        assert_eq!(m.minor(0, 2).unwrap(), Matrix::new([[4, 5], [7, 8]]).unwrap());
        assert!(m.minor(3, 0).is_err());
        assert!(Matrix::new([[1, 2]]).unwrap().minor(0, 0).is_err());
    }

    #[test]
    fn test_row_operations() {
        let mut m = Matrix::new([[1, 2], [3, 4]]).unwrap();
        m.swap_rows(0, 1);
        assert_eq!(m, Matrix::new([[3, 4], [1, 2]]).unwrap());
        m.multiply_row(1, &Complex::from(2));
        assert_eq!(m, Matrix::new([[3, 4], [2, 4]]).unwrap());
        m.add_row(0, 1, &Complex::from(-1));
        assert_eq!(m, Matrix::new([[1, 0], [2, 4]]).unwrap());

        m.apply_operations(&[
            RowOperation::Swap { first: 0, second: 1 },
            RowOperation::Noop,
            RowOperation::Multiply { row: 0, scalar: Complex::from(0.5) },
        ]);
        assert_eq!(m, Matrix::new([[1, 2], [1, 0]]).unwrap());
    }

    #[test]
    fn test_predicates() {
        let symmetric = Matrix::new([[1, 2], [2, 3]]).unwrap();
        assert!(symmetric.is_symmetric());
        assert!(symmetric.is_hermitian());
        assert!(!symmetric.is_diagonal());

        let skew = Matrix::new([[0, 2], [-2, 0]]).unwrap();
        assert!(skew.is_skew_symmetric());
        assert!(skew.is_skew_hermitian());

        let hermitian = Matrix::new([[c(2.0, 0.0), c(1.0, 1.0)], [c(1.0, -1.0), c(3.0, 0.0)]]).unwrap();
        assert!(hermitian.is_hermitian());
        assert!(!hermitian.is_symmetric());
        assert!(!hermitian.is_real());

        let skew_hermitian =
            Matrix::new([[c(0.0, 1.0), c(2.0, 1.0)], [c(-2.0, 1.0), c(0.0, 0.0)]]).unwrap();
        assert!(skew_hermitian.is_skew_hermitian());

        let upper = Matrix::new([[1, 2, 3], [0, 4, 5]]).unwrap();
        assert!(upper.is_upper_triangular());
        assert!(!upper.is_lower_triangular());
        assert!(upper.is_triangular());
        assert!(upper.transpose().is_lower_triangular());
        assert!(!upper.is_square());

        assert!(Matrix::diagonal([1, 2, 3]).is_diagonal());
        assert!(!Matrix::diagonal([1, 2]).is_identity());
        assert!(Matrix::new([[1, 2], [3, 4]]).unwrap().is_invertible());
        assert!(!Matrix::new([[1, 2], [2, 4]]).unwrap().is_invertible());
        assert!(!Matrix::zeros(2, 3).is_invertible());
    }
}
