//! Row reduction and everything derived from it: rank, inverse, linear
//! systems and null spaces.

use std::fmt;

use cmat_complex::Complex;
use tracing::debug;

use super::{Matrix, FORM};
use crate::elimination::EliminationIterator;
use crate::error::{domain, shape, LinalgError, Result};
use crate::vector::Vector;

/// One free variable of a linear system and the homogeneous solution it
/// generates.
#[derive(Clone, Debug, PartialEq)]
pub struct FreeDirection {
    /// Zero-based index of the free variable.
    pub variable: usize,
    /// Solution of `Ax = 0` with this variable set to one and the other free
    /// variables set to zero.
    pub direction: Vector,
}

/// Every solution of `Ax = b`: `particular + Σ t_k · basis[k].direction`.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionSet {
    /// The solution with every free variable set to zero.
    pub particular: Vector,
    /// One direction per free variable, in variable order.
    pub basis: Vec<FreeDirection>,
}

impl SolutionSet {
    /// True when there are no free variables.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.basis.is_empty()
    }

    /// Number of free variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.basis.len()
    }
}

impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.particular)?;
        for free in &self.basis {
            write!(f, " + x{} {}", free.variable + 1, free.direction)?;
        }
        Ok(())
    }
}

/// A reduced system: the RREF of `A`, the right-hand side after the same
/// operations, and the pivot positions.
struct Reduced {
    matrix: Matrix,
    rhs: Matrix,
    pivots: Vec<(usize, usize)>,
}

impl Matrix {
    /// Starts a step-by-step reduction of a copy of this matrix.
    #[must_use]
    pub fn rref_iter(&self) -> EliminationIterator {
        EliminationIterator::new(self)
    }

    /// Returns the reduced row echelon form.
    #[must_use]
    pub fn rref(&self) -> Self {
        self.rref_iter().finish()
    }

    /// Reduces this matrix to reduced row echelon form in place.
    pub fn reduce_to_rref(&mut self) {
        *self = self.rref();
    }

    /// Number of non-zero rows of the reduced row echelon form.
    #[must_use]
    pub fn rank(&self) -> usize {
        let reduced = self.rref();
        (0..reduced.num_rows)
            .filter(|&row| reduced.row_slice(row).iter().any(|v| !v.is_zero()))
            .count()
    }

    /// Reduces `self` while replaying every operation on `rhs`.
    fn reduce_with(&self, mut rhs: Self) -> Reduced {
        let mut steps = self.rref_iter();
        for step in steps.by_ref() {
            rhs.apply_operation(&step.operation);
        }
        let (matrix, pivots) = steps.finish_with_pivots();
        Reduced {
            matrix,
            rhs,
            pivots,
        }
    }

    /// Returns the inverse matrix.
    ///
    /// The reduction of `self` is replayed on an identity matrix.
    ///
    /// # Errors
    ///
    /// Returns a domain error for non-square matrices and
    /// [`LinalgError::Singular`] when the reduced form is not the identity.
    pub fn inverse(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(domain("cannot invert a non-square matrix"));
        }
        let reduced = self.reduce_with(Self::identity(self.num_rows));
        if !reduced.matrix.is_identity() {
            return Err(LinalgError::Singular);
        }
        Ok(reduced.rhs)
    }

    /// Solves `Ax = b`.
    ///
    /// Returns `Ok(None)` when the system is inconsistent.
    ///
    /// # Errors
    ///
    /// Returns a shape error unless `b.len() == self.rows()`.
    pub fn solve(&self, b: &Vector) -> Result<Option<SolutionSet>> {
        if b.len() != self.num_rows {
            return Err(shape(format!(
                "right-hand side has {} entries but the matrix has {} rows",
                b.len(),
                self.num_rows
            )));
        }
        let rhs = Self::from_parts(b.values().to_vec(), self.num_rows, 1);
        let reduced = self.reduce_with(rhs);

        let inconsistent = (0..self.num_rows).any(|row| {
            !reduced.rhs[(row, 0)].is_zero()
                && reduced.matrix.row_slice(row).iter().all(Complex::is_zero)
        });
        if inconsistent {
            debug!("linear system is inconsistent");
            return Ok(None);
        }

        let solution = self.solution_set(&reduced);
        debug!(free_variables = solution.dimension(), "solved linear system");
        Ok(Some(solution))
    }

    /// Solves `Ax = 0`, which always has at least the trivial solution.
    #[must_use]
    pub fn solve_homogeneous(&self) -> SolutionSet {
        let reduced = self.reduce_with(Self::zeros(self.num_rows, 1));
        self.solution_set(&reduced)
    }

    /// A basis of the null space, one column vector per free variable.
    #[must_use]
    pub fn null_space(&self) -> Vec<Vector> {
        self.solve_homogeneous()
            .basis
            .into_iter()
            .map(|free| free.direction)
            .collect()
    }

    /// A null space basis for a matrix whose entries carry rounding error.
    ///
    /// Gauss–Jordan elimination with partial pivoting. A column whose largest
    /// remaining entry is at most `tolerance` times the largest entry of the
    /// matrix holds no pivot, so its variable is free.
    #[must_use]
    pub fn null_space_with_tolerance(&self, tolerance: f64) -> Vec<Vector> {
        let threshold = tolerance * self.data.iter().map(Complex::abs).fold(0.0, f64::max);
        let mut work = self.clone();
        let mut pivots = Vec::new();

        for col in 0..self.num_cols {
            let row = pivots.len();
            let Some((pivot_row, magnitude)) = (row..self.num_rows)
                .map(|r| (r, work[(r, col)].abs()))
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
            else {
                break;
            };
            if magnitude <= threshold {
                continue;
            }
            work.swap_rows(row, pivot_row);
            let inverse = work[(row, col)].reciprocal(FORM);
            work.multiply_row(row, &inverse);
            for other in (0..self.num_rows).filter(|&other| other != row) {
                let factor = -work[(other, col)];
                if !factor.is_zero() {
                    work.add_row(other, row, &factor);
                }
            }
            pivots.push((row, col));
        }

        debug!(rank = pivots.len(), tolerance, "numerical null space");
        free_directions(&work, &pivots)
            .into_iter()
            .map(|free| free.direction)
            .collect()
    }

    fn solution_set(&self, reduced: &Reduced) -> SolutionSet {
        let columns = self.num_cols;

        let mut particular = vec![Complex::ZERO; columns];
        for &(row, col) in &reduced.pivots {
            particular[col] = reduced.rhs[(row, 0)];
        }

        let basis = free_directions(&reduced.matrix, &reduced.pivots);

        SolutionSet {
            particular: Vector::column(particular),
            basis,
        }
    }
}

/// One direction per non-pivot column of a reduced matrix.
fn free_directions(reduced: &Matrix, pivots: &[(usize, usize)]) -> Vec<FreeDirection> {
    (0..reduced.num_cols)
        .filter(|col| !pivots.iter().any(|&(_, c)| c == *col))
        .map(|variable| {
            let mut direction = vec![Complex::ZERO; reduced.num_cols];
            direction[variable] = Complex::ONE;
            for &(row, col) in pivots {
                direction[col] = -reduced[(row, variable)];
            }
            FreeDirection {
                variable,
                direction: Vector::column(direction),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m<const R: usize, const C: usize>(rows: [[i32; C]; R]) -> Matrix {
        Matrix::new(rows).unwrap()
    }

    #[test]
    fn test_rref() {
        let a = m([[1, 2, 1], [2, 4, 0], [3, 6, 1]]);
        assert_eq!(a.rref(), m([[1, 2, 0], [0, 0, 1], [0, 0, 0]]));
        let mut b = a.clone();
        b.reduce_to_rref();
        assert_eq!(b, a.rref());
    }

    #[test]
    fn test_rank() {
        assert_eq!(m([[1, 2, 1], [2, 4, 0], [3, 6, 1]]).rank(), 2);
        assert_eq!(Matrix::identity(4).rank(), 4);
        assert_eq!(Matrix::zeros(3, 2).rank(), 0);
        assert_eq!(m([[1, 2, 3]]).rank(), 1);
    }

    #[test]
    fn test_inverse() {
        let a = m([[2, 1], [1, 1]]);
        let inv = a.inverse().unwrap();
        assert_eq!(inv, m([[1, -1], [-1, 2]]));
        assert!(a.multiply(&inv).unwrap().is_identity());
    }

    #[test]
    fn test_inverse_errors() {
        assert_eq!(m([[1, 2], [2, 4]]).inverse(), Err(LinalgError::Singular));
        assert!(matches!(
            Matrix::zeros(2, 3).inverse(),
            Err(LinalgError::Domain(_))
        ));
    }

    #[test]
    fn test_solve_unique() {
        let a = m([[2, 1], [1, 1]]);
        let solution = a.solve(&Vector::column([1, 1])).unwrap().unwrap();
        assert!(solution.is_unique());
        assert_eq!(solution.particular, Vector::column([0, 1]));
    }

    #[test]
    fn test_solve_underdetermined() {
        let a = m([[1, 1]]);
        let solution = a.solve(&Vector::column([1])).unwrap().unwrap();
        assert_eq!(solution.particular, Vector::column([1, 0]));
        assert_eq!(
            solution.basis,
            vec![FreeDirection {
                variable: 1,
                direction: Vector::column([-1, 1]),
            }]
        );
        assert_eq!(solution.to_string(), "( 1, 0 )^T + x2 ( -1, 1 )^T");
    }

    #[test]
    fn test_solve_inconsistent() {
        let a = m([[1, 1], [1, 1]]);
        assert_eq!(a.solve(&Vector::column([1, 2])).unwrap(), None);
    }

    #[test]
    fn test_solve_pivot_columns_skip() {
        // Pivots sit in columns 0 and 2.
        let a = m([[1, 2, 0], [0, 0, 1]]);
        let solution = a.solve(&Vector::column([3, 4])).unwrap().unwrap();
        assert_eq!(solution.particular, Vector::column([3, 0, 4]));
        assert_eq!(solution.basis[0].variable, 1);
        assert_eq!(solution.basis[0].direction, Vector::column([-2, 1, 0]));
    }

    #[test]
    fn test_solve_shape_error() {
        let a = m([[1, 2, 3], [4, 5, 6]]);
        assert!(matches!(
            a.solve(&Vector::column([1, 2, 3])),
            Err(LinalgError::Shape(_))
        ));
    }

    #[test]
    fn test_null_space() {
        let a = m([[1, 2, 3], [2, 4, 6]]);
        let basis = a.null_space();
        assert_eq!(
            basis,
            vec![Vector::column([-2, 1, 0]), Vector::column([-3, 0, 1])]
        );
        for v in &basis {
            assert!(a.multiply_vector(v).unwrap().is_zero());
        }
        assert!(Matrix::identity(3).null_space().is_empty());
    }

    #[test]
    fn test_null_space_with_tolerance() {
        let a = m([[1, 2, 3], [2, 4, 6]]);
        assert_eq!(a.null_space_with_tolerance(1e-8), a.null_space());

        // Singular up to a perturbation far below the size of its entries.
        let nearly_singular = Matrix::new([[1000.0, 1000.0], [1000.0, 1000.000_000_1]]).unwrap();
        assert!(nearly_singular.null_space().is_empty());
        let basis = nearly_singular.null_space_with_tolerance(1e-8);
        assert_eq!(basis, vec![Vector::column([-1, 1])]);
        let image = nearly_singular.multiply_vector(&basis[0]).unwrap();
        assert!(image.values().iter().all(|v| v.abs() < 1e-6));

        assert!(Matrix::identity(3).null_space_with_tolerance(1e-8).is_empty());
        assert_eq!(Matrix::zeros(2, 2).null_space_with_tolerance(1e-8).len(), 2);
    }

    #[test]
    fn test_homogeneous_particular_is_zero() {
        let solution = m([[1, 1], [0, 0]]).solve_homogeneous();
        assert!(solution.particular.is_zero());
        assert_eq!(solution.dimension(), 1);
    }
}
