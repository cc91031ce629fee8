//! Parallel matrix operations.
//!
//! Rows of a product are independent, so they are computed with rayon's
//! work-stealing iterators. Small products stay sequential.

use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::Matrix;

/// Configuration for parallel matrix operations.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of result rows before work is split across threads.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl Matrix {
    /// Matrix-matrix multiply (parallel): C = A * B.
    ///
    /// # Errors
    ///
    /// Returns a shape error unless `self.columns() == other.rows()`.
    pub fn multiply_parallel(&self, other: &Self) -> Result<Self> {
        self.multiply_parallel_with(other, &ParallelConfig::default())
    }

    /// Like [`Matrix::multiply_parallel`], falling back to the sequential
    /// product below `config.parallel_threshold` rows.
    ///
    /// # Errors
    ///
    /// Returns a shape error unless `self.columns() == other.rows()`.
    pub fn multiply_parallel_with(&self, other: &Self, config: &ParallelConfig) -> Result<Self> {
        self.check_multiply(other)?;
        if self.rows() < config.parallel_threshold {
            return self.multiply(other);
        }

        let data = (0..self.rows())
            .into_par_iter()
            .flat_map_iter(|i| (0..other.columns()).map(move |j| self.row_times_column(other, i, j)))
            .collect();

        Ok(Matrix::from_parts(data, self.rows(), other.columns()))
    }
}

#[cfg(test)]
mod tests {
    use cmat_complex::Complex;

    use super::*;

    fn ramp(rows: usize, cols: usize) -> Matrix {
        let entries = (0..rows).map(|i| {
            (0..cols).map(move |j| {
                #[allow(clippy::cast_precision_loss)]
                let re = ((i * 7 + j * 3) % 11) as f64;
                #[allow(clippy::cast_precision_loss)]
                let im = ((i + 2 * j) % 5) as f64 - 2.0;
                Complex::from_cartesian(re, im)
            })
        });
        Matrix::new(entries).unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a = ramp(80, 12);
        let b = ramp(12, 9);
        let sequential = a.multiply(&b).unwrap();
        let parallel = a.multiply_parallel(&b).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_below_threshold() {
        let a = ramp(3, 4);
        let b = ramp(4, 2);
        let config = ParallelConfig {
            parallel_threshold: 1,
        };
        assert_eq!(
            a.multiply_parallel_with(&b, &config).unwrap(),
            a.multiply_parallel(&b).unwrap()
        );
    }

    #[test]
    fn test_shape_checked() {
        assert!(ramp(2, 3).multiply_parallel(&ramp(2, 3)).is_err());
    }
}
