//! Property-based tests for elimination and the results derived from it.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cmat_complex::Complex;

    use crate::matrix::Matrix;
    use crate::parallel::ParallelConfig;
    use crate::vector::Vector;

    fn entry() -> impl Strategy<Value = i32> {
        -4i32..5
    }

    // Integer matrices up to 4x4
    fn small_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(proptest::collection::vec(entry(), cols), rows)
                .prop_map(|rows| Matrix::new(rows).unwrap())
        })
    }

    fn square_matrix(n: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(proptest::collection::vec(entry(), n), n)
            .prop_map(|rows| Matrix::new(rows).unwrap())
    }

    // Symmetric integer matrices of size 2 or 3
    fn symmetric_matrix() -> impl Strategy<Value = Matrix> {
        (2usize..=3).prop_flat_map(|n| {
            proptest::collection::vec(-3i32..=3, n * n).prop_map(move |values| {
                let rows = (0..n).map(|i| {
                    let values = values.clone();
                    (0..n).map(move |j| values[i.min(j) * n + i.max(j)])
                });
                Matrix::new(rows).unwrap()
            })
        })
    }

    // Integer matrices up to 3x3 with entries in -3..=3
    fn svd_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=3, 1usize..=3).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(proptest::collection::vec(-3i32..=3, cols), rows)
                .prop_map(|rows| Matrix::new(rows).unwrap())
        })
    }

    // A matrix with a vector that fits its column count
    fn matrix_and_vector() -> impl Strategy<Value = (Matrix, Vector)> {
        small_matrix().prop_flat_map(|a| {
            let cols = a.columns();
            proptest::collection::vec(entry(), cols).prop_map(move |x| (a.clone(), Vector::column(x)))
        })
    }

    proptest! {
        #[test]
        fn elimination_replay_matches_snapshots(a in small_matrix()) {
            let mut replay = a.clone();
            let mut last = None;
            for step in a.rref_iter() {
                replay.apply_operation(&step.operation);
                prop_assert_eq!(&replay, &step.matrix);
                last = Some(step.matrix);
            }
            prop_assert_eq!(last, Some(a.rref()));
        }

        #[test]
        fn rref_is_idempotent(a in small_matrix()) {
            let reduced = a.rref();
            prop_assert_eq!(reduced.rref(), reduced.clone());
            prop_assert_eq!(reduced.rank(), a.rank());
        }

        #[test]
        fn rank_nullity(a in small_matrix()) {
            prop_assert_eq!(a.rank() + a.null_space().len(), a.columns());
        }

        #[test]
        fn null_space_is_annihilated(a in small_matrix()) {
            for v in a.null_space() {
                prop_assert!(a.multiply_vector(&v).unwrap().is_zero());
            }
        }

        #[test]
        fn consistent_systems_are_solved((a, x) in matrix_and_vector()) {
            let b = a.multiply_vector(&x).unwrap();
            let solution = a.solve(&b).unwrap();
            prop_assert!(solution.is_some());
            let solution = solution.unwrap();
            prop_assert_eq!(a.multiply_vector(&solution.particular).unwrap(), b);
            prop_assert_eq!(solution.dimension(), a.columns() - a.rank());
        }

        #[test]
        fn inverse_iff_nonzero_determinant(a in (1usize..=3).prop_flat_map(square_matrix)) {
            let det = a.determinant().unwrap();
            match a.inverse() {
                Ok(inv) => {
                    prop_assert!(!det.is_zero());
                    prop_assert!(inv.multiply(&a).unwrap().is_identity());
                    prop_assert!(a.multiply(&inv).unwrap().is_identity());
                }
                Err(_) => prop_assert!(det.is_zero()),
            }
        }

        #[test]
        fn determinant_is_multiplicative(a in square_matrix(3), b in square_matrix(3)) {
            let product = a.multiply(&b).unwrap().determinant().unwrap();
            let expected = a.determinant().unwrap() * b.determinant().unwrap();
            prop_assert_eq!(product, expected);
        }

        #[test]
        fn determinant_of_transpose(a in square_matrix(3)) {
            prop_assert_eq!(a.transpose().determinant().unwrap(), a.determinant().unwrap());
        }

        #[test]
        fn characteristic_polynomial_ends_in_determinant(a in square_matrix(3)) {
            // det(xI - A) at x = 0 is det(-A) = -det(A) for odd n
            let at_zero = a.characteristic_polynomial().unwrap().coefficient(0);
            prop_assert_eq!(at_zero, -a.determinant().unwrap());
        }

        #[test]
        fn parallel_product_matches_sequential(a in square_matrix(4), b in square_matrix(4)) {
            let config = ParallelConfig { parallel_threshold: 0 };
            prop_assert_eq!(
                a.multiply_parallel_with(&b, &config).unwrap(),
                a.multiply(&b).unwrap()
            );
        }

        #[test]
        fn trace_is_sum_of_diagonal(a in square_matrix(4)) {
            let expected: Complex = (0..4).map(|i| a[(i, i)]).sum();
            prop_assert_eq!(a.trace().unwrap(), expected);
        }

        #[test]
        fn symmetric_matrices_diagonalize(a in symmetric_matrix()) {
            let (u, d) = a.diagonalize().unwrap();
            prop_assert!(d.is_diagonal());
            let rebuilt = u.multiply(&d).unwrap().multiply(&u.inverse().unwrap()).unwrap();
            prop_assert!(rebuilt.approx_eq(&a, 1e-6), "{} rebuilt as {}", a, rebuilt);
        }

        #[test]
        fn svd_reconstructs(a in svd_matrix()) {
            let (w, sigma, v_h) = a.svd().unwrap();
            let rebuilt = w.multiply(&sigma).unwrap().multiply(&v_h).unwrap();
            prop_assert!(rebuilt.approx_eq(&a, 1e-6), "{} rebuilt as {}", a, rebuilt);

            let singular_values: Vec<Complex> = (0..sigma.rows().min(sigma.columns()))
                .map(|i| sigma[(i, i)])
                .collect();
            prop_assert!(singular_values.iter().all(|s| s.is_real() && s.real() >= 0.0));
            prop_assert!(singular_values.windows(2).all(|pair| pair[0].real() >= pair[1].real()));
            let off_diagonal_zero = (0..sigma.rows())
                .all(|i| (0..sigma.columns()).all(|j| i == j || sigma[(i, j)].is_zero()));
            prop_assert!(off_diagonal_zero);
        }
    }
}
