//! Gaussian Elimination Walkthrough
//!
//! Prints every elementary row operation of a Gauss-Jordan reduction, then
//! solves a system, diagonalizes a matrix and finds polynomial roots.
//!
//! Run with: cargo run --example elimination_walkthrough
//! Set `RUST_LOG=cmat_linalg=trace` to see the internal log events as well.

use cmat::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), LinalgError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    println!("=== Row reduction of an augmented matrix ===\n");
    let augmented = Matrix::new([[0, 3, -6, 6], [3, -7, 8, -5], [3, -9, 12, -9]])?;
    println!("{augmented}\n");
    for step in augmented.rref_iter() {
        println!("{step}\n");
    }

    println!("=== Solving Ax = b ===\n");
    let a = Matrix::new([[1, 1]])?;
    let b = Vector::column([1]);
    match a.solve(&b)? {
        Some(solution) => println!("x = {solution}\n"),
        None => println!("no solution\n"),
    }

    println!("=== Diagonalization ===\n");
    let a = Matrix::new([[5, 4], [2, 3]])?;
    let (u, d) = a.diagonalize()?;
    println!("A =\n{a}\nU =\n{u}\nD =\n{d}\n");
    println!("A^5 =\n{}\n", a.power(5)?);

    println!("=== Eigenvalues of a rotation ===\n");
    let rotation = Matrix::new([[0, -1], [1, 0]])?;
    println!("characteristic polynomial: {}", rotation.characteristic_polynomial()?);
    for eigenvalue in rotation.eigenvalues()? {
        println!("  lambda = {eigenvalue}");
    }

    println!("\n=== Polynomial roots ===\n");
    let p = Polynomial::from_coefficients([
        Complex::from(2),
        Complex::from(-3),
        Complex::ONE,
    ]);
    let roots = p.find_roots(&RootFinderConfig::default());
    println!("roots of {p}:");
    for root in roots {
        println!("  {root}");
    }

    Ok(())
}
