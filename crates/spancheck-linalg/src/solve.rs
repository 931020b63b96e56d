//! Exact solve of square systems `A x = b`.
//!
//! Inputs are validated here, then handed to nalgebra's LU factorisation
//! with partial pivoting. A zero on the diagonal of `U` is reported as
//! [`SolveError::Singular`] so callers can tell it apart from bad input.

use nalgebra::{DMatrix, DVector};

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::math::{Array1, Array2};

/// Solve `a x = b` for square, non-singular `a`.
pub fn solve(
    a: &Array2<f64>,
    b: &Array1<f64>,
    config: &SolverConfig,
) -> Result<Array1<f64>, SolveError> {
    config.validate()?;
    // Shape problems take precedence over singularity.
    check_coefficients(a)?;
    check_target(b, a.nrows())?;

    let n = a.nrows();
    let lu = DMatrix::from_row_slice(n, n, a.as_slice()).lu();

    // Exact-zero pivots are caught by `solve` below; an explicit tolerance
    // additionally rejects pivots that are small relative to the matrix.
    if config.pivot_tolerance > 0.0 {
        let threshold = config.pivot_tolerance * a.max_abs();
        if let Some(pivot_index) = lu.u().diagonal().iter().position(|d| d.abs() <= threshold) {
            log::debug!(
                "Pivot {} below threshold {:e}, treating matrix as singular",
                pivot_index,
                threshold
            );
            return Err(SolveError::Singular { pivot_index });
        }
    }

    let rhs = DVector::from_vec(b.as_slice().to_vec());
    match lu.solve(&rhs) {
        Some(x) => Ok(x.iter().copied().collect()),
        None => {
            let pivot_index = lu
                .u()
                .diagonal()
                .iter()
                .position(|d| *d == 0.0)
                .unwrap_or(0);
            log::debug!("Zero pivot in column {}", pivot_index);
            Err(SolveError::Singular { pivot_index })
        }
    }
}

fn check_coefficients(a: &Array2<f64>) -> Result<(), SolveError> {
    let (rows, cols) = a.shape();
    if !a.is_square() {
        return Err(SolveError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(SolveError::Empty);
    }
    for row in 0..rows {
        for col in 0..cols {
            if !a[(row, col)].is_finite() {
                return Err(SolveError::NonFiniteCoefficient { row, col });
            }
        }
    }
    Ok(())
}

fn check_target(b: &Array1<f64>, n: usize) -> Result<(), SolveError> {
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }
    if let Some(index) = b.iter().position(|v| !v.is_finite()) {
        return Err(SolveError::NonFiniteTarget { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Array2<f64> {
        Array2::from_rows(rows).unwrap()
    }

    #[test]
    fn solves_two_by_two() {
        let a = matrix(vec![vec![1.0, 2.0], vec![3.0, 5.0]]);
        let b = Array1::from_vec(vec![4.0, 11.0]);
        let x = solve(&a, &b, &SolverConfig::default()).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn needs_pivoting_when_leading_entry_is_zero() {
        let a = matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let b = Array1::from_vec(vec![3.0, 4.0]);
        let x = solve(&a, &b, &SolverConfig::default()).unwrap();
        assert_eq!(x.as_slice(), &[4.0, 3.0]);
    }

    #[test]
    fn zero_matrix_is_singular() {
        let a = matrix(vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
        let b = Array1::from_vec(vec![1.0, 1.0]);
        let err = solve(&a, &b, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::Singular { .. }));
    }

    #[test]
    fn exactly_dependent_rows_are_singular() {
        let a = matrix(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        let b = Array1::from_vec(vec![1.0, 2.0]);
        let err = solve(&a, &b, &SolverConfig::default()).unwrap_err();
        assert_eq!(err, SolveError::Singular { pivot_index: 1 });
    }

    #[test]
    fn relative_tolerance_rejects_rounding_residue() {
        let a = matrix(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        let b = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        let err = solve(&a, &b, &SolverConfig::new(1e-12)).unwrap_err();
        assert!(matches!(err, SolveError::Singular { .. }));
    }

    #[test]
    fn shape_errors_win_over_singularity() {
        let a = matrix(vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
        let b = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        let err = solve(&a, &b, &SolverConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SolveError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let a = matrix(vec![vec![1.0, f64::NAN], vec![0.0, 1.0]]);
        let b = Array1::from_vec(vec![1.0, 1.0]);
        assert_eq!(
            solve(&a, &b, &SolverConfig::default()).unwrap_err(),
            SolveError::NonFiniteCoefficient { row: 0, col: 1 }
        );

        let a = matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let b = Array1::from_vec(vec![1.0, f64::INFINITY]);
        assert_eq!(
            solve(&a, &b, &SolverConfig::default()).unwrap_err(),
            SolveError::NonFiniteTarget { index: 1 }
        );
    }

    #[test]
    fn empty_matrix_is_an_error() {
        let a = Array2::from_shape_vec((0, 0), Vec::new()).unwrap();
        let b = Array1::from_vec(Vec::new());
        assert_eq!(
            solve(&a, &b, &SolverConfig::default()).unwrap_err(),
            SolveError::Empty
        );
    }

    #[test]
    fn invalid_tolerance_is_reported() {
        let a = matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let b = Array1::from_vec(vec![1.0, 1.0]);
        let err = solve(&a, &b, &SolverConfig::new(-0.5)).unwrap_err();
        assert_eq!(err, SolveError::InvalidTolerance(-0.5));
    }
}
