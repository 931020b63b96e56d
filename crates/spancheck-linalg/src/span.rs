//! Span membership via a unique linear combination.
//!
//! A target vector is reported as within the span of the matrix columns when
//! `A x = b` has a unique solution. A singular matrix is reported as
//! [`SpanOutcome::NoUniqueSolution`] even when the target lies in the
//! (rank-deficient) column space; that case is not distinguished.

use std::fmt;

use crate::config::SolverConfig;
use crate::error::{SolveError, SpanError};
use crate::math::{Array1, Array2};
use crate::solve::solve;

/// Answer of a span check.
#[derive(Debug, Clone, PartialEq)]
pub enum SpanOutcome {
    /// `scalars[i]` weights column `i`; the weighted sum reproduces the target.
    WithinSpan { scalars: Array1<f64> },
    /// The system has no unique solution.
    NoUniqueSolution,
}

impl SpanOutcome {
    pub fn is_within_span(&self) -> bool {
        matches!(self, SpanOutcome::WithinSpan { .. })
    }

    pub fn scalars(&self) -> Option<&Array1<f64>> {
        match self {
            SpanOutcome::WithinSpan { scalars } => Some(scalars),
            SpanOutcome::NoUniqueSolution => None,
        }
    }

    /// `max_i |(A x - b)_i|` for a within-span result.
    ///
    /// `None` for `NoUniqueSolution` or when the shapes do not line up.
    pub fn max_abs_residual(&self, coefficients: &Array2<f64>, target: &Array1<f64>) -> Option<f64> {
        let scalars = self.scalars()?;
        if coefficients.ncols() != scalars.len() || coefficients.nrows() != target.len() {
            return None;
        }
        coefficients.dot_vec(scalars).max_abs_diff(target)
    }
}

impl fmt::Display for SpanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanOutcome::WithinSpan { scalars } => {
                write!(f, "Vector is within span.\nScalars in s: {}", scalars)
            }
            SpanOutcome::NoUniqueSolution => {
                write!(f, "No single solution\nVector is NOT within span")
            }
        }
    }
}

/// Runs span checks with a fixed solver configuration.
#[derive(Debug, Clone, Default)]
pub struct SpanChecker {
    config: SolverConfig,
}

impl SpanChecker {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Check whether `target` is a unique combination of the columns of `coefficients`.
    pub fn check(
        &self,
        coefficients: &Array2<f64>,
        target: &Array1<f64>,
    ) -> Result<SpanOutcome, SpanError> {
        match solve(coefficients, target, &self.config) {
            Ok(scalars) => {
                log::debug!("Target is within span, scalars = {}", scalars);
                Ok(SpanOutcome::WithinSpan { scalars })
            }
            Err(SolveError::Singular { pivot_index }) => {
                log::debug!(
                    "Singular coefficient matrix (column {}), no unique combination",
                    pivot_index
                );
                Ok(SpanOutcome::NoUniqueSolution)
            }
            Err(e) => {
                log::debug!("Span check failed: {}", e);
                Err(SpanError::Computation(e))
            }
        }
    }

    /// Same as [`check`](Self::check) with the candidate vectors given one per entry.
    pub fn check_vectors(
        &self,
        vectors: Vec<Vec<f64>>,
        target: Vec<f64>,
    ) -> Result<SpanOutcome, SpanError> {
        let coefficients = Array2::from_columns(vectors)?;
        self.check(&coefficients, &Array1::from_vec(target))
    }
}

/// [`SpanChecker::check`] with the default solver configuration.
pub fn check_span(
    coefficients: &Array2<f64>,
    target: &Array1<f64>,
) -> Result<SpanOutcome, SpanError> {
    SpanChecker::default().check(coefficients, target)
}

/// [`SpanChecker::check`] with an explicit solver configuration.
pub fn check_span_with(
    config: &SolverConfig,
    coefficients: &Array2<f64>,
    target: &Array1<f64>,
) -> Result<SpanOutcome, SpanError> {
    SpanChecker::new(config.clone()).check(coefficients, target)
}
