use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Only exactly-zero pivots are rejected unless a tolerance is configured.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 0.0;

/// Tunables for the linear solve.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// When positive, a pivot also counts as zero once
    /// `|pivot| <= pivot_tolerance * max|a_ij|`. `0.0` only rejects exact zeros.
    pub pivot_tolerance: f64,
}

impl SolverConfig {
    pub fn new(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(SolveError::InvalidTolerance(self.pivot_tolerance));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}
