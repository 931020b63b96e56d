use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Failures of the square linear solve.
///
/// `Singular` is the only variant that describes a well-formed system; the
/// rest mean the inputs could not be solved at all.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// `U` has a zero (or, with a tolerance, negligible) pivot in this column.
    Singular { pivot_index: usize },
    NotSquare { rows: usize, cols: usize },
    DimensionMismatch { expected: usize, found: usize },
    Empty,
    NonFiniteCoefficient { row: usize, col: usize },
    NonFiniteTarget { index: usize },
    InvalidTolerance(f64),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Singular { pivot_index } => {
                write!(f, "Singular matrix (zero pivot in column {})", pivot_index)
            }
            SolveError::NotSquare { rows, cols } => write!(
                f,
                "Coefficient matrix must be square, got {} rows and {} columns",
                rows, cols
            ),
            SolveError::DimensionMismatch { expected, found } => write!(
                f,
                "Target vector has length {} but the matrix has {} rows",
                found, expected
            ),
            SolveError::Empty => write!(f, "Coefficient matrix is empty"),
            SolveError::NonFiniteCoefficient { row, col } => {
                write!(f, "Coefficient at ({}, {}) is not finite", row, col)
            }
            SolveError::NonFiniteTarget { index } => {
                write!(f, "Target entry {} is not finite", index)
            }
            SolveError::InvalidTolerance(tol) => {
                write!(f, "Pivot tolerance must be finite and non-negative, got {}", tol)
            }
        }
    }
}

impl Error for SolveError {}

/// Failures of a span check that are not a "no unique solution" answer.
#[derive(Debug, Clone, PartialEq)]
pub enum SpanError {
    /// The solve failed for a reason other than singularity.
    Computation(SolveError),
    /// The spanning vectors could not be assembled into a matrix.
    Shape(ShapeError),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpanError::Computation(e) => write!(f, "Unexpected computation error: {}", e),
            SpanError::Shape(e) => write!(f, "Unexpected computation error: {}", e),
        }
    }
}

impl Error for SpanError {}

impl From<SolveError> for SpanError {
    fn from(e: SolveError) -> Self {
        SpanError::Computation(e)
    }
}

impl From<ShapeError> for SpanError {
    fn from(e: ShapeError) -> Self {
        SpanError::Shape(e)
    }
}

/// Failures while reading the comma-separated student lists.
#[derive(Debug)]
pub enum RosterError {
    LengthMismatch {
        names: usize,
        assignments: usize,
        grades: usize,
    },
    InvalidNumber { field: &'static str, value: String },
    /// The potential grade does not fit in an `i64`.
    GradeOverflow {
        name: String,
        assignments: i64,
        grade: i64,
    },
    Csv(csv::Error),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RosterError::LengthMismatch {
                names,
                assignments,
                grades,
            } => write!(
                f,
                "Expected the same number of entries, got {} names, {} assignments and {} grades",
                names, assignments, grades
            ),
            RosterError::InvalidNumber { field, value } => {
                write!(f, "Invalid {} value: {:?} is not a whole number", field, value)
            }
            RosterError::GradeOverflow {
                name,
                assignments,
                grade,
            } => write!(
                f,
                "Potential grade for {} is out of range ({} assignments, grade {})",
                name, assignments, grade
            ),
            RosterError::Csv(e) => write!(f, "Failed to read list: {}", e),
        }
    }
}

impl Error for RosterError {}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}
