//! Small dense containers used by the solver.
//!
//! `Array2` stores a matrix row-major; `Array1` is a plain vector. The solver
//! converts them to nalgebra types at the boundary.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
