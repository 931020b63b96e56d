#![doc = include_str!("../README.md")]
pub mod config;
pub mod error;
pub mod math;
pub mod roster;
pub mod solve;
pub mod span;

pub use config::SolverConfig;
pub use error::{RosterError, SolveError, SpanError};
pub use math::{Array1, Array2, ShapeError};
pub use span::{check_span, check_span_with, SpanChecker, SpanOutcome};
