//! `spancheck check`: load inputs, run the span check, print the answer.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use csv::{ReaderBuilder, Terminator, Trim};
use serde::{Deserialize, Serialize};

use spancheck_linalg::config::SolverConfig;
use spancheck_linalg::math::{Array1, Array2};
use spancheck_linalg::span::{SpanChecker, SpanOutcome};

/// Inputs of a single span check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// Nested lists of coefficients, read as rows unless `columns` is set.
    pub coefficients: Vec<Vec<f64>>,
    pub target: Vec<f64>,
    /// Treat each entry of `coefficients` as one candidate vector (a column).
    pub columns: bool,
    pub solver: SolverConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            coefficients: vec![vec![1.0, 2.0], vec![3.0, 5.0]],
            target: vec![4.0, 11.0],
            columns: false,
            solver: SolverConfig::default(),
        }
    }
}

impl CheckConfig {
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_check_config(path)?,
            None => CheckConfig::default(),
        };

        // Apply CLI overrides
        if let Some(matrix) = matches.get_one::<String>("matrix") {
            config.coefficients = parse_matrix(matrix)?;
        }

        if let Some(target) = matches.get_one::<String>("target") {
            config.target = parse_vector(target)?;
        }

        if matches.get_flag("columns") {
            config.columns = true;
        }

        if let Some(tolerance) = matches.get_one::<f64>("tolerance") {
            config.solver.pivot_tolerance = *tolerance;
        }

        Ok(config)
    }

    /// Assemble the coefficient matrix and target vector.
    pub fn inputs(&self) -> Result<(Array2<f64>, Array1<f64>)> {
        let coefficients = if self.columns {
            Array2::from_columns(self.coefficients.clone())
        } else {
            Array2::from_rows(self.coefficients.clone())
        }
        .context("Coefficients do not form a matrix")?;
        Ok((coefficients, Array1::from_vec(self.target.clone())))
    }
}

/// Load a check configuration from a JSON file.
pub fn load_check_config<P: AsRef<Path>>(path: P) -> Result<CheckConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CheckConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Parse `"1,2;3,5"` into rows. Rows are separated by `;`, values by `,`.
pub fn parse_matrix(input: &str) -> Result<Vec<Vec<f64>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .terminator(Terminator::Any(b';'))
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read matrix row {}", idx))?;
        let row = record
            .iter()
            .map(parse_value)
            .collect::<Result<Vec<f64>>>()
            .with_context(|| format!("Invalid matrix row {}", idx))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Parse `"4,11"` into a vector.
pub fn parse_vector(input: &str) -> Result<Vec<f64>> {
    let mut rows = parse_matrix(input)?;
    match rows.len() {
        0 => Ok(Vec::new()),
        1 => Ok(rows.remove(0)),
        n => anyhow::bail!("Expected a single row of values, got {} rows", n),
    }
}

fn parse_value(field: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .with_context(|| format!("{:?} is not a number", field))
}

/// Everything needed to print the result of one check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub coefficients: Array2<f64>,
    pub target: Array1<f64>,
    pub outcome: SpanOutcome,
}

impl CheckReport {
    pub fn residual(&self) -> Option<f64> {
        self.outcome
            .max_abs_residual(&self.coefficients, &self.target)
    }
}

/// Run the span check described by `config`.
///
/// A singular matrix is a successful run with [`SpanOutcome::NoUniqueSolution`].
pub fn run_check(config: &CheckConfig) -> Result<CheckReport> {
    let (coefficients, target) = config.inputs()?;
    log::info!(
        "Checking span of {} candidate vectors",
        coefficients.ncols()
    );
    let outcome = SpanChecker::new(config.solver.clone()).check(&coefficients, &target)?;
    log::info!("Within span: {}", outcome.is_within_span());
    Ok(CheckReport {
        coefficients,
        target,
        outcome,
    })
}

pub fn write_check_report<W: Write>(report: &CheckReport, verify: bool, out: &mut W) -> Result<()> {
    writeln!(out, "Matrix:\n{}", report.coefficients)?;
    writeln!(out, "Vector:\n{}", report.target)?;
    writeln!(out)?;
    writeln!(out, "{}", report.outcome)?;
    if verify {
        if let Some(residual) = report.residual() {
            writeln!(out, "Max abs residual: {:e}", residual)?;
        }
    }
    Ok(())
}
