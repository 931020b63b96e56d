//! Integration tests for check configuration loading and reporting.

use std::io::Write;

use spancheck_cli::commands::check::{load_check_config, run_check, CheckConfig};
use spancheck_linalg::span::SpanOutcome;

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_full_config() {
    let file = write_config(
        r#"{
            "coefficients": [[1.0, 2.0], [2.0, 4.0]],
            "target": [1.0, 2.0],
            "columns": false,
            "solver": { "pivot_tolerance": 0.0 }
        }"#,
    );
    let config = load_check_config(file.path()).unwrap();
    assert_eq!(config.solver.pivot_tolerance, 0.0);

    let report = run_check(&config).unwrap();
    assert_eq!(report.outcome, SpanOutcome::NoUniqueSolution);
}

#[test]
fn missing_fields_use_defaults() {
    let file = write_config(r#"{ "target": [7.0, -3.0] }"#);
    let config = load_check_config(file.path()).unwrap();
    assert_eq!(config.coefficients, CheckConfig::default().coefficients);
    assert_eq!(config.target, vec![7.0, -3.0]);
}

#[test]
fn columns_config_transposes_input() {
    let file = write_config(
        r#"{ "coefficients": [[1.0, 3.0], [2.0, 5.0]], "target": [4.0, 11.0], "columns": true }"#,
    );
    let config = load_check_config(file.path()).unwrap();
    let report = run_check(&config).unwrap();
    let scalars = report.outcome.scalars().unwrap();
    assert!((scalars[0] - 2.0).abs() < 1e-9);
    assert!((scalars[1] - 1.0).abs() < 1e-9);
}

#[test]
fn malformed_json_is_an_error() {
    let file = write_config("{ not json");
    let err = load_check_config(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn non_square_config_is_an_error() {
    let config = CheckConfig {
        coefficients: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        target: vec![1.0, 2.0],
        ..CheckConfig::default()
    };
    let err = run_check(&config).unwrap_err();
    assert!(format!("{:#}", err).contains("Unexpected computation error"));
}
