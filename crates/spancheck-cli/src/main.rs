use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use spancheck_cli::commands::check::{run_check, write_check_report, CheckConfig};
use spancheck_cli::commands::remind::{write_reminders, RemindInput};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SPANCHECK_LOG", "error"))
        .init();

    let matches = Command::new("spancheck")
        .version(clap::crate_version!())
        .about("Check whether a vector lies in the span of a set of vectors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Solve for the scalars that combine the candidate vectors into the target")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON file with `coefficients`, `target` and `solver`")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("matrix")
                        .short('m')
                        .long("matrix")
                        .help(
                            "Coefficient matrix, rows separated by ';' and values by ','. \
                             Overrides the coefficients in the configuration file.",
                        )
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("target")
                        .short('t')
                        .long("target")
                        .help(
                            "Target vector, values separated by ','. \
                             Overrides the target in the configuration file.",
                        )
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("columns")
                        .long("columns")
                        .help("Read each ';'-separated group as a candidate vector (column) instead of a row.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("tolerance")
                        .long("tolerance")
                        .help("Relative pivot tolerance below which the matrix is treated as singular.")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("verify")
                        .long("verify")
                        .help("Print the largest absolute residual of the solved combination.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("remind")
                .about("Print a graduation reminder for each student")
                .arg(
                    Arg::new("names")
                        .long("names")
                        .help("Student names separated by comma. Prompted for when omitted.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("assignments")
                        .long("assignments")
                        .help("Missing assignments per student, separated by comma.")
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("grades")
                        .long("grades")
                        .help("Current grade per student, separated by comma.")
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", sub_m)) => handle_check(sub_m),
        Some(("remind", sub_m)) => handle_remind(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_check(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    let config = CheckConfig::from_arguments(config_path, matches)?;

    if config_path.is_none() && !matches.contains_id("matrix") && !matches.contains_id("target") {
        eprintln!("[spancheck] No config file provided; using defaults.");
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        eprintln!("[spancheck] Default config:\n{}", default_json);
    }

    let report = match run_check(&config) {
        Ok(report) => report,
        Err(e) => {
            log::debug!("Span check failed: {:?}", e);
            eprintln!("[spancheck] {:#}", e);
            std::process::exit(1)
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_check_report(&report, matches.get_flag("verify"), &mut out)?;
    out.flush()?;
    Ok(())
}

fn handle_remind(matches: &ArgMatches) -> Result<()> {
    let input = RemindInput {
        names: matches.get_one::<String>("names").cloned(),
        assignments: matches.get_one::<String>("assignments").cloned(),
        grades: matches.get_one::<String>("grades").cloned(),
    };

    let stdin = io::stdin();
    let roster = match input.resolve(&mut stdin.lock(), &mut io::stderr()) {
        Ok(roster) => roster,
        Err(e) => {
            log::debug!("Reminder generation failed: {:?}", e);
            eprintln!("[spancheck] Reminder generation failed: {:#}", e);
            std::process::exit(1)
        }
    };
    if roster.is_empty() {
        log::warn!("No students given, nothing to write");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reminders(&roster, &mut out)?;
    out.flush()?;
    Ok(())
}
