//! `rxb` command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rxb_cli::commands::{check_inputs, date_rows, describe_pattern, load_recipe, read_input};
use rxb_cli::logging::init_logging;
use rxb_dates::DateExtractor;

mod cli;
mod summary;

use crate::cli::{CheckArgs, Cli, Command, DatesArgs, DatesFormatArg, PatternArgs};
use crate::summary::{print_checks, print_dates, print_pattern};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Pattern(args) => run_pattern(args),
        Command::Check(args) => run_check(args),
        Command::Dates(args) => run_dates(args),
    };
    let exit_code = match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_pattern(args: &PatternArgs) -> Result<bool> {
    let builder = load_recipe(&args.recipe)?;
    print_pattern(&describe_pattern(&builder));
    Ok(true)
}

/// Succeeds only when every input matched.
fn run_check(args: &CheckArgs) -> Result<bool> {
    let builder = load_recipe(&args.recipe)?;
    let outcomes = check_inputs(&builder, &args.inputs)?;
    print_checks(&outcomes);
    Ok(outcomes.iter().all(|outcome| outcome.is_match()))
}

/// Succeeds only when every match is a valid date.
fn run_dates(args: &DatesArgs) -> Result<bool> {
    let text = read_input(args.file.as_deref())?;
    let extractor = if args.no_padding {
        DateExtractor::without_padding()
    } else {
        DateExtractor::default()
    };
    let rows = date_rows(&text, extractor);
    match args.format {
        DatesFormatArg::Table => print_dates(&rows),
        DatesFormatArg::Json => {
            let json = serde_json::to_string_pretty(&rows).context("serialize dates")?;
            println!("{json}");
        }
    }
    Ok(rows.iter().all(|row| row.is_valid()))
}
