//! CLI argument definitions for `rxb`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rxb_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "rxb",
    version,
    about = "Inspect recipe-built patterns and extract dates from text",
    long_about = "Inspect patterns saved as JSON recipes and extract loosely formatted \
                  date/times from free text.\n\n\
                  Recipes are the records written by PatternBuilder::to_json."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging settings. `--log-level` beats `-v/-q`; either one disables the
    /// `RUST_LOG` override.
    pub fn log_config(&self) -> LogConfig {
        let level = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let explicit = self.verbosity.is_present() || self.log_level.is_some();
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            use_env_filter: !explicit,
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
        .with_level(level)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a recipe and print its pattern and flags.
    Pattern(PatternArgs),

    /// Test inputs against the pattern of a recipe.
    Check(CheckArgs),

    /// Extract date/times from a file or stdin.
    Dates(DatesArgs),
}

#[derive(Parser)]
pub struct PatternArgs {
    /// Path to a JSON recipe.
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to a JSON recipe.
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,

    /// Strings to test.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,
}

#[derive(Parser)]
pub struct DatesArgs {
    /// Text file to scan (reads stdin when omitted).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: DatesFormatArg,

    /// Leave single-digit fields unpadded.
    #[arg(long = "no-padding")]
    pub no_padding: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DatesFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
