//! CLI argument definitions for the MMM data-prep tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mmm-prep",
    version,
    about = "MMM data preparation - map, validate, and enrich marketing time series",
    long_about = "Prepare raw marketing data for media mix modeling.\n\n\
                  Renames client columns into the <role>__<segment> naming convention,\n\
                  validates the dataset contract, and derives event, seasonality, and\n\
                  trend features with full provenance reports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// Map, validate, and enrich a CSV time series.
    Prepare(PrepareArgs),

    /// List the allowed column role prefixes.
    Roles,
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Path to the JSON preparation config (mapping and feature steps).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for prepared data and reports
    /// (default: <INPUT_DIR>/prepared).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
