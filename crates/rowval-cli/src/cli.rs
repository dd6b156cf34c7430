//! CLI argument definitions for rowval.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowval",
    version,
    about = "rowval - Batch validation for structured records",
    long_about = "Validate batches of structured records against per-field rules.\n\n\
                  Rules are compiled once per batch and applied across all records\n\
                  with short-circuit semantics; the batch reports per-record\n\
                  pass/fail outcomes plus an aggregate valid count."
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
    /// Validate a batch of records against a rule spec.
    Validate(ValidateArgs),

    /// List the supported rule kinds.
    Kinds,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the records file (JSON array of objects, or CSV with headers).
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Path to the JSON rule spec mapping field names to rules.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: PathBuf,

    /// Records file format (default: inferred from the file extension).
    #[arg(long = "input-format", value_enum)]
    pub input_format: Option<RecordFormatArg>,

    /// Write a machine-readable batch report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Exit with status 1 when any record fails validation.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordFormatArg {
    Json,
    Csv,
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
