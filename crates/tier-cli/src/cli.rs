//! CLI argument definitions for the tier analysis.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tier-analysis",
    version,
    about = "Tier analysis of competitive creature data",
    long_about = "Load the creature, move, and attribute tables, normalize tiers,\n\
                  compute base stat totals and tier ranks, join the legendary\n\
                  attributes, and print grouped statistics."
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

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline over a data folder and print the report.
    Report(ReportArgs),

    /// List the canonical tiers and the sub-tier rewrites.
    Tiers,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Folder holding pokemon-data.csv, move-data.csv and pokemon.csv.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Creature table to use instead of <DATA_DIR>/pokemon-data.csv.
    #[arg(long = "creatures", value_name = "PATH")]
    pub creatures: Option<PathBuf>,

    /// Move table to use instead of <DATA_DIR>/move-data.csv.
    #[arg(long = "moves", value_name = "PATH")]
    pub moves: Option<PathBuf>,

    /// Attribute table to use instead of <DATA_DIR>/pokemon.csv.
    #[arg(long = "attributes", value_name = "PATH")]
    pub attributes: Option<PathBuf>,

    /// Number of joined rows to preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 10)]
    pub preview_rows: usize,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
