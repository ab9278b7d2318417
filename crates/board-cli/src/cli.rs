//! CLI argument definitions for the import board builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "import-board",
    version,
    about = "Virtual Import Board Builder - Join MAWB and Shipper Site exports",
    long_about = "Build a virtual import board from two raw tabular exports.\n\n\
                  Validates each export against its expected column set, normalizes\n\
                  both tables, and inner-joins them on Job Number."
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
    /// Build the virtual import board from two exports.
    Build(BuildArgs),

    /// Identify which export shape a file matches.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the MAWB export CSV.
    #[arg(value_name = "MAWB_FILE")]
    pub mawb: PathBuf,

    /// Path to the Shipper Site export CSV.
    #[arg(value_name = "SHIPPER_SITE_FILE")]
    pub shipper_site: PathBuf,

    /// Output CSV path.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        default_value = "virtual_import_board.csv"
    )]
    pub output: PathBuf,

    /// Keep rows with multiple job numbers as single consolidated rows.
    ///
    /// By default each comma-separated job number becomes its own board row.
    /// With this flag the raw job number list is carried through unexpanded,
    /// which prevents those rows from matching the Shipper Site side.
    #[arg(long = "consolidate")]
    pub consolidate: bool,

    /// Validate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the export CSV to identify.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
