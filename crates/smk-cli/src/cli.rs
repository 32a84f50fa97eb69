//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "smk",
    version,
    about = "SMK specialization progress and compliance checks",
    long_about = "Compute progress statistics for a medical specialization and validate it\n\
                  against the old or new SMK registry rules before export.\n\n\
                  Input is a JSON data bundle exported by the owning application."
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

    /// Log output format.
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

    /// Load requirement data from this standards directory instead of the
    /// built-in copy. Every file is checked against the manifest.
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every compliance check and print the result.
    Validate(BundleArgs),

    /// Dashboard overview for the current module.
    Dashboard(BundleArgs),

    /// Full specialization statistics.
    Stats(BundleArgs),

    /// Procedure progress for one module, or for all modules.
    Procedures(ProceduresArgs),

    /// Counts and warnings an export would carry.
    Preview(BundleArgs),

    /// Show the catalog entry used for a specialization.
    Requirements(RequirementsArgs),

    /// Verify the standards manifest and print a JSON report.
    Doctor,
}

#[derive(Args)]
pub struct BundleArgs {
    /// JSON data bundle for one specialization.
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,

    /// Caller's user id; the bundle's owner must match.
    #[arg(long = "user", value_name = "ID")]
    pub user: Option<u64>,

    /// Evaluate as of this date (YYYY-MM-DD, default: today).
    #[arg(long = "today", value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ProceduresArgs {
    #[command(flatten)]
    pub bundle: BundleArgs,

    /// Restrict to one module id.
    #[arg(long = "module", value_name = "ID")]
    pub module: Option<u64>,
}

#[derive(Args)]
pub struct RequirementsArgs {
    /// Specialization name or catalog key.
    #[arg(value_name = "SPECIALIZATION")]
    pub specialization: String,

    #[arg(long = "smk-version", value_enum, default_value = "new")]
    pub smk_version: SmkVersionArg,

    /// Print the requirement set as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SmkVersionArg {
    Old,
    New,
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
