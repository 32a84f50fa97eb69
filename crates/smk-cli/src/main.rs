//! `smk` command-line driver.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use smk_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    Outcome, run_dashboard, run_doctor, run_preview, run_procedures, run_requirements,
    run_stats, run_validate,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(2);
    }

    let standards_dir = cli.standards_dir.as_deref();
    let outcome = match &cli.command {
        Command::Validate(args) => run_validate(args, standards_dir),
        Command::Dashboard(args) => run_dashboard(args, standards_dir),
        Command::Stats(args) => run_stats(args, standards_dir),
        Command::Procedures(args) => run_procedures(args, standards_dir),
        Command::Preview(args) => run_preview(args, standards_dir),
        Command::Requirements(args) => run_requirements(args, standards_dir),
        Command::Doctor => run_doctor(standards_dir),
    };
    let exit_code = match outcome {
        Ok(Outcome::Success) => 0,
        Ok(Outcome::ValidationFailed) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            2
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
