//! CLI argument parsing for phpcs-runner.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::{DEFAULT_TASK_FILE, Overrides};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// phpcs-runner: run PHP_CodeSniffer over the targets of a task file.
///
/// Options are layered: built-in defaults, the task file's shared
/// `options`, each target's `options`, then the flags given here.
#[derive(Parser, Debug)]
#[command(name = "phpcs-runner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file.
    #[arg(short, long, global = true, default_value = DEFAULT_TASK_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for phpcs-runner.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run phpcs for the given targets (all targets if none are named).
    ///
    /// Targets run one after another; the first failure aborts the run.
    Run(RunArgs),

    /// Print the phpcs command line for each target without running it.
    Command(CommandArgs),

    /// List the targets defined in the task file.
    Targets,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Targets to run, in order.
    pub targets: Vec<String>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for the `command` command.
#[derive(Parser, Debug)]
pub struct CommandArgs {
    /// Targets to print, in order.
    pub targets: Vec<String>,

    /// Print JSON objects instead of command lines.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// phpcs options that take precedence over the task file.
#[derive(Args, Debug, Default, Clone)]
pub struct OverrideArgs {
    /// Comma separated list of file extensions to check.
    #[arg(long)]
    pub extensions: Option<String>,

    /// Comma separated list of patterns to ignore files and directories.
    #[arg(long)]
    pub ignore: Option<String>,

    /// Minimum severity required to display an error or warning.
    #[arg(long)]
    pub severity: Option<u32>,

    /// Minimum severity required to display an error.
    #[arg(long)]
    pub error_severity: Option<u32>,

    /// Minimum severity required to display a warning.
    #[arg(long)]
    pub warning_severity: Option<u32>,

    /// Coding standard to use.
    #[arg(long)]
    pub standard: Option<String>,

    /// Report type to print (full, summary, checkstyle, ...).
    #[arg(long)]
    pub report: Option<String>,

    /// Write the report to this file.
    #[arg(long)]
    pub report_file: Option<String>,

    /// Pass -v to phpcs and show the executed command.
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<OverrideArgs> for Overrides {
    fn from(args: OverrideArgs) -> Self {
        Overrides {
            extensions: args.extensions,
            ignore: args.ignore,
            severity: args.severity,
            error_severity: args.error_severity,
            warning_severity: args.warning_severity,
            standard: args.standard,
            report: args.report,
            report_file: args.report_file,
            verbose: args.verbose,
        }
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
