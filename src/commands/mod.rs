//! Command implementations for phpcs-runner.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod print_command;
mod run;
mod targets;


use crate::cli::{Cli, Command};
use crate::config::TaskFile;
use crate::error::Result;

pub use print_command::cmd_command;
pub use run::cmd_run;
pub use targets::cmd_targets;

/// Dispatch a command to its implementation.
///
/// The task file is loaded once here and handed to the handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let task_file = TaskFile::load(&cli.config)?;

    match cli.command {
        Command::Run(args) => cmd_run(&task_file, args),
        Command::Command(args) => cmd_command(&task_file, args),
        Command::Targets => cmd_targets(&task_file),
    }
}
