//! Implementation of the `phpcs-runner command` command.
//!
//! Performs the setup phase for each target and prints the resulting
//! phpcs command line instead of executing it.

use crate::cli::CommandArgs;
use crate::config::{Overrides, PhpcsOptions, TaskFile};
use crate::error::{Result, RunnerError};
use crate::log::BuildLog;
use crate::phpcs::{Invocation, display_tokens};
use serde::Serialize;

/// Machine-readable description of one target's phpcs command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub target: String,
    pub dir: String,
    pub argv: Vec<String>,
    pub options: PhpcsOptions,
}

/// Log that discards setup messages; `command` only prints the result.
struct SilentLog;

impl BuildLog for SilentLog {
    fn write(&mut self, _bytes: &[u8]) {}
    fn writeln(&mut self, _line: &str) {}
    fn verbose_writeln(&mut self, _line: &str) {}
}

/// Execute the `phpcs-runner command` command.
pub fn cmd_command(task_file: &TaskFile, args: CommandArgs) -> Result<()> {
    let overrides = Overrides::from(args.overrides);
    let reports = describe_targets(task_file, &args.targets, &overrides)?;

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(|e| {
            RunnerError::InternalError(format!("failed to serialize commands to JSON: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    for report in &reports {
        println!("{}", display_tokens(&report.argv));
    }

    Ok(())
}

/// Build the command line for each selected target without running it.
pub fn describe_targets(
    task_file: &TaskFile,
    names: &[String],
    overrides: &Overrides,
) -> Result<Vec<CommandReport>> {
    let selected = task_file.select(names)?;

    selected
        .into_iter()
        .map(|(name, target)| {
            let invocation =
                Invocation::setup(name, target, task_file, overrides, &mut SilentLog)?;
            Ok(CommandReport {
                target: invocation.target().to_string(),
                dir: invocation.dir().to_string(),
                argv: invocation.command().tokens().to_vec(),
                options: invocation.options().clone(),
            })
        })
        .collect()
}
