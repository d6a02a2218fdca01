//! Implementation of the `phpcs-runner run` command.
//!
//! Runs phpcs once per selected target, in order. The first failing target
//! aborts the run and no further targets execute.

use crate::cli::RunArgs;
use crate::config::{Overrides, TaskFile};
use crate::error::Result;
use crate::log::{BuildLog, TerminalLog};
use crate::phpcs::{Completion, Invocation};

/// Execute the `phpcs-runner run` command.
pub fn cmd_run(task_file: &TaskFile, args: RunArgs) -> Result<()> {
    let overrides = Overrides::from(args.overrides);
    let mut log = TerminalLog::new(overrides.verbose);

    let completed = run_targets(task_file, &args.targets, &overrides, &mut log)?;

    log.writeln("");
    log.writeln(&format!(
        "Done: {} target{} passed.",
        completed.len(),
        if completed.len() == 1 { "" } else { "s" }
    ));
    for completion in &completed {
        log.verbose_writeln(&format!(
            "  {} ({:.2}s): {}",
            completion.target,
            completion.duration.as_secs_f64(),
            completion.command
        ));
    }

    Ok(())
}

/// Set up and run each selected target.
///
/// Unknown target names are reported before anything runs.
pub fn run_targets(
    task_file: &TaskFile,
    names: &[String],
    overrides: &Overrides,
    log: &mut dyn BuildLog,
) -> Result<Vec<Completion>> {
    let selected = task_file.select(names)?;

    let mut completed = Vec::with_capacity(selected.len());
    for (name, target) in selected {
        let invocation = Invocation::setup(name, target, task_file, overrides, log)?;
        completed.push(invocation.run(log)?);
    }

    Ok(completed)
}
