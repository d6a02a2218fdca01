//! Implementation of the `phpcs-runner targets` command.

use crate::config::TaskFile;
use crate::error::Result;
use crate::path::normalize;

/// Execute the `phpcs-runner targets` command.
///
/// Prints one `name<TAB>dir` line per target, in name order.
pub fn cmd_targets(task_file: &TaskFile) -> Result<()> {
    if task_file.targets.is_empty() {
        println!("No targets configured.");
        return Ok(());
    }

    for (name, target) in &task_file.targets {
        println!("{}\t{}", name, normalize(&target.dir));
    }

    Ok(())
}
