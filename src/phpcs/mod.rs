//! PHP_CodeSniffer command builder and runner.
//!
//! - `command`: pure construction of the phpcs command line from options
//! - `invocation`: per-target setup (option resolution, logging) and run

mod command;
mod invocation;

#[cfg(test)]
mod tests;

pub use command::{CommandLine, build_command, display_tokens};
pub use invocation::{Completion, Invocation};
