//! Setup and run of a single phpcs invocation.
//!
//! `Invocation::setup` resolves options and builds the command line for one
//! target; `Invocation::run` consumes it, so each command is executed at
//! most once.

use super::command::{CommandLine, build_command};
use crate::config::{Overrides, PhpcsOptions, Target, TaskFile};
use crate::error::{Result, RunnerError};
use crate::log::BuildLog;
use crate::path::normalize;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A prepared phpcs run for one target.
#[derive(Debug, Clone)]
pub struct Invocation {
    target: String,
    dir: String,
    options: PhpcsOptions,
    command: CommandLine,
}

/// Signal returned when a phpcs run finished successfully.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Name of the target that ran.
    pub target: String,
    /// The command that was executed (for logging).
    pub command: String,
    /// Duration of execution.
    pub duration: Duration,
}

impl Invocation {
    /// Prepare the phpcs run for `target`.
    ///
    /// Logs the starting line, and the exact command in verbose mode.
    /// Fails only when `bin` cannot be parsed.
    pub fn setup(
        name: &str,
        target: &Target,
        task_file: &TaskFile,
        overrides: &Overrides,
        log: &mut dyn BuildLog,
    ) -> Result<Self> {
        let dir = normalize(&target.dir);
        let options = task_file.resolve_options(target, overrides);
        let command = build_command(&options, &dir)?;

        log.writeln(&format!("Starting phpcs (target: {}) in {}", name, dir));
        log.verbose_writeln(&format!("Exec: {}", command));

        Ok(Self {
            target: name.to_string(),
            dir,
            options,
            command,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Normalized directory handed to phpcs.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn options(&self) -> &PhpcsOptions {
        &self.options
    }

    pub fn command(&self) -> &CommandLine {
        &self.command
    }

    /// Execute phpcs, forwarding its stdout bytes to `log` as they arrive.
    ///
    /// stderr goes straight to the terminal. A launch failure or a
    /// non-zero exit status is returned as `RunnerError::ExecutionError`.
    pub fn run(self, log: &mut dyn BuildLog) -> Result<Completion> {
        let command_str = self.command.to_string();
        let program = self.command.program();

        let start_time = Instant::now();
        let mut child = Command::new(program)
            .args(self.command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                RunnerError::ExecutionError(format!(
                    "failed to execute '{}' for target '{}': {}\n\
                     Fix: ensure phpcs is installed and in PATH, or set `bin` in the task file.",
                    program, self.target, e
                ))
            })?;

        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
                    RunnerError::ExecutionError(format!(
                        "failed to read phpcs output for target '{}': {}",
                        self.target, e
                    ))
                })?;
                if read == 0 {
                    break;
                }
                log.write(&buf);
            }
        }

        let status = child.wait().map_err(|e| {
            RunnerError::ExecutionError(format!(
                "failed to wait for phpcs (target '{}'): {}",
                self.target, e
            ))
        })?;

        if !status.success() {
            let code = status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "none (terminated by signal)".to_string());
            return Err(RunnerError::ExecutionError(format!(
                "phpcs failed for target '{}' with exit code {}\nCommand: {}",
                self.target, code, command_str
            )));
        }

        Ok(Completion {
            target: self.target,
            command: command_str,
            duration: start_time.elapsed(),
        })
    }
}
