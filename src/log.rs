//! Build log sink.
//!
//! The runner reports progress through [`BuildLog`]: plain lines are always
//! shown, verbose lines only when verbose mode is on, and raw output from
//! phpcs is passed through byte for byte.

use std::io::{self, Write};

/// Destination for runner output.
pub trait BuildLog {
    /// Write raw bytes without adding a newline or re-encoding.
    fn write(&mut self, bytes: &[u8]);

    /// Write a line that is always shown.
    fn writeln(&mut self, line: &str);

    /// Write a line that is only shown in verbose mode.
    fn verbose_writeln(&mut self, line: &str);
}

/// Log that writes to the process's stdout.
#[derive(Debug, Default)]
pub struct TerminalLog {
    verbose: bool,
}

impl TerminalLog {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl BuildLog for TerminalLog {
    fn write(&mut self, bytes: &[u8]) {
        let mut stdout = io::stdout().lock();
        // A closed stdout must not abort the phpcs run.
        let _ = stdout.write_all(bytes);
        let _ = stdout.flush();
    }

    fn writeln(&mut self, line: &str) {
        println!("{}", line);
    }

    fn verbose_writeln(&mut self, line: &str) {
        if self.verbose {
            println!("{}", line);
        }
    }
}

/// Log that records everything it is given; used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CaptureLog {
    pub verbose: bool,
    pub output: Vec<u8>,
}

#[cfg(test)]
impl CaptureLog {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            output: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.output)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
impl BuildLog for CaptureLog {
    fn write(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }

    fn writeln(&mut self, line: &str) {
        self.output.extend_from_slice(line.as_bytes());
        self.output.push(b'\n');
    }

    fn verbose_writeln(&mut self, line: &str) {
        if self.verbose {
            self.writeln(line);
        }
    }
}
