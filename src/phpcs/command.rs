//! phpcs command-line construction.
//!
//! Flags are emitted in a fixed order, each only when its option is set,
//! followed by the normalized target directory as the last token.

use crate::config::PhpcsOptions;
use crate::error::{Result, RunnerError};
use crate::path::normalize;
use std::fmt;

/// Characters a shell would interpret; `=` is deliberately absent.
const SHELL_SPECIAL: &str = "'\"\\$`!*?[]{}()<>|&;#~";

/// A fully built phpcs command line: program followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// The binary to execute.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Arguments passed to the binary, directory last.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Every token, program included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_tokens(&self.tokens))
    }
}

/// Join tokens with spaces, quoting only those a shell would split or expand.
pub fn display_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let needs_quoting = token.is_empty()
                || token
                    .chars()
                    .any(|c| c.is_whitespace() || SHELL_SPECIAL.contains(c));
            if needs_quoting {
                shell_words::quote(token).into_owned()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `bin` into program and leading arguments, normalizing the program path.
fn split_bin(bin: &str) -> Result<Vec<String>> {
    let mut words = shell_words::split(bin).map_err(|e| {
        RunnerError::ConfigError(format!(
            "failed to parse bin '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            bin, e
        ))
    })?;

    match words.first_mut() {
        Some(program) => *program = normalize(program),
        None => {
            return Err(RunnerError::ConfigError(format!(
                "bin is empty after parsing: '{}'",
                bin
            )));
        }
    }

    Ok(words)
}

/// Build the phpcs command line for `dir` from effective options.
///
/// Order: `<bin> --extensions --ignore --severity --error-severity
/// --warning-severity --standard --report --report-file -v <dir>`.
/// A severity of 0 counts as unset.
pub fn build_command(options: &PhpcsOptions, dir: &str) -> Result<CommandLine> {
    let mut tokens = split_bin(&options.bin)?;

    let mut flag = |name: &str, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            tokens.push(format!("--{}={}", name, value));
        }
    };
    let severity = |value: Option<u32>| value.filter(|&v| v > 0).map(|v| v.to_string());

    flag("extensions", options.extensions.clone());
    flag("ignore", options.ignore.clone());
    flag("severity", severity(options.severity));
    flag("error-severity", severity(options.error_severity));
    flag("warning-severity", severity(options.warning_severity));
    flag("standard", options.standard.clone());
    flag("report", options.report_type.clone());
    flag("report-file", options.report_file.clone());

    if options.verbose {
        tokens.push("-v".to_string());
    }

    tokens.push(normalize(dir));

    Ok(CommandLine { tokens })
}
