//! Command-line override set.
//!
//! Overrides are the highest-precedence layer: any field present here
//! replaces the task file's value before the command line is built.

use super::types::PhpcsOptions;

/// Options supplied on the command line for a single run.
///
/// Empty strings and a severity of `0` count as absent. Values are used
/// verbatim. `verbose` can only switch `-v` on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub extensions: Option<String>,
    pub ignore: Option<String>,
    pub severity: Option<u32>,
    pub error_severity: Option<u32>,
    pub warning_severity: Option<u32>,
    pub standard: Option<String>,
    pub report: Option<String>,
    pub report_file: Option<String>,
    pub verbose: bool,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|&v| v > 0)
}

impl Overrides {
    /// Replace every field of `options` that has an override.
    pub fn apply_to(&self, options: &mut PhpcsOptions) {
        if let Some(v) = non_empty(&self.extensions) {
            options.extensions = Some(v);
        }
        if let Some(v) = non_empty(&self.ignore) {
            options.ignore = Some(v);
        }
        if let Some(v) = non_zero(self.severity) {
            options.severity = Some(v);
        }
        if let Some(v) = non_zero(self.error_severity) {
            options.error_severity = Some(v);
        }
        if let Some(v) = non_zero(self.warning_severity) {
            options.warning_severity = Some(v);
        }
        if let Some(v) = non_empty(&self.standard) {
            options.standard = Some(v);
        }
        if let Some(v) = non_empty(&self.report) {
            options.report_type = Some(v);
        }
        if let Some(v) = non_empty(&self.report_file) {
            options.report_file = Some(v);
        }
        if self.verbose {
            options.verbose = true;
        }
    }
}
