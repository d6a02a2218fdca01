//! Option types and defaults for phpcs-runner.
//!
//! This module defines the effective option set handed to the command
//! builder, the partially-specified layer read from the task file, and the
//! `Setting` value that distinguishes "disabled" from "absent".

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Default phpcs binary, resolved through `PATH`.
pub const DEFAULT_BIN: &str = "phpcs";

/// An explicitly configured flag value.
///
/// `Disabled` is written as `false`, `null` or `""` in the task file (a
/// severity of `0` too) and omits the flag. Inside an [`OptionsLayer`] an absent key is `None`, which
/// leaves the lower layer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting<T> {
    Disabled,
    Value(T),
}

impl<T> Setting<T> {
    /// Converts into the effective representation (`None` omits the flag).
    pub fn into_option(self) -> Option<T> {
        match self {
            Setting::Disabled => None,
            Setting::Value(v) => Some(v),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Setting<String> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null | Value::Bool(false) => Ok(Setting::Disabled),
            Value::Bool(true) => Err(de::Error::custom(
                "expected a value or `false`, found `true`",
            )),
            Value::String(s) if s.is_empty() => Ok(Setting::Disabled),
            Value::Sequence(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in &items {
                    let part = scalar_to_string(item).ok_or_else(|| {
                        <D::Error as de::Error>::custom("list entries must be strings or numbers")
                    })?;
                    if !part.is_empty() {
                        parts.push(part);
                    }
                }
                if parts.is_empty() {
                    Ok(Setting::Disabled)
                } else {
                    Ok(Setting::Value(parts.join(",")))
                }
            }
            other => scalar_to_string(&other)
                .map(Setting::Value)
                .ok_or_else(|| de::Error::custom("expected a string, number, list or `false`")),
        }
    }
}

/// Severity `0` is falsy and disables the flag.
fn severity_setting(value: u32) -> Setting<u32> {
    if value == 0 {
        Setting::Disabled
    } else {
        Setting::Value(value)
    }
}

impl<'de> Deserialize<'de> for Setting<u32> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null | Value::Bool(false) => Ok(Setting::Disabled),
            Value::Bool(true) => Err(de::Error::custom(
                "expected a severity or `false`, found `true`",
            )),
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(severity_setting)
                .ok_or_else(|| de::Error::custom(format!("invalid severity '{}'", n))),
            Value::String(s) if s.is_empty() => Ok(Setting::Disabled),
            Value::String(s) => s
                .trim()
                .parse::<u32>()
                .map(severity_setting)
                .map_err(|_| de::Error::custom(format!("invalid severity '{}'", s))),
            _ => Err(de::Error::custom("expected a severity or `false`")),
        }
    }
}

/// Deserialize a present key as `Some`, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// One layer of options as written in the task file.
///
/// Every field is optional; present fields replace the same field of the
/// layer below when resolving. Keys are snake_case, with the camelCase
/// spellings accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OptionsLayer {
    pub bin: Option<String>,
    #[serde(deserialize_with = "present")]
    pub extensions: Option<Setting<String>>,
    #[serde(deserialize_with = "present")]
    pub ignore: Option<Setting<String>>,
    #[serde(alias = "reportType", deserialize_with = "present")]
    pub report_type: Option<Setting<String>>,
    #[serde(alias = "reportFile", deserialize_with = "present")]
    pub report_file: Option<Setting<String>>,
    #[serde(deserialize_with = "present")]
    pub severity: Option<Setting<u32>>,
    #[serde(alias = "errorSeverity", deserialize_with = "present")]
    pub error_severity: Option<Setting<u32>>,
    #[serde(alias = "warningSeverity", deserialize_with = "present")]
    pub warning_severity: Option<Setting<u32>>,
    #[serde(deserialize_with = "present")]
    pub standard: Option<Setting<String>>,
    pub verbose: Option<bool>,
}

/// Effective options for a single phpcs invocation.
///
/// `None` means the corresponding flag is omitted from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhpcsOptions {
    /// Path to the phpcs binary.
    pub bin: String,
    /// Comma separated list of file extensions to check.
    pub extensions: Option<String>,
    /// Comma separated list of patterns to ignore files and directories.
    pub ignore: Option<String>,
    /// Report type (`full`, `summary`, `checkstyle`, ...).
    pub report_type: Option<String>,
    /// File to write the report to.
    pub report_file: Option<String>,
    /// Minimum severity required to display an error or warning.
    pub severity: Option<u32>,
    /// Minimum severity required to display an error.
    pub error_severity: Option<u32>,
    /// Minimum severity required to display a warning.
    pub warning_severity: Option<u32>,
    /// Coding standard to check against.
    pub standard: Option<String>,
    /// Pass `-v` to phpcs.
    pub verbose: bool,
}

impl Default for PhpcsOptions {
    fn default() -> Self {
        Self {
            bin: DEFAULT_BIN.to_string(),
            extensions: None,
            ignore: None,
            report_type: None,
            report_file: None,
            severity: None,
            error_severity: None,
            warning_severity: None,
            standard: None,
            verbose: false,
        }
    }
}

fn apply<T: Clone>(field: &mut Option<T>, setting: &Option<Setting<T>>) {
    if let Some(setting) = setting {
        *field = setting.clone().into_option();
    }
}

impl PhpcsOptions {
    /// Apply a task-file layer on top of these options.
    pub fn apply_layer(&mut self, layer: &OptionsLayer) {
        if let Some(bin) = &layer.bin {
            self.bin = bin.clone();
        }
        apply(&mut self.extensions, &layer.extensions);
        apply(&mut self.ignore, &layer.ignore);
        apply(&mut self.report_type, &layer.report_type);
        apply(&mut self.report_file, &layer.report_file);
        apply(&mut self.severity, &layer.severity);
        apply(&mut self.error_severity, &layer.error_severity);
        apply(&mut self.warning_severity, &layer.warning_severity);
        apply(&mut self.standard, &layer.standard);
        if let Some(verbose) = layer.verbose {
            self.verbose = verbose;
        }
    }
}
