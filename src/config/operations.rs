//! Task file loading, validation, and option resolution.

use super::model::{Target, TaskFile};
use super::overrides::Overrides;
use super::types::PhpcsOptions;
use crate::error::{Result, RunnerError};
use std::path::Path;

impl TaskFile {
    /// Load a task file from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(TaskFile)` - Successfully loaded and validated task file
    /// * `Err(RunnerError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RunnerError::ConfigError(format!(
                "failed to read task file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a task file from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let task_file: TaskFile = serde_yaml::from_str(yaml)
            .map_err(|e| RunnerError::ConfigError(format!("failed to parse task file YAML: {}", e)))?;

        task_file.validate()?;
        Ok(task_file)
    }

    /// Validate the task file.
    ///
    /// Validation rules:
    /// - `bin`, where given, must be non-empty
    /// - every target must have a non-empty `dir`
    pub fn validate(&self) -> Result<()> {
        if self.options.bin.as_deref().is_some_and(|b| b.trim().is_empty()) {
            return Err(RunnerError::ConfigError(
                "options.bin must not be empty".to_string(),
            ));
        }

        for (name, target) in &self.targets {
            if target.dir.trim().is_empty() {
                return Err(RunnerError::ConfigError(format!(
                    "target '{}' has no dir",
                    name
                )));
            }
            if target.options.bin.as_deref().is_some_and(|b| b.trim().is_empty()) {
                return Err(RunnerError::ConfigError(format!(
                    "target '{}': options.bin must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Select targets by name, preserving the requested order.
    ///
    /// An empty selection returns every target in name order.
    pub fn select<'a>(&'a self, names: &[String]) -> Result<Vec<(&'a str, &'a Target)>> {
        if self.targets.is_empty() {
            return Err(RunnerError::UserError(
                "no targets configured.\n\nAdd a `targets:` section to the task file.".to_string(),
            ));
        }

        if names.is_empty() {
            return Ok(self
                .targets
                .iter()
                .map(|(name, target)| (name.as_str(), target))
                .collect());
        }

        names
            .iter()
            .map(|name| {
                self.targets
                    .get_key_value(name)
                    .map(|(name, target)| (name.as_str(), target))
                    .ok_or_else(|| {
                        RunnerError::UserError(format!(
                            "target '{}' not found.\n\nConfigured targets: {}",
                            name,
                            self.target_names().join(", ")
                        ))
                    })
            })
            .collect()
    }

    /// Names of all configured targets, in name order.
    pub fn target_names(&self) -> Vec<&str> {
        self.targets.keys().map(String::as_str).collect()
    }

    /// Compute the effective options for `target`.
    ///
    /// Precedence, highest first: CLI overrides, target options, shared
    /// options, defaults.
    pub fn resolve_options(&self, target: &Target, overrides: &Overrides) -> PhpcsOptions {
        let mut options = PhpcsOptions::default();
        options.apply_layer(&self.options);
        options.apply_layer(&target.options);
        overrides.apply_to(&mut options);
        options
    }
}
