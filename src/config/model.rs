//! Task file struct definitions.

use super::types::OptionsLayer;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Default task file name, looked up in the current directory.
pub const DEFAULT_TASK_FILE: &str = "phpcs.yaml";

/// Contents of a phpcs-runner task file.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskFile {
    /// Options shared by every target.
    pub options: OptionsLayer,

    /// Named targets, run in name order when none are selected.
    pub targets: BTreeMap<String, Target>,
}

/// A named target: one directory plus its own option overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Target {
    /// Directory handed to phpcs as the final argument.
    pub dir: String,

    /// Per-target options, layered over the shared options.
    pub options: OptionsLayer,
}
