//! Task file model for phpcs-runner.
//!
//! This module defines the `TaskFile` struct that represents `phpcs.yaml`:
//! shared options plus named targets. Options are layered (defaults, shared,
//! per-target, command line) into the `PhpcsOptions` handed to the builder.

mod model;
mod operations;
mod overrides;
pub mod types;


// Re-export public API
pub use model::{DEFAULT_TASK_FILE, Target, TaskFile};
pub use overrides::Overrides;
pub use types::{OptionsLayer, PhpcsOptions, Setting};
