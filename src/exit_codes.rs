//! Exit code constants for the phpcs-runner CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown target)
//! - 2: Configuration error (unreadable or invalid task file)
//! - 3: Execution failure (phpcs could not be launched or exited non-zero)
//! - 4: Internal error (output could not be produced)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unknown target.
pub const USER_ERROR: i32 = 1;

/// Configuration error: task file missing, malformed or holding invalid values.
pub const CONFIG_ERROR: i32 = 2;

/// Execution failure: the external binary failed to launch or reported failure.
pub const EXECUTION_FAILURE: i32 = 3;

/// Internal error: the runner failed to produce its own output.
pub const INTERNAL_ERROR: i32 = 4;
