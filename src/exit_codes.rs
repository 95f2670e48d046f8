//! Exit code constants for the boilerplate CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing files, invalid config)
//! - 2: Check failure (stale README tables, mismatched table markers)
//! - 3: External tool failure (`just`, `git`, `cargo`)
//! - 4: Template failure (unresolved placeholder, bad date format)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Check failure: README tables are stale or their markers are corrupted.
pub const CHECK_FAILURE: i32 = 2;

/// External tool failure: a spawned command could not run or exited non-zero.
pub const TOOL_FAILURE: i32 = 3;

/// Template failure: a placeholder could not be resolved.
pub const TEMPLATE_FAILURE: i32 = 4;
