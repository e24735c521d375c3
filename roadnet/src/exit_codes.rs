//! Stable exit codes for roadnet CLI commands.

/// Command succeeded (or a path was found).
pub const OK: i32 = 0;
/// Command failed due to invalid config, map file, arguments or other errors.
pub const INVALID: i32 = 1;
/// `roadnet path` found no route between the two towns.
pub const NO_PATH: i32 = 2;
