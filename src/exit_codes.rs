//! Exit code constants for the prjmgr CLI.
//!
//! - 0: Success
//! - 1: User error (bad names, malformed config or templates)
//! - 3: Build file does not have the expected structure
//! - 4: Filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid artifact name, or malformed configuration.
pub const USER_ERROR: i32 = 1;

/// The build file is missing one or more anchor lines.
pub const STRUCTURE_FAILURE: i32 = 3;

/// Reading, writing or deleting a file failed.
pub const IO_FAILURE: i32 = 4;
