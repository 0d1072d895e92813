//! Exit code constants for the cli-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing key)
//! - 2: Config file not found for the requested scope
//! - 3: Permission denied while creating directories
//! - 4: Filesystem I/O failure
//! - 5: YAML decode/encode failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a key that is not set.
pub const USER_ERROR: i32 = 1;

/// No config file could be located for the requested scope.
pub const NOT_FOUND: i32 = 2;

/// A directory could not be created because its parent is not writable.
pub const PERMISSION_DENIED: i32 = 3;

/// Low-level filesystem failure (read, write, mkdir).
pub const IO_FAILURE: i32 = 4;

/// Existing config content is not valid YAML, or the mapping could not be serialized.
pub const YAML_FAILURE: i32 = 5;
