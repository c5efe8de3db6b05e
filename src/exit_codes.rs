//! Exit code constants for the labrender CLI.
//!
//! - 0: Success
//! - 1: User error (bad env value, bad config, bad args)
//! - 2: Template failure (not found or render error)
//! - 3: File write failure
//! - 4: Build failure (script not runnable, or non-zero exit in strict mode)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unparsable parameter, invalid config file, or bad arguments.
pub const USER_ERROR: i32 = 1;

/// Template failure: template file missing or rendering failed.
pub const TEMPLATE_FAILURE: i32 = 2;

/// File write failure: rendered output could not be written.
pub const WRITE_FAILURE: i32 = 3;

/// Build failure: build script could not be started, or failed under strict mode.
pub const BUILD_FAILURE: i32 = 4;
