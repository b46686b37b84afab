//! Exit code constants for the make-deb CLI.
//!
//! - 0: Success
//! - 1: Configuration error (missing or incomplete setup.py, bad settings file)
//! - 2: External tool failure (python or git missing, or exited non-zero)
//! - 3: Render failure (template or filesystem error while writing `debian/`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Project metadata or settings are missing or invalid.
pub const CONFIGURATION_ERROR: i32 = 1;

/// An external collaborator could not be run or reported a failure.
pub const TOOL_FAILURE: i32 = 2;

/// Writing the packaging files failed part way.
pub const RENDER_FAILURE: i32 = 3;
