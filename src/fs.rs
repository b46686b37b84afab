//! Filesystem helpers for writing the `debian/` directory.
//!
//! Nothing here is atomic: [`reset_dir`] deletes before it recreates, and a
//! failure between writes leaves whatever was already written in place.

use crate::error::{MakeDebError, Result};
use std::fs;
use std::path::Path;

/// Remove `dir` with everything in it (if present) and recreate it empty.
pub fn reset_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();

    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| {
            MakeDebError::io(format!("failed to remove '{}'", dir.display()), e)
        })?;
    }

    fs::create_dir(dir)
        .map_err(|e| MakeDebError::io(format!("failed to create '{}'", dir.display()), e))
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content)
        .map_err(|e| MakeDebError::io(format!("failed to write '{}'", path.display()), e))
}

/// Mark `path` executable (`0755`). No-op on non-Unix platforms.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|e| {
        MakeDebError::io(
            format!("failed to set permissions on '{}'", path.display()),
            e,
        )
    })
}

#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(_path: P) -> Result<()> {
    Ok(())
}
