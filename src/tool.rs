//! External process runner for make-deb.
//!
//! Both collaborators (the setup.py interpreter and git) are invoked through
//! [`run_tool`], which captures stdout/stderr and classifies failures into
//! "could not be started" ([`MakeDebError::ToolUnavailable`]) and "ran but
//! failed" ([`MakeDebError::ToolError`]).

use crate::error::{MakeDebError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Captured output of a successful tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Standard output, untouched.
    pub stdout: String,
    /// Standard error (trimmed).
    pub stderr: String,
}

impl ToolOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run `program` with `args` in `cwd` and wait for it to finish.
///
/// # Returns
///
/// * `Ok(ToolOutput)` - The tool exited with status 0
/// * `Err(MakeDebError::ToolUnavailable)` - The binary is missing or not executable
/// * `Err(MakeDebError::ToolError)` - Any other spawn failure or a non-zero exit
pub fn run_tool<P: AsRef<Path>>(program: &str, cwd: P, args: &[&str]) -> Result<ToolOutput> {
    let cwd = cwd.as_ref();
    debug!(program, ?args, cwd = %cwd.display(), "running tool");

    let output = Command::new(program)
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => MakeDebError::ToolUnavailable {
                tool: program.to_string(),
            },
            _ => MakeDebError::ToolError {
                tool: program.to_string(),
                detail: format!("failed to execute: {}", e),
            },
        })?;

    let tool_output = ToolOutput::from_output(&output);

    if output.status.success() {
        Ok(tool_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let message = if tool_output.stderr.is_empty() {
            tool_output.stdout.trim().to_string()
        } else {
            tool_output.stderr
        };

        Err(MakeDebError::ToolError {
            tool: program.to_string(),
            detail: format!(
                "{} exited with code {}: {}",
                args.first().unwrap_or(&""),
                exit_code,
                message
            ),
        })
    }
}
