//! Git queries used by make-deb.

use crate::error::Result;
use crate::tool::run_tool;
use std::path::{Path, PathBuf};

/// One-line summary of the most recent commit (`git log -1 --oneline`).
///
/// The output is kept verbatim apart from its trailing line terminator.
pub fn latest_commit<P: AsRef<Path>>(git: &str, root: P) -> Result<String> {
    let output = run_tool(git, root, &["log", "-1", "--oneline"])?;
    Ok(strip_line_ending(&output.stdout).to_string())
}

/// Top-level directory of the repository containing `cwd`.
pub fn repo_root<P: AsRef<Path>>(git: &str, cwd: P) -> Result<PathBuf> {
    let output = run_tool(git, cwd, &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(strip_line_ending(&output.stdout)))
}

fn strip_line_ending(s: &str) -> &str {
    s.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(s)
}
