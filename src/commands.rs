//! Command implementation for make-deb.
//!
//! Resolves the project root and settings, builds the Debian configuration,
//! then either prints the context or renders `debian/`.

use crate::builder::DebianConfiguration;
use crate::cli::Cli;
use crate::config::Settings;
use crate::context::Context;
use crate::error::{MakeDebError, Result};
use crate::git;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Execute make-deb with parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let root = resolve_root(&cli)?;
    info!(root = %root.display(), "project root");

    let settings = Settings::load_for_root(&root)?.with_overrides(cli.python, cli.git)?;
    let config = DebianConfiguration::new(&root, &settings)?;

    if cli.print_context {
        let stdout = io::stdout();
        return write_context(config.context(), cli.json, &mut stdout.lock());
    }

    let report = config.render()?;
    println!(
        "'debian' directory successfully placed at {}",
        report.output_dir.display()
    );
    Ok(())
}

/// `--root` if given, otherwise the top-level of the git repository around
/// the current directory.
fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }

    let cwd = std::env::current_dir()
        .map_err(|e| MakeDebError::io("failed to get current working directory", e))?;
    let git = cli.git.as_deref().unwrap_or("git");

    git::repo_root(git, &cwd).map_err(|e| match e {
        MakeDebError::ToolError { tool, .. } => MakeDebError::ToolError {
            tool,
            detail: format!(
                "'{}' is not inside a git repository; run make-deb from your project or pass --root",
                cwd.display()
            ),
        },
        other => other,
    })
}

/// Print `context` as `key: value` lines, or as a JSON object.
fn write_context<W: Write>(context: &Context, json: bool, out: &mut W) -> Result<()> {
    let write_err = |e| MakeDebError::io("failed to write context", e);

    if json {
        let text = serde_json::to_string_pretty(context)
            .map_err(|e| MakeDebError::io("failed to serialize context", e.into()))?;
        writeln!(out, "{}", text).map_err(write_err)?;
    } else {
        for (key, value) in context.iter() {
            writeln!(out, "{}: {}", key, value).map_err(write_err)?;
        }
    }

    Ok(())
}
