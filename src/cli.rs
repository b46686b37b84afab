//! CLI argument parsing for make-deb.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The work itself happens in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// make-deb: generate Debian packaging configuration for a Python project.
///
/// Reads name, version, maintainer and description from setup.py, the latest
/// commit from git, and writes changelog, compat, control, rules and
/// <name>.triggers into the project's debian/ directory. Any existing
/// debian/ directory is replaced.
#[derive(Parser, Debug)]
#[command(name = "make-deb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing setup.py [default: top-level of the current git repository]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Interpreter used to run setup.py [default: python3]
    #[arg(long, env = "MAKE_DEB_PYTHON", value_name = "BIN")]
    pub python: Option<String>,

    /// Git executable [default: git]
    #[arg(long, env = "MAKE_DEB_GIT", value_name = "BIN")]
    pub git: Option<String>,

    /// Print the assembled template context instead of writing debian/.
    #[arg(long)]
    pub print_context: bool,

    /// Print the context as JSON (with --print-context).
    #[arg(long, requires = "print_context")]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
