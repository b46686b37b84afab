//! make-deb: generate Debian packaging configuration for Python projects.
//!
//! Metadata comes from two places: the project's `setup.py` (name, version,
//! maintainer, description) and git (the latest commit summary). It is merged
//! into a [`context::Context`] and rendered through the bundled templates into
//! `<root>/debian/`.
//!
//! ```no_run
//! use make_deb::builder::DebianConfiguration;
//! use make_deb::config::Settings;
//!
//! let config = DebianConfiguration::new("/src/myproject", &Settings::default())?;
//! let report = config.render()?;
//! println!("wrote {} files", report.files.len());
//! # Ok::<(), make_deb::error::MakeDebError>(())
//! ```

pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod template;
pub mod tool;

#[cfg(test)]
mod test_support;
