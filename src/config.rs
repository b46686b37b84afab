//! Settings model for make-deb.
//!
//! Settings name the external programs make-deb runs. They are layered:
//! built-in defaults, then an optional `.make-deb.yaml` at the project root,
//! then environment variables and command-line flags (applied by the CLI via
//! [`Settings::with_overrides`]). Unknown YAML fields are ignored for forward
//! compatibility.
//!
//! Settings never touch the template context; `compat` and friends are fixed.

use crate::error::{MakeDebError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Name of the optional settings file at the project root.
pub const SETTINGS_FILE: &str = ".make-deb.yaml";

/// Programs used to query the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interpreter used to run `setup.py`.
    #[serde(default = "default_python")]
    pub python: String,

    /// Git executable.
    #[serde(default = "default_git")]
    pub git: String,
}

fn default_python() -> String {
    "python3".to_string()
}
fn default_git() -> String {
    "git".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: default_python(),
            git: default_git(),
        }
    }
}

impl Settings {
    /// Load `<root>/.make-deb.yaml`, or the defaults if it does not exist.
    pub fn load_for_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(SETTINGS_FILE);
        if path.exists() {
            debug!(path = %path.display(), "loading settings");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MakeDebError::Config(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = serde_yaml::from_str(yaml)
            .map_err(|e| MakeDebError::Config(format!("failed to parse settings YAML: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Replace programs with explicitly supplied values.
    pub fn with_overrides(mut self, python: Option<String>, git: Option<String>) -> Result<Self> {
        if let Some(python) = python {
            self.python = python;
        }
        if let Some(git) = git {
            self.git = git;
        }
        self.validate()?;
        Ok(self)
    }

    /// Program names must be non-empty.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [("python", &self.python), ("git", &self.git)] {
            if value.trim().is_empty() {
                return Err(MakeDebError::Config(format!(
                    "settings validation failed: {} must not be empty",
                    key
                )));
            }
        }
        Ok(())
    }
}
