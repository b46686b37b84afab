//! Error types for make-deb.
//!
//! Uses thiserror for derive macros. Every failure surfaces as a
//! [`MakeDebError`] carrying a message meant to be shown to the user as is.

use crate::exit_codes;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for make-deb operations.
#[derive(Error, Debug)]
pub enum MakeDebError {
    /// No `setup.py` at the expected location.
    #[error("failed to find setup.py at '{}'", .path.display())]
    MissingDescriptor { path: PathBuf },

    /// setup.py reported an empty or placeholder value for a required field.
    #[error("setup.py has no usable value for '{field}' (got '{value}')")]
    IncompleteField { field: String, value: String },

    /// An external tool is not installed or cannot be executed.
    #[error("{tool} is not available, please install it or point make-deb at it")]
    ToolUnavailable { tool: String },

    /// An external tool ran but failed.
    #[error("{tool} failed: {detail}")]
    ToolError { tool: String, detail: String },

    /// Settings file could not be read or is invalid.
    #[error("{0}")]
    Config(String),

    /// A bundled template could not be rendered against the context.
    #[error("failed to render template '{template}': {source}")]
    Template {
        template: String,
        #[source]
        source: TemplateError,
    },

    /// Filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl MakeDebError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MakeDebError::MissingDescriptor { .. }
            | MakeDebError::IncompleteField { .. }
            | MakeDebError::Config(_) => exit_codes::CONFIGURATION_ERROR,
            MakeDebError::ToolUnavailable { .. } | MakeDebError::ToolError { .. } => {
                exit_codes::TOOL_FAILURE
            }
            MakeDebError::Template { .. } | MakeDebError::Io { .. } => exit_codes::RENDER_FAILURE,
        }
    }

    /// Shorthand for wrapping an `io::Error` with a description of what was attempted.
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        MakeDebError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for make-deb operations.
pub type Result<T> = std::result::Result<T, MakeDebError>;
