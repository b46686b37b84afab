//! Project metadata from the build descriptor (`setup.py`).
//!
//! setup.py is asked for five fields in a fixed order and prints one value
//! per line. setuptools prints `UNKNOWN` for fields that were never set, so
//! that placeholder is rejected just like an empty value.

use crate::context::Context;
use crate::error::{MakeDebError, Result};
use crate::tool::run_tool;
use std::path::Path;
use tracing::debug;

/// File name of the build descriptor at the project root.
pub const DESCRIPTOR_FILE: &str = "setup.py";

/// Value setuptools prints for an unset field.
pub const UNKNOWN: &str = "UNKNOWN";

/// Context key and setup.py flag for each requested field, in output order.
pub const FIELDS: &[(&str, &str)] = &[
    ("name", "--name"),
    ("version", "--version"),
    ("maintainer", "--maintainer"),
    ("maintainer_email", "--maintainer-email"),
    ("description", "--description"),
];

/// Query `<root>/setup.py` with `python` and return its fields as a context.
pub fn context_from_setuppy<P: AsRef<Path>>(python: &str, root: P) -> Result<Context> {
    let root = root.as_ref();
    let descriptor = root.join(DESCRIPTOR_FILE);

    if !descriptor.exists() {
        return Err(MakeDebError::MissingDescriptor { path: descriptor });
    }

    let mut args = vec![DESCRIPTOR_FILE];
    args.extend(FIELDS.iter().map(|(_, flag)| *flag));

    let output = run_tool(python, root, &args)?;
    debug!(stdout = %output.stdout, "setup.py metadata");

    parse_descriptor_output(&output.stdout)
}

/// Parse setup.py output into a context, one line per entry of [`FIELDS`].
///
/// The final newline terminates the last value. Lines missing at the end
/// count as empty values; extra lines are ignored.
pub fn parse_descriptor_output(stdout: &str) -> Result<Context> {
    let body = stdout.strip_suffix('\n').unwrap_or(stdout);
    let mut lines = body.split('\n').map(|line| line.trim_end_matches('\r'));

    let mut context = Context::default();
    for (field, _) in FIELDS {
        let value = lines.next().unwrap_or("");
        if value.is_empty() || value == UNKNOWN {
            return Err(MakeDebError::IncompleteField {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        context.insert(*field, value);
    }

    if let Some(name) = context.get_str("name") {
        package_file_stem(name)?;
    }

    Ok(context)
}

/// The package name as used in file names under `debian/`.
///
/// Rejects names that are empty, `.`/`..`, or contain a path separator, so
/// `<name>.triggers` always lands inside the output directory.
pub fn package_file_stem(name: &str) -> Result<&str> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(MakeDebError::IncompleteField {
            field: "name".to_string(),
            value: name.to_string(),
        });
    }
    Ok(name)
}
