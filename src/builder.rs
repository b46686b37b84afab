//! Debian configuration builder.
//!
//! [`DebianConfiguration::new`] assembles the template context from three
//! sources, in order:
//!
//! 1. Built-in defaults (`compat`) and the current timestamp (`date`)
//! 2. `setup.py` metadata (`name`, `version`, `maintainer`, `maintainer_email`, `description`)
//! 3. The latest git commit summary (`latest_git_commit`)
//!
//! Any failure aborts construction, so a constructed builder always holds a
//! complete context. [`DebianConfiguration::render`] then writes the bundled
//! templates into `<root>/debian/`, wiping that directory first.

use crate::config::Settings;
use crate::context::Context;
use crate::descriptor;
use crate::error::{MakeDebError, Result};
use crate::fs;
use crate::git;
use crate::template::render_template;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory under the project root that receives the rendered files.
pub const OUTPUT_DIR: &str = "debian";

/// A template bundled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct TemplateResource {
    /// Resource path, used for naming the output and in error messages.
    pub path: &'static str,
    pub source: &'static str,
    /// Output gets mode `0755` on Unix.
    pub executable: bool,
}

impl TemplateResource {
    /// File name with directory and extension stripped (`.../control.j2` -> `control`).
    pub fn output_name(&self) -> &'static str {
        Path::new(self.path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(self.path)
    }

    fn render(&self, context: &Context) -> Result<String> {
        render_template(self.path, self.source, context).map_err(|source| {
            MakeDebError::Template {
                template: self.path.to_string(),
                source,
            }
        })
    }
}

macro_rules! bundled {
    ($file:literal) => {
        bundled!($file, executable = false)
    };
    ($file:literal, executable = $executable:literal) => {
        TemplateResource {
            path: concat!("resources/debian/", $file),
            source: include_str!(concat!("../resources/debian/", $file)),
            executable: $executable,
        }
    };
}

/// Templates rendered to a file named after the template, in write order.
pub const DEBIAN_CONFIGURATION_TEMPLATES: &[TemplateResource] = &[
    bundled!("changelog.j2"),
    bundled!("compat.j2"),
    bundled!("control.j2"),
    // dpkg-buildpackage runs debian/rules directly.
    bundled!("rules.j2", executable = true),
];

/// Rendered to `<name>.triggers` with a newline appended.
pub const TRIGGERS_TEMPLATE: TemplateResource = bundled!("triggers.j2");

/// Files written by a successful render.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub output_dir: PathBuf,
    /// Written files in write order.
    pub files: Vec<PathBuf>,
}

/// Fully assembled packaging context for one project root.
#[derive(Debug, Clone)]
pub struct DebianConfiguration {
    root: PathBuf,
    context: Context,
}

impl DebianConfiguration {
    /// Build the context for `root`, stamping it with the current local time.
    pub fn new<P: AsRef<Path>>(root: P, settings: &Settings) -> Result<Self> {
        Self::with_timestamp(root, settings, Local::now())
    }

    /// Build the context for `root` with an explicit `date` value.
    pub fn with_timestamp<P: AsRef<Path>>(
        root: P,
        settings: &Settings,
        now: DateTime<Local>,
    ) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        debug!(root = %root.display(), "assembling context");

        let mut context = Context::with_defaults(now);
        context.extend(descriptor::context_from_setuppy(&settings.python, &root)?);

        let commit = git::latest_commit(&settings.git, &root)?;
        context.insert("latest_git_commit", commit);

        info!(
            name = context.get_str("name").unwrap_or_default(),
            version = context.get_str("version").unwrap_or_default(),
            "context assembled"
        );

        Ok(Self { root, context })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// Recreate `<root>/debian/` and write every rendered template into it.
    ///
    /// The directory is deleted before anything is rendered. A failure part
    /// way through leaves the files written so far; nothing is rolled back.
    pub fn render(&self) -> Result<RenderReport> {
        let output_dir = self.output_dir();
        fs::reset_dir(&output_dir)?;

        let mut files = Vec::with_capacity(DEBIAN_CONFIGURATION_TEMPLATES.len() + 1);

        for template in DEBIAN_CONFIGURATION_TEMPLATES {
            let content = template.render(&self.context)?;
            let path = output_dir.join(template.output_name());
            fs::write_file(&path, &content)?;

            if template.executable {
                fs::make_executable(&path)?;
            }

            debug!(path = %path.display(), "wrote");
            files.push(path);
        }

        // Named after the package, not the template.
        let name = self.context.get_str("name").unwrap_or_default();
        let name = descriptor::package_file_stem(name)?;
        let content = TRIGGERS_TEMPLATE.render(&self.context)?;
        let path = output_dir.join(format!("{}.triggers", name));
        fs::write_file(&path, &format!("{}\n", content))?;
        debug!(path = %path.display(), "wrote");
        files.push(path);

        info!(
            output_dir = %output_dir.display(),
            files = files.len(),
            "debian configuration rendered"
        );

        Ok(RenderReport { output_dir, files })
    }
}
