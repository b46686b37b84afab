use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

/// Interpreter used to run fake `setup.py` scripts, so tests need no Python.
pub(crate) const FAKE_PYTHON: &str = "sh";

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Git repository with a single "Initial commit".
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    run_git(path, &["init"]);
    run_git(path, &["config", "user.email", "test@example.com"]);
    run_git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    run_git(path, &["add", "."]);
    run_git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Git repository whose `setup.py` prints `metadata` when run with [`FAKE_PYTHON`].
pub(crate) fn create_test_project(metadata: &str) -> TempDir {
    let temp_dir = create_test_repo();
    write_fake_descriptor(temp_dir.path(), metadata);
    temp_dir
}

/// Write a `setup.py` shell script that prints `metadata` verbatim.
pub(crate) fn write_fake_descriptor(root: &Path, metadata: &str) {
    let escaped = metadata.replace('\'', r"'\''");
    std::fs::write(
        root.join("setup.py"),
        format!("printf '%s' '{}'\n", escaped),
    )
    .unwrap();
}

/// Shell script at `dir/name` that prints `stdout` verbatim, with the given mode.
#[cfg(unix)]
pub(crate) fn write_stub_tool(dir: &Path, name: &str, stdout: &str, mode: u32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let escaped = stdout.replace('\'', r"'\''");
    std::fs::write(&path, format!("#!/bin/sh\nprintf '%s' '{}'\n", escaped)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
    path
}

pub(crate) fn run_git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}
