//! Shared testing utilities for bistro integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated storefront directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the storefront runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to a persisted state blob under the default storage directory.
    pub fn state_file(&self, key: &str) -> PathBuf {
        self.work_dir.join(".bistro").join(key)
    }

    /// Write a `bistro.toml` in the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("bistro.toml"), content)
            .expect("Failed to write test config");
    }

    /// Build a command for invoking the compiled `bistro` binary in the work
    /// directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("bistro").expect("Failed to locate bistro binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }
}
