//! Shared testing harness for `routegen` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const URI_CONFIG: &str = "config/appUriConfig.json";

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `routegen` binary within the project.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("routegen").expect("Failed to locate routegen binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Run `routegen new` with every input supplied as a flag, so no prompt is shown.
    pub(crate) fn new_service(
        &self,
        name: &str,
        sub: Option<&str>,
        gateway: &str,
        micro: &str,
    ) -> Command {
        let mut cmd = self.cli();
        cmd.args(["new", "--name", name, "--gateway-url", gateway, "--microservice-url", micro]);
        if let Some(sub) = sub {
            cmd.args(["--sub", sub]);
        }
        cmd
    }

    /// Absolute path of a project-relative file.
    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        self.write_bytes(relative, content.as_bytes());
    }

    pub(crate) fn write_bytes(&self, relative: &str, content: &[u8]) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parse the URI config in the project as JSON.
    pub(crate) fn uri_config(&self) -> Value {
        serde_json::from_str(&self.read(URI_CONFIG)).expect("URI config should be valid JSON")
    }

    /// Every file under the project, as sorted project-relative paths.
    pub(crate) fn files(&self) -> Vec<String> {
        let mut found = Vec::new();
        collect_files(&self.work_dir, &self.work_dir, &mut found);
        found.sort();
        found
    }
}

fn collect_files(root: &Path, dir: &Path, found: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read directory entry").path();
        if path.is_dir() {
            collect_files(root, &path, found);
        } else {
            let relative = path.strip_prefix(root).expect("path under root");
            found.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}
