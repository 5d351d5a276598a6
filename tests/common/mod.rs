#![allow(dead_code)]

use std::fs;
use std::path::Path;

use kollektor::Fields;
use serde_json::Value;
use tempfile::TempDir;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Lays out a small monorepo with one manifest and one readme per package.
    pub fn create_monorepo(&self) {
        self.create_file("package.json", r#"{"name": "root", "private": true}"#);
        self.create_file("packages/core/package.json", r#"{"name": "core"}"#);
        self.create_file("packages/core/README.md", "  Core package\n");
        self.create_file("packages/cli/package.json", r#"{"name": "cli"}"#);
        self.create_file("packages/cli/README.md", "\nCommand line\n\n");
        self.create_file("packages/cli/src/index.js", "");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwraps a JSON object literal into handler output.
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}
