//! Isolated test environment for end-to-end CLI tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default metadata used by most tests: two categories sharing one tag name.
pub const METADATA: &str = r#"{
  "categories": {
    "Author": ["Le Guin", "Wolfe"],
    "Genre": ["fantasy", "sci-fi", "Wolfe"]
  }
}"#;

/// Isolated test environment with a temp directory holding the metadata file
/// and database, cleaned up on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    db_path: PathBuf,
    meta_path: PathBuf,
}

impl TestEnv {
    /// Creates an environment with the default metadata file.
    pub fn new() -> Self {
        Self::with_metadata(METADATA)
    }

    /// Creates an environment with a custom metadata document.
    pub fn with_metadata(metadata: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let db_path = temp_dir.path().join("catalog.sqlite");
        let meta_path = temp_dir.path().join("meta.json");
        std::fs::write(&meta_path, metadata).expect("failed to write metadata file");
        Self {
            _temp_dir: temp_dir,
            db_path,
            meta_path,
        }
    }

    /// Returns the database path.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Returns a command for the `shelf` binary pointed at this environment.
    pub fn cmd(&self) -> Command {
        self.cmd_with_database(&self.db_path)
    }

    /// Returns a command pointed at an alternate database path, keeping this
    /// environment's metadata file.
    pub fn cmd_with_database(&self, db_path: &Path) -> Command {
        let mut cmd = Command::cargo_bin("shelf").expect("failed to find shelf binary");
        cmd.arg("--database")
            .arg(db_path)
            .arg("--metadata")
            .arg(&self.meta_path);
        cmd
    }

    /// Creates an entry through the CLI, asserting success.
    pub fn add_entry(&self, title: &str, body: &str, tags: &[&str]) {
        let mut cmd = self.cmd();
        cmd.args(["new", "--title", title, "--body", body]);
        for tag in tags {
            cmd.args(["--tag", tag]);
        }
        cmd.assert().success();
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
