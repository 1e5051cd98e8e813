//! Test helpers shared across roster-config unit tests.
//!
//! Kept behind `cfg(test)` to avoid leaking into the public API surface.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::ROSTER_FILENAME;

/// A small roster used across tests.
pub const SAMPLE_ROSTER: &str = r#"
[[member]]
name = "alice"
teams = ["Software", "Systems"]

[[member]]
name = "bob"
teams = "Software"

[[member]]
name = "carol"
team = "Admin"

[[member]]
name = "dave"
"#;

/// Temporary directory utility for tests.
pub struct TestDir {
    /// Owned temporary directory, removed on drop.
    root: TempDir,
}

impl TestDir {
    /// Creates a new temporary directory tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the path to the root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory relative to the root.
    pub fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a `.roster.toml` with the sample roster in the given subdirectory.
    pub fn create_roster(&self, rel_path: &str) -> PathBuf {
        self.create_roster_with_content(rel_path, SAMPLE_ROSTER)
    }

    /// Writes a `.roster.toml` with the sample roster at the root.
    pub fn create_roster_at_root(&self) -> PathBuf {
        let roster = self.root.path().join(ROSTER_FILENAME);
        fs::write(&roster, SAMPLE_ROSTER).unwrap();
        roster
    }

    /// Writes a `.roster.toml` with custom contents in the given subdirectory.
    pub fn create_roster_with_content(&self, rel_path: &str, content: &str) -> PathBuf {
        let dir = self.root.path().join(rel_path);
        fs::create_dir_all(&dir).unwrap();
        let roster = dir.join(ROSTER_FILENAME);
        fs::write(&roster, content).unwrap();
        roster
    }
}
