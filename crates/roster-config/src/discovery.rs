//! Roster file discovery.
//!
//! Finds the `.roster.toml` closest to a starting directory, falling back to the
//! global `~/.roster.toml`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The roster filename.
pub const ROSTER_FILENAME: &str = ".roster.toml";

/// Discovers the roster file for the given directory.
///
/// Walks up from `cwd` to the filesystem root and returns the first `.roster.toml`
/// found. If there is none, returns `~/.roster.toml` when it exists.
pub fn discover_roster_file(cwd: &Path) -> Option<PathBuf> {
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let roster_path = dir.join(ROSTER_FILENAME);
        if roster_path.is_file() {
            return Some(roster_path);
        }
        current = dir.parent();
    }

    global_roster_path().filter(|path| path.is_file())
}

/// Returns the path to the global roster file (`~/.roster.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_roster_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(ROSTER_FILENAME))
}

/// Checks if a path is the global roster file.
pub fn is_global_roster(path: &Path) -> bool {
    global_roster_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn finds_roster_in_cwd() {
        let dir = TestDir::new();
        let roster = dir.create_roster_at_root();

        assert_eq!(discover_roster_file(dir.path()), Some(roster));
    }

    #[test]
    fn finds_roster_in_parent() {
        let dir = TestDir::new();
        let roster = dir.create_roster_at_root();
        let nested = dir.create_dir("a/b/c");

        assert_eq!(discover_roster_file(&nested), Some(roster));
    }

    #[test]
    fn closest_roster_wins() {
        let dir = TestDir::new();
        dir.create_roster_at_root();
        let inner = dir.create_roster("team");
        let nested = dir.create_dir("team/sub");

        assert_eq!(discover_roster_file(&nested), Some(inner));
    }

    #[test]
    fn directory_named_like_roster_is_skipped() {
        let dir = TestDir::new();
        let roster = dir.create_roster_at_root();
        dir.create_dir("inner/.roster.toml");
        let inner = dir.path().join("inner");

        assert_eq!(discover_roster_file(&inner), Some(roster));
    }

    #[test]
    fn global_path_uses_filename() {
        if let Some(path) = global_roster_path() {
            assert!(path.ends_with(ROSTER_FILENAME));
            assert!(is_global_roster(&path));
        }
        assert!(!is_global_roster(Path::new("/tmp/.roster.toml.bak")));
    }
}
