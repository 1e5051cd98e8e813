//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use roster_config::Roster;
use tracing::info;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded roster (empty if no roster file was found).
    pub roster: Roster,
}

impl CommandContext {
    /// Loads the current directory and roster.
    ///
    /// An explicit `roster_path` bypasses discovery; relative paths resolve against
    /// the current directory.
    pub fn load(roster_path: Option<&Path>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let roster = match roster_path {
            Some(path) => load_roster_file_or_failure(&cwd.join(path))?,
            None => load_roster_or_failure(&cwd)?,
        };
        if let Some(source) = &roster.source {
            info!(path = %source.display(), members = roster.members.len(), "using roster");
        }
        Ok(Self { cwd, roster })
    }

    /// Loads only the current directory, skipping roster parsing.
    ///
    /// Used for commands like `init` or `explain` that should work even when an
    /// existing roster file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            roster: Roster::default(),
        })
    }

    /// Ensures the roster has at least one member, optionally printing an init hint.
    pub fn require_members(&self, show_init_hint: bool) -> Result<(), ExitCode> {
        if self.roster.is_empty() {
            match &self.roster.source {
                Some(path) => eprintln!("error: roster has no members: {}", path.display()),
                None => eprintln!("error: no roster file found"),
            }
            if show_init_hint {
                eprintln!("Run 'roster init' to create a roster file, then add members.");
            }
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Discovers and loads the roster for a directory or exits with an error.
fn load_roster_or_failure(cwd: &Path) -> Result<Roster, ExitCode> {
    Roster::load(cwd).map_err(|e| {
        eprintln!("error: failed to load roster: {e}");
        ExitCode::FAILURE
    })
}

/// Loads a specific roster file or exits with an error.
fn load_roster_file_or_failure(path: &Path) -> Result<Roster, ExitCode> {
    Roster::load_from_file(path).map_err(|e| {
        eprintln!("error: failed to load roster: {e}");
        ExitCode::FAILURE
    })
}
