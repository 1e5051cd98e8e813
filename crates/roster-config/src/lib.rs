//! Roster loading for team queries.
//!
//! A roster is a TOML file named `.roster.toml` listing members and the teams they
//! belong to. The roster closest to the working directory is used, falling back to
//! `~/.roster.toml`. A loaded roster supplies the two inputs query evaluation needs:
//! the universe of names and the team membership table.

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

use roster_query::{NameSet, Team, TeamTable};
use serde::Serialize;
use tracing::debug;

pub use discovery::{ROSTER_FILENAME, discover_roster_file, global_roster_path, is_global_roster};
pub use error::RosterError;
pub use parse::{RawMember, RawRoster, parse_roster_file, parse_roster_str};
pub use templates::roster_template;
pub use validate::RosterWarning;
use validate::validate_roster;

/// A roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Name used to refer to the member in queries.
    pub name: String,
    /// Teams the member belongs to, in file order.
    pub teams: Vec<Team>,
}

/// A loaded roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Members in file order.
    pub members: Vec<Member>,
    /// File the roster was loaded from, if any.
    pub source: Option<PathBuf>,
}

impl Roster {
    /// Loads the roster for a working directory.
    ///
    /// Returns an empty roster if no roster file is found.
    pub fn load(cwd: &Path) -> Result<Self, RosterError> {
        match discover_roster_file(cwd) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!(cwd = %cwd.display(), "no roster file found");
                Ok(Self::default())
            }
        }
    }

    /// Loads a roster from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, RosterError> {
        let raw = parse_roster_file(path)?;
        let roster = Self::from_raw(raw, Some(path.to_path_buf()));
        debug!(
            path = %path.display(),
            members = roster.members.len(),
            "loaded roster"
        );
        Ok(roster)
    }

    /// Builds a roster from a parsed file.
    pub fn from_raw(raw: RawRoster, source: Option<PathBuf>) -> Self {
        let members = raw
            .member
            .into_iter()
            .map(|m| Member {
                name: m.name,
                teams: m.teams,
            })
            .collect();
        Self { members, source }
    }

    /// Returns true if the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members whose name is not blank.
    fn named_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| !m.name.trim().is_empty())
    }

    /// Returns the universe of names: every non-blank member name.
    pub fn names(&self) -> NameSet {
        self.named_members().map(|m| m.name.clone()).collect()
    }

    /// Returns the names on one team, in roster order, without repeats.
    ///
    /// Blank names are skipped, as in [`Roster::names`].
    pub fn members_of(&self, team: Team) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for member in self.named_members() {
            if member.teams.contains(&team) && !names.contains(&member.name.as_str()) {
                names.push(&member.name);
            }
        }
        names
    }

    /// Returns the team membership table.
    ///
    /// Teams with no members are left out.
    pub fn team_table(&self) -> TeamTable {
        Team::ALL
            .into_iter()
            .filter_map(|team| {
                let members = self.members_of(team);
                (!members.is_empty())
                    .then(|| (team, members.into_iter().map(String::from).collect()))
            })
            .collect()
    }

    /// Validates the roster and returns any warnings.
    pub fn validate(&self) -> Vec<RosterWarning> {
        validate_roster(self)
    }
}
