//! Roster file parsing.
//!
//! Parses a `.roster.toml` file into a `RawRoster` that mirrors the TOML schema.

use std::{fs, path::Path};

use roster_query::Team;
use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::RosterError;

/// Raw roster as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRoster {
    /// Member entries, in file order.
    pub member: Vec<RawMember>,
}

/// Raw member entry from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    /// The member's name, as used in queries.
    pub name: String,
    /// Teams the member belongs to.
    /// Accepts either a single label or an array of labels.
    #[serde(default, alias = "team")]
    #[serde_as(as = "OneOrMany<_>")]
    pub teams: Vec<Team>,
}

/// Parses a roster file from disk.
pub fn parse_roster_file(path: &Path) -> Result<RawRoster, RosterError> {
    let contents = fs::read_to_string(path).map_err(|source| RosterError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_roster_str(&contents, path)
}

/// Parses a roster from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_roster_str(contents: &str, path: &Path) -> Result<RawRoster, RosterError> {
    toml::from_str(contents).map_err(|source| RosterError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a roster from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_roster(contents: &str) -> Result<RawRoster, TomlError> {
    toml::from_str(contents)
}
