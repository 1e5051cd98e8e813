//! Roster validation.
//!
//! Reports non-fatal problems with a loaded roster.

use std::{collections::HashSet, fmt};

use roster_query::{NEGATION, Team, WILDCARD};

use crate::Roster;

/// A non-fatal warning about the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterWarning {
    /// The roster has no members.
    EmptyRoster,
    /// A member has an empty or whitespace-only name.
    BlankName {
        /// Position of the member in the file (0-based).
        index: usize,
    },
    /// Two or more entries share a name.
    DuplicateMember {
        /// The repeated name.
        name: String,
    },
    /// A member belongs to no team.
    NoTeams {
        /// Name of the member.
        name: String,
    },
    /// A name cannot be written as a single query token.
    UnqueryableName {
        /// Name of the member.
        name: String,
    },
}

impl fmt::Display for RosterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoster => write!(f, "roster has no members"),
            Self::BlankName { index } => write!(f, "member #{} has a blank name", index + 1),
            Self::DuplicateMember { name } => write!(f, "member '{name}' is listed more than once"),
            Self::NoTeams { name } => write!(f, "member '{name}' is not on any team"),
            Self::UnqueryableName { name } => {
                write!(f, "member '{name}' cannot be named in a query")
            }
        }
    }
}

/// Returns whether a name survives query normalization as one plain name token.
fn is_queryable(name: &str) -> bool {
    name != WILDCARD
        && !name.starts_with(NEGATION)
        && !name.chars().any(|c| c.is_whitespace() || c == '(' || c == ')')
        && Team::from_label(name).is_none()
}

/// Validates the roster and returns any warnings.
///
/// This checks for:
/// - An empty roster
/// - Blank or duplicate names
/// - Members without teams
/// - Names that a query cannot express as a single token
pub fn validate_roster(roster: &Roster) -> Vec<RosterWarning> {
    let mut warnings = Vec::new();

    if roster.members.is_empty() {
        warnings.push(RosterWarning::EmptyRoster);
        return warnings;
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for (index, member) in roster.members.iter().enumerate() {
        let name = member.name.as_str();
        if name.trim().is_empty() {
            warnings.push(RosterWarning::BlankName { index });
            continue;
        }

        if !seen.insert(name) && reported.insert(name) {
            warnings.push(RosterWarning::DuplicateMember {
                name: name.to_string(),
            });
        }
        if member.teams.is_empty() {
            warnings.push(RosterWarning::NoTeams {
                name: name.to_string(),
            });
        }
        if !is_queryable(name) {
            warnings.push(RosterWarning::UnqueryableName {
                name: name.to_string(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Member;

    fn member(name: &str, teams: &[Team]) -> Member {
        Member {
            name: name.to_string(),
            teams: teams.to_vec(),
        }
    }

    fn roster(members: Vec<Member>) -> Roster {
        Roster {
            members,
            source: None,
        }
    }

    #[test]
    fn empty_roster_warns() {
        assert_eq!(
            validate_roster(&Roster::default()),
            vec![RosterWarning::EmptyRoster]
        );
    }

    #[test]
    fn clean_roster_has_no_warnings() {
        let r = roster(vec![
            member("alice", &[Team::Software]),
            member("bob", &[Team::Admin, Team::Social]),
        ]);
        assert!(validate_roster(&r).is_empty());
    }

    #[test]
    fn blank_name() {
        let r = roster(vec![member("alice", &[Team::Software]), member("  ", &[Team::Admin])]);
        assert_eq!(validate_roster(&r), vec![RosterWarning::BlankName { index: 1 }]);
    }

    #[test]
    fn duplicate_reported_once() {
        let r = roster(vec![
            member("alice", &[Team::Software]),
            member("alice", &[Team::Admin]),
            member("alice", &[Team::Social]),
        ]);
        assert_eq!(
            validate_roster(&r),
            vec![RosterWarning::DuplicateMember {
                name: "alice".into()
            }]
        );
    }

    #[test]
    fn member_without_teams() {
        let r = roster(vec![member("dave", &[])]);
        assert_eq!(
            validate_roster(&r),
            vec![RosterWarning::NoTeams {
                name: "dave".into()
            }]
        );
    }

    #[test]
    fn unqueryable_names() {
        for name in ["mary ann", "(x)", "!bang", "*", "Admin"] {
            let r = roster(vec![member(name, &[Team::Social])]);
            assert_eq!(
                validate_roster(&r),
                vec![RosterWarning::UnqueryableName { name: name.into() }],
                "{name}"
            );
        }
    }

    #[test]
    fn warning_display() {
        assert_eq!(
            RosterWarning::BlankName { index: 0 }.to_string(),
            "member #1 has a blank name"
        );
        assert_eq!(
            RosterWarning::NoTeams {
                name: "dave".into()
            }
            .to_string(),
            "member 'dave' is not on any team"
        );
    }
}
