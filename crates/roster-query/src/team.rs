//! Team labels.
//!
//! Teams are a fixed set of categories. Query tokens match team labels exactly, so
//! `Software` is a team while `software` is treated as a name.

use std::{
    collections::{BTreeSet, HashMap},
    fmt, str,
};

use serde::{Deserialize, Serialize};

/// A set of names. Ordered so that results print deterministically.
pub type NameSet = BTreeSet<String>;

/// Team membership: each team maps to the names that belong to it, in roster order.
pub type TeamTable = HashMap<Team, Vec<String>>;

/// A roster team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// Software team.
    Software,
    /// Mechanical team.
    Mechanical,
    /// Electrical team.
    Electrical,
    /// Systems team.
    Systems,
    /// Admin team.
    Admin,
    /// Social team.
    Social,
}

impl Team {
    /// Every team, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Software,
        Self::Mechanical,
        Self::Electrical,
        Self::Systems,
        Self::Admin,
        Self::Social,
    ];

    /// Returns the label used for this team in queries and roster files.
    pub fn label(self) -> &'static str {
        match self {
            Self::Software => "Software",
            Self::Mechanical => "Mechanical",
            Self::Electrical => "Electrical",
            Self::Systems => "Systems",
            Self::Admin => "Admin",
            Self::Social => "Social",
        }
    }

    /// Looks up a team by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|team| team.label() == label)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl str::FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            let labels: Vec<&str> = Self::ALL.iter().map(|t| t.label()).collect();
            format!("unknown team '{s}', expected one of: {}", labels.join(", "))
        })
    }
}
