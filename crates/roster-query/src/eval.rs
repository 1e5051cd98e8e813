//! Query evaluation.
//!
//! Leaves resolve to a set of names, except for bare names, which stay pending until
//! they are combined with their sibling. A pending name that is not in the universe
//! contributes nothing: it empties an AND and drops out of an OR. Evaluation never
//! fails; run [`validate`](crate::validate()) first to reject unknown names instead.

use tracing::trace;

use crate::{
    ast::{Operand, Operator, QueryNode},
    team::{NameSet, Team, TeamTable},
};

/// Token standing for every known name.
pub const WILDCARD: &str = "*";

/// Prefix that negates the rest of a token.
pub const NEGATION: char = '!';

/// What a leaf token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf<'a> {
    /// `!` followed by another token.
    Not(&'a str),
    /// `*`.
    Wildcard,
    /// A team label.
    Team(Team),
    /// Anything else: a candidate name.
    Name(&'a str),
}

impl<'a> Leaf<'a> {
    /// Classifies a leaf token.
    fn classify(token: &'a str) -> Self {
        if let Some(rest) = token.strip_prefix(NEGATION) {
            Self::Not(rest)
        } else if token == WILDCARD {
            Self::Wildcard
        } else if let Some(team) = Team::from_label(token) {
            Self::Team(team)
        } else {
            Self::Name(token)
        }
    }
}

/// An operand after leaf resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolved<'a> {
    /// A concrete set of names.
    Set(NameSet),
    /// A name whose existence has not been checked yet.
    Pending(&'a str),
}

/// Evaluation inputs shared by the whole walk.
struct Evaluator<'a> {
    /// Team membership table.
    teams: &'a TeamTable,
    /// Universe of known names.
    names: &'a NameSet,
}

impl<'a> Evaluator<'a> {
    /// Evaluates a node to a set.
    fn node(&self, node: &QueryNode) -> NameSet {
        let left = self.operand(&node.left);
        let right = self.operand(&node.right);
        self.combine(node.operator, left, right)
    }

    /// Resolves one side of a node.
    fn operand<'q>(&self, operand: &'q Operand) -> Resolved<'q> {
        match operand {
            Operand::Literal(token) => self.resolve(token),
            Operand::Subquery(node) => Resolved::Set(self.node(node)),
        }
    }

    /// Resolves a leaf token.
    fn resolve<'q>(&self, token: &'q str) -> Resolved<'q> {
        let resolved = match Leaf::classify(token) {
            Leaf::Not(inner) => Resolved::Set(match self.resolve(inner) {
                Resolved::Set(set) => self.names.difference(&set).cloned().collect(),
                Resolved::Pending(name) => {
                    let mut all = self.names.clone();
                    all.remove(name);
                    all
                }
            }),
            Leaf::Wildcard => Resolved::Set(self.names.clone()),
            Leaf::Team(team) => Resolved::Set(
                self.teams
                    .get(&team)
                    .map(|members| members.iter().cloned().collect())
                    .unwrap_or_default(),
            ),
            Leaf::Name(name) => Resolved::Pending(name),
        };
        trace!(token, ?resolved, "resolved leaf");
        resolved
    }

    /// Returns whether `name` is in the universe.
    fn known(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Combines two resolved operands with an operator.
    fn combine(&self, operator: Operator, left: Resolved<'_>, right: Resolved<'_>) -> NameSet {
        let result = match (left, right) {
            (Resolved::Set(left), Resolved::Set(right)) => match operator {
                Operator::And => left.intersection(&right).cloned().collect(),
                Operator::Or => left.union(&right).cloned().collect(),
            },
            (Resolved::Set(mut set), Resolved::Pending(name))
            | (Resolved::Pending(name), Resolved::Set(mut set)) => {
                if self.known(name) {
                    set.insert(name.to_string());
                    set
                } else {
                    match operator {
                        Operator::And => NameSet::new(),
                        Operator::Or => set,
                    }
                }
            }
            (Resolved::Pending(left), Resolved::Pending(right)) => {
                let known: NameSet = [left, right]
                    .into_iter()
                    .filter(|name| self.known(name))
                    .map(String::from)
                    .collect();
                match operator {
                    Operator::And if !(self.known(left) && self.known(right)) => NameSet::new(),
                    _ => known,
                }
            }
        };
        trace!(%operator, size = result.len(), "combined operands");
        result
    }
}

/// Evaluates a query against a team table and a universe of names.
///
/// Names that are not in `names` never appear in the result and never cause an
/// error; see the module docs for exactly how they are absorbed.
pub fn evaluate(node: &QueryNode, teams: &TeamTable, names: &NameSet) -> NameSet {
    Evaluator { teams, names }.node(node)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, thread};

    use super::*;
    use crate::parse;

    fn set(names: &[&str]) -> NameSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// Software: alice, bob. Admin: carol. Universe: alice, bob, carol, dave.
    fn roster() -> (TeamTable, NameSet) {
        let teams = HashMap::from([
            (Team::Software, vec!["alice".to_string(), "bob".to_string()]),
            (Team::Admin, vec!["carol".to_string()]),
        ]);
        (teams, set(&["alice", "bob", "carol", "dave"]))
    }

    fn eval(query: &str) -> NameSet {
        let (teams, names) = roster();
        parse(query).unwrap().evaluate(&teams, &names)
    }

    #[test]
    fn worked_examples() {
        assert_eq!(eval("Software or Admin"), set(&["alice", "bob", "carol"]));
        assert_eq!(eval("Software and !alice"), set(&["bob"]));
        assert_eq!(eval("dave and bob"), set(&["dave", "bob"]));
        assert_eq!(eval("ghost or alice"), set(&["alice"]));
        assert_eq!(
            eval("(Software or Admin) and !dave"),
            set(&["alice", "bob", "carol"])
        );
    }

    #[test]
    fn wildcard_is_universe() {
        let (_, names) = roster();
        assert_eq!(eval("*"), names);
        assert_eq!(eval("* or Software"), names);
        assert_eq!(eval("* and Admin"), set(&["carol"]));
    }

    #[test]
    fn negation_complements_against_universe() {
        assert_eq!(eval("!Software"), set(&["carol", "dave"]));
        assert_eq!(eval("!*"), set(&[]));
        assert_eq!(eval("!Mechanical"), set(&["alice", "bob", "carol", "dave"]));
        assert_eq!(eval("!dave"), set(&["alice", "bob", "carol"]));
        assert_eq!(eval("! dave"), set(&["alice", "bob", "carol"]));
    }

    #[test]
    fn negating_unknown_name_removes_nothing() {
        assert_eq!(eval("!ghost"), set(&["alice", "bob", "carol", "dave"]));
    }

    #[test]
    fn double_negation() {
        assert_eq!(eval("!!Software"), set(&["alice", "bob"]));
        assert_eq!(eval("!!dave"), set(&["dave"]));
    }

    #[test]
    fn team_without_entry_is_empty() {
        assert_eq!(eval("Electrical"), set(&[]));
        assert_eq!(eval("Electrical or Admin"), set(&["carol"]));
    }

    #[test]
    fn lowercase_team_is_a_name() {
        assert_eq!(eval("software"), set(&[]));
        assert_eq!(eval("software or Admin"), set(&["carol"]));
    }

    #[test]
    fn single_name_is_self_conjunction() {
        assert_eq!(eval("alice"), set(&["alice"]));
        assert_eq!(eval("ghost"), set(&[]));
    }

    #[test]
    fn unknown_name_empties_and_keeps_or() {
        for team in ["Software", "Admin", "*", "(Software or Admin)"] {
            let alone = eval(&format!("{team} or {team}"));
            assert_eq!(eval(&format!("{team} and ghost")), set(&[]), "{team}");
            assert_eq!(eval(&format!("ghost and {team}")), set(&[]), "{team}");
            assert_eq!(eval(&format!("{team} or ghost")), alone, "{team}");
            assert_eq!(eval(&format!("ghost or {team}")), alone, "{team}");
        }
    }

    #[test]
    fn known_name_joins_set() {
        // A known name is added to its sibling set under both operators
        assert_eq!(eval("Admin and dave"), set(&["carol", "dave"]));
        assert_eq!(eval("dave or Admin"), set(&["carol", "dave"]));
        assert_eq!(eval("Software and alice"), set(&["alice", "bob"]));
    }

    #[test]
    fn two_names() {
        assert_eq!(eval("alice and dave"), set(&["alice", "dave"]));
        assert_eq!(eval("alice and ghost"), set(&[]));
        assert_eq!(eval("ghost and alice"), set(&[]));
        assert_eq!(eval("alice or ghost"), set(&["alice"]));
        assert_eq!(eval("ghost or phantom"), set(&[]));
        assert_eq!(eval("alice or dave"), set(&["alice", "dave"]));
    }

    #[test]
    fn commutative_for_two_operands() {
        let operands = ["Software", "Admin", "*", "!alice", "dave", "ghost"];
        for a in operands {
            for b in operands {
                for op in ["and", "or"] {
                    assert_eq!(
                        eval(&format!("{a} {op} {b}")),
                        eval(&format!("{b} {op} {a}")),
                        "{a} {op} {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn three_operands_group_left() {
        // (Software and !alice) or Admin = {bob, carol}
        // Software and (!alice or Admin) would be {bob}
        assert_eq!(eval("Software and !alice or Admin"), set(&["bob", "carol"]));
        assert_eq!(
            eval("Software and !alice or Admin"),
            eval("(Software and !alice) or Admin")
        );
        assert_ne!(
            eval("Software and !alice or Admin"),
            eval("Software and (!alice or Admin)")
        );
    }

    #[test]
    fn parenthesizing_preserves_result() {
        for query in [
            "Software or Admin",
            "Software and !alice",
            "dave and bob",
            "Software and !alice or Admin",
            "* and !Software or ghost",
            "Admin or dave and !carol",
        ] {
            let tree = parse(query).unwrap();
            let canonical = format!("({})", tree.to_query_string());
            assert_eq!(eval(&canonical), eval(query), "{query}");
        }
    }

    #[test]
    fn fourth_operand_has_no_effect() {
        assert_eq!(
            eval("Software or Admin or dave and ghost"),
            eval("Software or Admin or dave")
        );
        assert_eq!(
            eval("Software or Admin or dave and ghost"),
            set(&["alice", "bob", "carol", "dave"])
        );
    }

    #[test]
    fn empty_universe() {
        let teams = TeamTable::new();
        let names = NameSet::new();
        for query in ["*", "!*", "Software", "alice", "!alice", "alice or bob"] {
            assert!(parse(query).unwrap().evaluate(&teams, &names).is_empty(), "{query}");
        }
    }

    #[test]
    fn reevaluation_is_independent() {
        let tree = parse("Software or dave").unwrap();
        let (teams, names) = roster();
        let first = tree.evaluate(&teams, &names);

        let smaller = set(&["alice", "bob"]);
        assert_eq!(tree.evaluate(&teams, &smaller), set(&["alice", "bob"]));
        assert_eq!(tree.evaluate(&teams, &names), first);
    }

    #[test]
    fn concurrent_evaluation() {
        let tree = parse("(Software or Admin) and !dave").unwrap();
        let (teams, names) = roster();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| tree.evaluate(&teams, &names)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), set(&["alice", "bob", "carol"]));
            }
        });
    }

    #[test]
    fn classify_leaves() {
        assert_eq!(Leaf::classify("*"), Leaf::Wildcard);
        assert_eq!(Leaf::classify("Admin"), Leaf::Team(Team::Admin));
        assert_eq!(Leaf::classify("!Admin"), Leaf::Not("Admin"));
        assert_eq!(Leaf::classify("admin"), Leaf::Name("admin"));
        assert_eq!(Leaf::classify("**"), Leaf::Name("**"));
    }
}
