//! Query syntax tree.
//!
//! A query is a binary tree. Every node joins exactly two operands with one operator;
//! leaves are raw tokens, resolved only at evaluation time.

use std::fmt;

use crate::{
    error::QueryError,
    eval,
    team::{NameSet, TeamTable},
    validate,
};

/// A binary operator joining two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Both operands must hold.
    And,
    /// Either operand may hold.
    Or,
}

impl Operator {
    /// Parses an operator keyword, ignoring case.
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(Self::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Self::Or)
        } else {
            None
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

/// One side of a query node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A single token: `*`, a team label, or a name, optionally prefixed with `!`.
    Literal(String),
    /// A nested query.
    Subquery(Box<QueryNode>),
}

impl Operand {
    /// Creates a literal operand.
    pub fn literal(token: impl Into<String>) -> Self {
        Self::Literal(token.into())
    }

    /// Creates a subquery operand.
    pub fn subquery(node: QueryNode) -> Self {
        Self::Subquery(Box::new(node))
    }

    /// Formats the operand as query text, wrapping subqueries in parentheses.
    fn fmt_query_string(&self) -> String {
        match self {
            Self::Literal(token) => token.clone(),
            Self::Subquery(node) => format!("({})", node.to_query_string()),
        }
    }

    /// Formats the operand as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Self::Literal(token) => writeln!(f, "{}Literal({token:?})", "  ".repeat(indent)),
            Self::Subquery(node) => node.fmt_tree(f, indent),
        }
    }
}

/// A parsed query: two operands joined by an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNode {
    /// Left operand.
    pub left: Operand,
    /// Right operand.
    pub right: Operand,
    /// Operator joining the two.
    pub operator: Operator,
}

impl QueryNode {
    /// Creates a new node.
    pub fn new(left: Operand, right: Operand, operator: Operator) -> Self {
        Self {
            left,
            right,
            operator,
        }
    }

    /// Returns every literal token in the tree, left to right.
    pub fn literals(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    /// Pushes this node's literals onto `out` in depth-first order.
    fn collect_literals<'a>(&'a self, out: &mut Vec<&'a str>) {
        for operand in [&self.left, &self.right] {
            match operand {
                Operand::Literal(token) => out.push(token),
                Operand::Subquery(node) => node.collect_literals(out),
            }
        }
    }

    /// Evaluates the query. See [`eval::evaluate`].
    pub fn evaluate(&self, teams: &TeamTable, names: &NameSet) -> NameSet {
        eval::evaluate(self, teams, names)
    }

    /// Returns the first unknown literal, if any. See [`validate::verify`].
    pub fn verify(&self, names: &NameSet) -> Option<&str> {
        validate::verify(self, names)
    }

    /// Fails on the first unknown literal. See [`validate::validate`].
    pub fn validate(&self, names: &NameSet) -> Result<(), QueryError> {
        validate::validate(self, names)
    }

    /// Formats the query as fully parenthesized text.
    ///
    /// The output parses back to an identical tree.
    pub fn to_query_string(&self) -> String {
        format!(
            "{} {} {}",
            self.left.fmt_query_string(),
            self.operator,
            self.right.fmt_query_string()
        )
    }

    /// Formats the node as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let op = match self.operator {
            Operator::And => "And",
            Operator::Or => "Or",
        };
        writeln!(f, "{}{op}", "  ".repeat(indent))?;
        self.left.fmt_tree(f, indent + 1)?;
        self.right.fmt_tree(f, indent + 1)
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
