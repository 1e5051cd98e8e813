//! Query validation.
//!
//! Checks that every leaf of a query names `*`, a team, or a known name. Evaluation
//! tolerates unknown names, so callers that want typos reported run this first.

use crate::{
    ast::{Operand, QueryNode},
    error::QueryError,
    eval::{NEGATION, WILDCARD},
    team::{NameSet, Team},
};

/// Returns whether a leaf token refers to something that exists.
///
/// One leading `!` is stripped; whatever remains must be `*`, a team, or a name.
fn is_known(token: &str, names: &NameSet) -> bool {
    let target = token.strip_prefix(NEGATION).unwrap_or(token);
    target == WILDCARD || Team::from_label(target).is_some() || names.contains(target)
}

/// Returns the first unknown literal in an operand, depth-first.
fn first_unknown<'a>(operand: &'a Operand, names: &NameSet) -> Option<&'a str> {
    match operand {
        Operand::Literal(token) => (!is_known(token, names)).then_some(token.as_str()),
        Operand::Subquery(node) => verify(node, names),
    }
}

/// Returns the first literal that is not `*`, a team, or a member of `names`.
///
/// The tree is walked depth-first, left before right. The token is returned as
/// written, including any `!` prefix.
pub fn verify<'a>(node: &'a QueryNode, names: &NameSet) -> Option<&'a str> {
    first_unknown(&node.left, names).or_else(|| first_unknown(&node.right, names))
}

/// Like [`verify`], but reports an unknown literal as an error.
pub fn validate(node: &QueryNode, names: &NameSet) -> Result<(), QueryError> {
    match verify(node, names) {
        Some(token) => Err(QueryError::unknown_token(token)),
        None => Ok(()),
    }
}
