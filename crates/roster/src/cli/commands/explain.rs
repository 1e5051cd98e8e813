//! Implementation of `roster explain`.

use std::process::ExitCode;

use roster_query::{NEGATION, QueryError, QueryNode, Team, WILDCARD, parse_tokens, tokenize};

use crate::cli::{
    args::ExplainCommand,
    output::{dim, indent, subheader},
};

/// Describes what a literal refers to.
fn describe_literal(token: &str) -> String {
    let (negated, target) = match token.strip_prefix(NEGATION) {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let kind = if target == WILDCARD {
        "everyone".to_string()
    } else if let Some(team) = Team::from_label(target) {
        format!("team {team}")
    } else {
        format!("name '{target}'")
    };
    if negated {
        format!("everyone except {kind}")
    } else {
        kind
    }
}

/// Tokenizes and parses a query, attaching context to any error.
fn explain_query(query: &str) -> Result<(Vec<String>, QueryNode), QueryError> {
    let tokens = tokenize(query).map_err(|e| QueryError::from(e).with_query(query))?;
    let node = parse_tokens(&tokens).map_err(|e| {
        QueryError::from(e)
            .with_query(query)
            .with_tokens(tokens.clone())
    })?;
    Ok((tokens, node))
}

/// Prints the normalized tokens, the tree, and the canonical form of a query.
pub fn run(cmd: &ExplainCommand) -> ExitCode {
    let (tokens, node) = match explain_query(&cmd.query) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", subheader("Tokens:"));
    println!("   {}", tokens.join(" "));
    println!();

    println!("{}", subheader("Tree:"));
    println!("{}", indent(&node.to_string(), "   "));
    println!();

    println!("{}", subheader("Canonical:"));
    println!("   {}", node.to_query_string());
    println!();

    println!("{}", subheader("Literals:"));
    let literals = node.literals();
    let width = literals.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for literal in literals {
        println!("   {literal:width$}  {}", dim(&describe_literal(literal)));
    }

    ExitCode::SUCCESS
}
