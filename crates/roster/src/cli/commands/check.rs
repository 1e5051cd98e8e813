//! Implementation of `roster check`.

use std::process::ExitCode;

use roster_config::is_global_roster;
use roster_query::{NameSet, QueryError, parse};

use crate::cli::{
    args::CheckCommand,
    context::CommandContext,
    output::{dim, indent, subheader, warning},
};

/// Parses a query and checks every literal against the roster's names.
fn check_query(query: &str, names: &NameSet) -> Result<(), QueryError> {
    let node = parse(query)?;
    node.validate(names).map_err(|e| e.with_query(query))
}

/// Reports roster warnings, then parses and validates each query.
///
/// Exits with failure if anything is reported.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    let roster = &ctx.roster;
    let mut problems = 0;

    println!("{}", subheader("Roster:"));
    match &roster.source {
        Some(path) => {
            let scope = if is_global_roster(path) { "global, " } else { "" };
            println!(
                "   {} {}",
                path.display(),
                dim(&format!("({scope}{} members)", roster.members.len()))
            );
        }
        None => println!("   {}", dim("(no roster file found)")),
    }
    println!();

    let warnings = roster.validate();
    if !warnings.is_empty() {
        println!("{}", subheader("Warnings:"));
        for w in &warnings {
            println!("   {} {w}", warning("warning:"));
        }
        println!();
        problems += warnings.len();
    }

    if !cmd.queries.is_empty() {
        let names = roster.names();
        println!("{}", subheader("Queries:"));
        for query in &cmd.queries {
            match check_query(query, &names) {
                Ok(()) => println!("   {} {query}", dim("ok")),
                Err(e) => {
                    println!("{}", indent(&e.to_string(), "   "));
                    problems += 1;
                }
            }
        }
        println!();
    }

    if problems == 0 {
        println!("No issues found.");
        ExitCode::SUCCESS
    } else {
        let noun = if problems == 1 { "issue" } else { "issues" };
        println!("{problems} {noun} found.");
        ExitCode::FAILURE
    }
}
