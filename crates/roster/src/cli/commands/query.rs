//! Implementation of `roster query`.

use std::process::ExitCode;

use roster_query::parse;
use tracing::debug;

use crate::cli::{
    args::QueryCommand,
    context::CommandContext,
    output::{QueryResult, output_query_results},
};

/// Evaluates each query against the roster and prints the selected names.
///
/// Every query is parsed before any output is written, so a bad query late in
/// the list never leaves partial results on stdout.
pub fn run(ctx: &CommandContext, cmd: &QueryCommand) -> ExitCode {
    if let Err(code) = ctx.require_members(true) {
        return code;
    }

    let roster = &ctx.roster;
    let teams = roster.team_table();
    let names = roster.names();

    let mut results = Vec::with_capacity(cmd.queries.len());
    for query in &cmd.queries {
        let node = match parse(query) {
            Ok(node) => node,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        };

        if cmd.strict
            && let Err(e) = node.validate(&names)
        {
            eprintln!("{}", e.with_query(query.as_str()));
            return ExitCode::FAILURE;
        }

        let selected = node.evaluate(&teams, &names);
        debug!(query = %query, matched = selected.len(), "evaluated query");
        results.push(QueryResult {
            query: query.clone(),
            names: selected,
        });
    }

    output_query_results(&results, cmd.json)
}
