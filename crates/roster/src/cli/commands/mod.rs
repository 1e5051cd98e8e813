//! Command implementations and dispatch.

pub mod check;
pub mod explain;
pub mod init;
pub mod query;
pub mod teams;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Query(cmd) => query::run(ctx, &cmd),
        Commands::Check(cmd) => check::run(ctx, &cmd),
        Commands::Explain(cmd) => explain::run(&cmd),
        Commands::Teams => teams::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}
