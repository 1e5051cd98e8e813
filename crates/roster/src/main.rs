//! Command-line interface for the `roster` team query tool.

use std::process::ExitCode;

use roster::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let loaded = match &cli.command {
        Commands::Explain(_) | Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(cli.roster.as_deref()),
    };
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
