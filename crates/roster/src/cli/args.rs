//! Clap argument definitions for the `roster` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster - Select people by team with boolean queries")]
pub struct Cli {
    /// Use this roster file instead of searching for .roster.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `roster query`.
#[derive(Args, Debug, Clone)]
pub struct QueryCommand {
    /// Queries to evaluate
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Fail on names that are not in the roster instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `roster check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Queries to validate against the roster
    pub queries: Vec<String>,
}

/// Arguments for `roster explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    /// Query to explain
    pub query: String,
}

/// Arguments for `roster init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.roster.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing roster file
    #[arg(long)]
    pub force: bool,
}

/// Supported `roster` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the names matching each query
    #[command(after_help = "\
QUERY SYNTAX:
  name              A single person
  Team              Everyone on a team (Software, Mechanical, Electrical,
                    Systems, Admin, Social)
  *                 Everyone in the roster
  !token            Everyone except; applies to one token, never to (...)
  a and b           Both
  a or b            Either
  (expr)            Grouping

Each level takes two or three operands. Three operands group to the left,
so 'a and b or c' means '(a and b) or c'. Use parentheses for longer chains.

EXAMPLES:
  roster query Software
  roster query 'Software or Admin'
  roster query 'Software and !alice'
  roster query '(Software or Admin) and !dave'
  roster query --strict 'alice or bob'")]
    Query(QueryCommand),

    /// Validate the roster and optionally some queries
    Check(CheckCommand),

    /// Show how a query is tokenized and grouped
    Explain(ExplainCommand),

    /// List teams and their members
    Teams,

    /// Initialize a roster file in the current directory
    Init(InitCommand),
}

/// Parses CLI arguments, printing compact help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom top-level help listing commands and global options.
fn print_command_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: roster [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("      --roster <PATH>  Use this roster file instead of searching for .roster.toml");
    println!("  -v, --verbose...     Increase log verbosity");
    println!("  -h, --help           Print help");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses arguments as if given on the command line.
    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(["roster"].iter().chain(args)).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn query_collects_multiple_queries() {
        let cli = parse(&["query", "--strict", "Software", "alice or bob"]);
        let Commands::Query(cmd) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(cmd.queries, vec!["Software", "alice or bob"]);
        assert!(cmd.strict);
        assert!(!cmd.json);
    }

    #[test]
    fn query_requires_an_argument() {
        let result = Cli::try_parse_from(["roster", "query"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = parse(&["teams", "--roster", "/tmp/r.toml", "-vv"]);
        assert_eq!(cli.roster, Some(PathBuf::from("/tmp/r.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Teams));
    }

    #[test]
    fn check_queries_are_optional() {
        let cli = parse(&["check"]);
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check command");
        };
        assert!(cmd.queries.is_empty());
    }
}
