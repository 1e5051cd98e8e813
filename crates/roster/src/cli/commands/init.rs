//! Implementation of `roster init`.

use std::{fs, path::PathBuf, process::ExitCode};

use roster_config::{ROSTER_FILENAME, RosterError, global_roster_path, roster_template};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{dim, indent, subheader},
};

/// Picks where the new roster goes.
///
/// Running in the home directory is treated like `--global`.
fn target_path(ctx: &CommandContext, global: bool) -> Result<PathBuf, RosterError> {
    let global_path = global_roster_path();
    let is_home_dir = global_path
        .as_deref()
        .and_then(|p| p.parent())
        .is_some_and(|home| home == ctx.cwd);

    if global || is_home_dir {
        global_path.ok_or(RosterError::NoHomeDirectory)
    } else {
        Ok(ctx.cwd.join(ROSTER_FILENAME))
    }
}

/// Writes a commented roster template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let roster_path = match target_path(ctx, cmd.global) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if roster_path.exists() && !cmd.force {
        eprintln!("error: roster file already exists: {}", roster_path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = roster_template();
    if let Err(e) = fs::write(&roster_path, &template) {
        eprintln!("error: failed to write {}: {e}", roster_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", roster_path.display());
    println!();
    println!("{}", subheader("Roster written:"));
    println!("{}", dim(&indent(&template, "   ")));
    println!();
    println!("Uncomment and edit the example members, then try 'roster teams'.");

    ExitCode::SUCCESS
}
