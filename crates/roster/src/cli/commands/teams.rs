//! Implementation of `roster teams`.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use roster_config::Roster;
use roster_query::Team;

use crate::cli::{context::CommandContext, output::dim};

/// Builds the team table: one row per team with its member count and members.
fn team_table(roster: &Roster) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Team", "Count", "Members"]);

    for team in Team::ALL {
        let members = roster.members_of(team);
        table.add_row(vec![
            Cell::new(team.label()),
            Cell::new(members.len()).set_alignment(CellAlignment::Right),
            Cell::new(members.join(", ")),
        ]);
    }
    table
}

/// Lists every team with its members.
pub fn run(ctx: &CommandContext) -> ExitCode {
    if let Err(code) = ctx.require_members(true) {
        return code;
    }

    let roster = &ctx.roster;
    println!("{}", team_table(roster));

    let unassigned: Vec<&str> = roster
        .members
        .iter()
        .filter(|m| m.teams.is_empty())
        .map(|m| m.name.as_str())
        .collect();
    if !unassigned.is_empty() {
        println!();
        println!(
            "{} {}",
            dim("Not on any team:"),
            unassigned.join(", ")
        );
    }

    ExitCode::SUCCESS
}
