//! roster: team queries over a roster file
//!
//! Selects people from a `.roster.toml` with boolean queries over team labels and
//! names, such as `(Software or Admin) and !dave`. The query language itself lives in
//! `roster-query`; roster loading lives in `roster-config`. This crate is the CLI that
//! ties the two together.

#![warn(missing_docs)]

pub mod cli;
