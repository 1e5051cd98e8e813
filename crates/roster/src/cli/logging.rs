//! Log output for the CLI.
//!
//! Logs go to stderr so they never mix with query results on stdout.

use std::io;

use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for a `-v` count.
fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the log filter. `RUST_LOG` takes precedence over `-v`.
fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Installs the global subscriber.
///
/// If a subscriber is already set, this does nothing.
pub fn init(verbose: u8) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
