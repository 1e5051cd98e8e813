//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use roster_query::NameSet;
use serde::Serialize;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Indents every line of `content` by `prefix`.
pub fn indent(content: &str, prefix: &str) -> String {
    content
        .lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The names selected by one query.
pub struct QueryResult {
    /// The query as given on the command line.
    pub query: String,
    /// Selected names, sorted.
    pub names: NameSet,
}

/// JSON output for a single query's results.
#[derive(Serialize)]
struct JsonQueryResults<'a> {
    /// The original query string.
    query: &'a str,
    /// Selected names, sorted.
    names: Vec<&'a str>,
    /// Number of names selected.
    count: usize,
}

/// JSON output for `roster query`.
#[derive(Serialize)]
struct JsonQueryOutput<'a> {
    /// Results grouped by query.
    queries: Vec<JsonQueryResults<'a>>,
}

/// Serializes query results to pretty-printed JSON.
fn results_to_json(results: &[QueryResult]) -> serde_json::Result<String> {
    let output = JsonQueryOutput {
        queries: results
            .iter()
            .map(|r| JsonQueryResults {
                query: &r.query,
                names: r.names.iter().map(String::as_str).collect(),
                count: r.names.len(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output)
}

/// Outputs query results as text or JSON.
///
/// A single query prints bare names, one per line, so the output pipes cleanly.
/// Several queries each get a header with the match count.
pub fn output_query_results(results: &[QueryResult], json: bool) -> ExitCode {
    if json {
        match results_to_json(results) {
            Ok(json_str) => println!("{json_str}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if let [only] = results {
        for name in &only.names {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            header(&result.query),
            dim(&format!("({})", result.names.len()))
        );
        if result.names.is_empty() {
            println!("   {}", dim("(no matches)"));
        }
        for name in &result.names {
            println!("   {name}");
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(query: &str, names: &[&str]) -> QueryResult {
        QueryResult {
            query: query.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn json_shape() {
        let json = results_to_json(&[
            result("Software", &["bob", "alice"]),
            result("ghost", &[]),
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["queries"][0]["query"], "Software");
        assert_eq!(value["queries"][0]["names"][0], "alice");
        assert_eq!(value["queries"][0]["names"][1], "bob");
        assert_eq!(value["queries"][0]["count"], 2);
        assert_eq!(value["queries"][1]["count"], 0);
        assert!(value["queries"][1]["names"].as_array().unwrap().is_empty());
    }

    #[test]
    fn indent_prefixes_each_line() {
        assert_eq!(indent("And\n  Or", "   "), "   And\n     Or");
    }

    #[test]
    fn styles_wrap_and_reset() {
        let styled = warning("careful");
        assert!(styled.starts_with(colors::YELLOW));
        assert!(styled.ends_with(colors::RESET));
        assert!(styled.contains("careful"));
    }
}
