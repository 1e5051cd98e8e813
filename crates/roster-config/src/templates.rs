//! Roster templates for `roster init`.
//!
//! The template is stored as a valid TOML file and returned as a commented-out
//! example, so a freshly initialized roster is empty until edited.

/// Example roster (valid TOML).
const ROSTER_TEMPLATE: &str = include_str!("../templates/roster.toml");

/// Returns the roster template as a commented-out example.
pub fn roster_template() -> String {
    comment_template(ROSTER_TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}
