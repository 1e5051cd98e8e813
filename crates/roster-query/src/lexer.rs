//! Query normalizer.
//!
//! Splits a query string into whitespace-separated tokens, with parentheses always
//! standing alone and `!` always attached to the token that follows it.

use crate::error::{ParseError, SyntaxError};

/// Opening parenthesis token.
pub(crate) const OPEN: &str = "(";

/// Closing parenthesis token.
pub(crate) const CLOSE: &str = ")";

/// Surrounds every parenthesis with spaces.
fn pad_parens(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        if ch == '(' || ch == ')' {
            out.push(' ');
            out.push(ch);
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Drops any whitespace that follows a `!`.
fn glue_negation(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '!' {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
        }
    }
    out
}

/// Normalizes a query string into tokens.
///
/// A query consisting of a single token is rewritten to `token and token`, so every
/// token stream the parser sees has at least one operator.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let padded = glue_negation(&pad_parens(input));

    if padded.contains("!(") || padded.contains("!)") {
        return Err(ParseError::new(SyntaxError::InvalidNegation, None));
    }

    let mut tokens: Vec<String> = padded.split_whitespace().map(String::from).collect();

    if let [only] = tokens.as_slice() {
        let only = only.clone();
        tokens.push("and".to_string());
        tokens.push(only);
    }

    Ok(tokens)
}
