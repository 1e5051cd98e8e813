//! Error types for query parsing and validation.
//!
//! Syntax errors abort parsing. Validation errors come only from the optional
//! validation pass; evaluation itself never fails.

use std::{error::Error, fmt};

use thiserror::Error;

/// The ways a query can be syntactically malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// `!` directly precedes `(` or `)`.
    #[error("invalid '!' placement: it can only be used before a name")]
    InvalidNegation,

    /// A group is never closed, or a `)` appears where an operand was expected.
    #[error("unmatched parentheses")]
    UnmatchedParentheses,

    /// The query ended where an operator or operand was expected.
    #[error("unexpected end of query")]
    UnexpectedEnd,

    /// A token in operator position is neither `and` nor `or`.
    #[error("invalid operator: {0}")]
    InvalidOperator(String),
}

/// A literal in the query that refers to nothing known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The token is not `*`, a team, or a known name.
    #[error("unknown team or name: {0}")]
    UnknownToken(String),
}

/// Syntax error raised by the parser, with the index of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: SyntaxError,
    /// Index into the normalized token stream, if a specific token is at fault.
    pub token_index: Option<usize>,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: SyntaxError, token_index: Option<usize>) -> Self {
        Self { kind, token_index }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(idx) = self.token_index {
            write!(f, "at token {}: {}", idx, self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Error for ParseError {}

/// A query error with enough context to point at the problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// The kind of error that occurred.
    pub kind: QueryErrorKind,
    /// The original query string (if available).
    pub query: Option<String>,
    /// The normalized token stream (empty if normalization itself failed).
    pub tokens: Vec<String>,
}

/// The specific kind of query error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// The query could not be parsed.
    Syntax {
        /// Underlying syntax error.
        error: SyntaxError,
        /// Index of the offending token in [`QueryError::tokens`].
        token_index: Option<usize>,
    },
    /// The query parsed but references an unknown team or name.
    Validation(ValidationError),
}

impl QueryError {
    /// Creates a syntax error.
    pub fn syntax(error: SyntaxError, token_index: Option<usize>) -> Self {
        Self {
            kind: QueryErrorKind::Syntax { error, token_index },
            query: None,
            tokens: Vec::new(),
        }
    }

    /// Creates a validation error for an unknown token.
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Validation(ValidationError::UnknownToken(token.into())),
            query: None,
            tokens: Vec::new(),
        }
    }

    /// Sets the query string for this error.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the normalized tokens for this error.
    pub fn with_tokens(mut self, tokens: Vec<String>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Returns the syntax error, if this is one.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match &self.kind {
            QueryErrorKind::Syntax { error, .. } => Some(error),
            QueryErrorKind::Validation(_) => None,
        }
    }

    /// Returns the validation error, if this is one.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match &self.kind {
            QueryErrorKind::Validation(error) => Some(error),
            QueryErrorKind::Syntax { .. } => None,
        }
    }

    /// Returns the error message without context.
    pub fn message(&self) -> String {
        match &self.kind {
            QueryErrorKind::Syntax { error, .. } => error.to_string(),
            QueryErrorKind::Validation(error) => error.to_string(),
        }
    }

    /// Returns a suggestion for common errors.
    pub fn suggestion(&self) -> Option<&'static str> {
        match &self.kind {
            QueryErrorKind::Syntax { error, .. } => match error {
                SyntaxError::InvalidNegation => {
                    Some("Negate each name or team individually, e.g. '!Admin and !Social'")
                }
                SyntaxError::UnmatchedParentheses => {
                    Some("Check that every ( has a matching )")
                }
                SyntaxError::UnexpectedEnd => {
                    Some("Join names and teams with 'and' or 'or', e.g. 'Software or alice'")
                }
                SyntaxError::InvalidOperator(_) => {
                    Some("Operators are 'and' and 'or'; group longer chains with parentheses")
                }
            },
            QueryErrorKind::Validation(_) => {
                Some("Use *, a team (Software, Mechanical, Electrical, Systems, Admin, Social) or a roster name")
            }
        }
    }

    /// Byte offset of the offending token within the space-joined token stream.
    fn token_offset(&self) -> Option<usize> {
        let QueryErrorKind::Syntax {
            token_index: Some(idx),
            ..
        } = &self.kind
        else {
            return None;
        };
        if *idx >= self.tokens.len() {
            return None;
        }
        Some(
            self.tokens[..*idx]
                .iter()
                .map(|t| t.chars().count() + 1)
                .sum(),
        )
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match &self.kind {
            QueryErrorKind::Syntax { .. } => "query syntax error",
            QueryErrorKind::Validation(_) => "query error",
        };

        writeln!(f, "{}: {}", prefix, self.message())?;

        // Point at the offending token in the normalized stream when we know it
        if let Some(offset) = self.token_offset() {
            writeln!(f, "  {}", self.tokens.join(" "))?;
            writeln!(f, "  {}^", " ".repeat(offset))?;
        } else if let Some(query) = &self.query {
            writeln!(f, "  {}", query)?;
        }

        if let Some(suggestion) = self.suggestion() {
            write!(f, "hint: {}", suggestion)?;
        }

        Ok(())
    }
}

impl Error for QueryError {}

impl From<ParseError> for QueryError {
    fn from(err: ParseError) -> Self {
        Self::syntax(err.kind, err.token_index)
    }
}
