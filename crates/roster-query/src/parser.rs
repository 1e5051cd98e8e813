//! Query parser.
//!
//! Groups a normalized token stream into a binary tree. This is not a precedence
//! grammar: each nesting level holds two or three operands.
//!
//! # Grammar
//!
//! ```text
//! query   → group
//!         | operand OP operand
//!         | operand OP operand OP operand    ; left-associative
//! operand → TOKEN | group
//! group   → "(" query ")"
//! OP      → "and" | "or"                      ; case-insensitive
//! ```
//!
//! Tokens after a third operand are ignored. `a and b and c and d` parses as
//! `(a and b) and c`; deeper chains need parentheses.

use tracing::trace;

use crate::{
    ast::{Operand, Operator, QueryNode},
    error::{ParseError, QueryError, SyntaxError},
    lexer::{CLOSE, OPEN, tokenize},
};

/// Range-based parser over a normalized token stream.
struct Parser<'a> {
    /// Token stream to parse.
    tokens: &'a [String],
}

impl<'a> Parser<'a> {
    /// Creates a new parser over a token stream.
    fn new(tokens: &'a [String]) -> Self {
        Self { tokens }
    }

    /// Parses the whole token stream.
    fn parse(&self) -> Result<QueryNode, ParseError> {
        self.parse_range(0, self.tokens.len())
    }

    /// Parses the tokens in `start..end` into a node.
    fn parse_range(&self, start: usize, end: usize) -> Result<QueryNode, ParseError> {
        trace!(start, end, "parsing token range");

        let (first, pos) = self.parse_operand(start, end)?;

        // A fully parenthesized range is its own query
        let first = match first {
            Operand::Subquery(group) if pos >= end => return Ok(*group),
            other => other,
        };

        let operator = self.parse_operator(pos, end)?;
        let (second, pos) = self.parse_operand(pos + 1, end)?;

        if pos >= end {
            return Ok(QueryNode::new(first, second, operator));
        }

        let next_operator = self.parse_operator(pos, end)?;
        let (third, pos) = self.parse_operand(pos + 1, end)?;
        if pos < end {
            trace!(ignored = end - pos, "ignoring tokens after third operand");
        }

        Ok(QueryNode::new(
            Operand::subquery(QueryNode::new(first, second, operator)),
            third,
            next_operator,
        ))
    }

    /// Parses one operand at `at`, returning it and the position after it.
    fn parse_operand(&self, at: usize, end: usize) -> Result<(Operand, usize), ParseError> {
        let token = self.token(at, end)?;

        if token == OPEN {
            let close = self.matching_paren(at + 1, end)?;
            let group = self.parse_range(at + 1, close)?;
            return Ok((Operand::subquery(group), close + 1));
        }
        if token == CLOSE {
            return Err(ParseError::new(SyntaxError::UnmatchedParentheses, Some(at)));
        }

        Ok((Operand::literal(token), at + 1))
    }

    /// Parses the operator keyword at `at`.
    fn parse_operator(&self, at: usize, end: usize) -> Result<Operator, ParseError> {
        let token = self.token(at, end)?;
        Operator::from_keyword(token).ok_or_else(|| {
            ParseError::new(SyntaxError::InvalidOperator(token.to_string()), Some(at))
        })
    }

    /// Finds the `)` matching an already-consumed `(`, scanning from `start`.
    fn matching_paren(&self, start: usize, end: usize) -> Result<usize, ParseError> {
        let mut depth = 0usize;
        for (offset, token) in self.tokens[start..end].iter().enumerate() {
            if token == OPEN {
                depth += 1;
            } else if token == CLOSE {
                if depth == 0 {
                    return Ok(start + offset);
                }
                depth -= 1;
            }
        }
        Err(ParseError::new(
            SyntaxError::UnmatchedParentheses,
            Some(start.saturating_sub(1)),
        ))
    }

    /// Returns the token at `at`, or an end-of-query error if `at` is outside the range.
    fn token(&self, at: usize, end: usize) -> Result<&'a str, ParseError> {
        if at < end {
            Ok(self.tokens[at].as_str())
        } else {
            Err(ParseError::new(SyntaxError::UnexpectedEnd, None))
        }
    }
}

/// Parses a query string into a tree.
///
/// Errors carry the query text and the normalized token stream so they can point at
/// the offending token. No partial tree is ever returned.
pub fn parse(input: &str) -> Result<QueryNode, QueryError> {
    let tokens = tokenize(input).map_err(|err| QueryError::from(err).with_query(input))?;
    let result = Parser::new(&tokens).parse();
    result.map_err(|err| {
        QueryError::from(err)
            .with_query(input)
            .with_tokens(tokens)
    })
}

/// Parses an already-normalized token stream.
pub fn parse_tokens(tokens: &[String]) -> Result<QueryNode, ParseError> {
    Parser::new(tokens).parse()
}
