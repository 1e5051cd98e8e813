//! Team query parsing and evaluation for roster filtering.
//!
//! This crate provides a small query language for selecting people from a roster:
//!
//! - **Names**: `alice` - a single person
//! - **Teams**: `Software` - everyone on a team (labels are case-sensitive)
//! - **Wildcard**: `*` - everyone
//! - **Negation**: `!Admin` - everyone except; applies to a single token only
//! - **Operators**: `Software or Admin`, `Software and !alice` (case-insensitive)
//! - **Grouping**: `(Software or Admin) and !dave`
//!
//! Each nesting level takes two or three operands; three group to the left, so
//! `a and b or c` means `(a and b) or c`. Longer chains need parentheses.
//!
//! Names that are not in the roster never cause evaluation to fail: they contribute
//! nothing. Use [`QueryNode::validate`] to report them instead.
//!
//! # Example
//!
//! ```
//! use roster_query::{NameSet, Team, TeamTable, parse};
//!
//! let teams = TeamTable::from([
//!     (Team::Software, vec!["alice".to_string(), "bob".to_string()]),
//!     (Team::Admin, vec!["carol".to_string()]),
//! ]);
//! let names: NameSet = ["alice", "bob", "carol", "dave"]
//!     .iter()
//!     .map(|n| n.to_string())
//!     .collect();
//!
//! let query = parse("(Software or Admin) and !alice").unwrap();
//! assert!(query.validate(&names).is_ok());
//!
//! let selected = query.evaluate(&teams, &names);
//! assert_eq!(selected.into_iter().collect::<Vec<_>>(), ["bob", "carol"]);
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;
mod team;
mod validate;

pub use ast::{Operand, Operator, QueryNode};
pub use error::{ParseError, QueryError, QueryErrorKind, SyntaxError, ValidationError};
pub use eval::{NEGATION, WILDCARD, evaluate};
pub use lexer::tokenize;
pub use parser::{parse, parse_tokens};
pub use team::{NameSet, Team, TeamTable};
pub use validate::{validate, verify};
