//! # oxide-validate-core
//!
//! Schema-less syntax validation for a basic SQL DML subset.
//!
//! This crate answers "is this grammatically legal SQL?" for `SELECT`,
//! `INSERT`, `UPDATE` and `DELETE` statements. It never looks at a schema:
//! table and column names are accepted as long as they are well-formed.
//!
//! Analysis runs in two stages:
//! - A hand-written [`Lexer`] turns text into a typed token stream
//! - A recursive descent [`Parser`] checks the tokens against a fixed grammar
//!
//! ## Validating a statement
//!
//! ```rust
//! use oxide_validate_core::{validate, Stage, StatementKind};
//!
//! let outcome = validate("SELECT * FROM users u WHERE u.age > 18 AND u.active = 1");
//! assert_eq!(outcome.statement_kind(), Some(StatementKind::Select));
//!
//! let outcome = validate("DELETE users WHERE id = 5;");
//! assert_eq!(outcome.stage(), Some(Stage::Syntactic));
//! assert_eq!(outcome.position(), Some(7));
//! ```
//!
//! ## Inspecting the parsed statement
//!
//! ```rust
//! use oxide_validate_core::{analyze, Statement};
//!
//! let sql = "INSERT INTO users (id, name) VALUES (1, 'Ann')";
//! let Statement::Insert(insert) = analyze(sql)? else {
//!     unreachable!();
//! };
//! assert_eq!(insert.columns, vec!["id", "name"]);
//! # Ok::<(), oxide_validate_core::ValidationError>(())
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
mod validate;

pub use ast::{Statement, StatementKind};
pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser, Production, MAX_CONDITION_DEPTH};
pub use validate::{analyze, validate, Stage, ValidationError, ValidationOutcome};
