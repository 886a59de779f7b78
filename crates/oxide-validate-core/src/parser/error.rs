//! Parser error types.

use crate::lexer::{Span, Token, TokenKind};

use super::Production;

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}", .span.start)]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the offending token.
    pub span: Span,
    /// The construct that was expected.
    pub expected: String,
    /// The kind of the token actually found.
    pub found: TokenKind,
    /// The innermost production active when recognition failed.
    pub production: Production,
}

impl ParseError {
    /// Creates an "unexpected token" error, or an "unexpected end of input"
    /// error when `found` is EOF.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: &Token, production: Production) -> Self {
        let expected: String = expected.into();
        let message = if found.is_eof() {
            format!("unexpected end of input, expected {expected}")
        } else {
            format!("expected {expected}, found {}", found.describe())
        };
        Self {
            message,
            span: found.span,
            expected,
            found: found.kind,
            production,
        }
    }

    /// Creates the error for a statement that starts with anything other
    /// than SELECT, INSERT, UPDATE or DELETE.
    #[must_use]
    pub fn unrecognized_statement(found: &Token) -> Self {
        let expected = "statement (SELECT, INSERT, UPDATE or DELETE)";
        if found.is_eof() {
            return Self::unexpected(expected, found, Production::Statement);
        }
        Self {
            message: format!("unrecognized statement type {}", found.describe()),
            span: found.span,
            expected: String::from(expected),
            found: found.kind,
            production: Production::Statement,
        }
    }

    /// Character offset of the offending token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns true if recognition ran out of tokens.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.found, TokenKind::Eof)
    }
}
