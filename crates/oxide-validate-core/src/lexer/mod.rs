//! SQL Tokenizer
//!
//! A hand-written scanner that turns source text into a finite token stream
//! terminated by exactly one [`TokenKind::Eof`] token.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Operator, Punctuation, Token, TokenKind};
pub use tokenizer::Lexer;

/// Tokenizes `source` in one pass.
///
/// # Errors
///
/// Returns a [`LexError`] at the first character that matches no token rule.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
