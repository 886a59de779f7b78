//! Lexical error types.

/// An input character sequence that matches no token rule.
///
/// Scanning stops at the first error; no partial token stream is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// Character offset of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A string literal whose closing quote is missing.
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString {
        /// Character offset of the opening quote.
        position: usize,
    },

    /// A `/* ... */` comment that runs to the end of input.
    #[error("unterminated block comment starting at position {position}")]
    UnterminatedComment {
        /// Character offset of the opening `/`.
        position: usize,
    },
}

impl LexError {
    /// Character offset where scanning failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::UnterminatedComment { position } => *position,
        }
    }

    /// The character at [`position`](Self::position).
    #[must_use]
    pub const fn character(&self) -> char {
        match self {
            Self::UnexpectedCharacter { character, .. } => *character,
            Self::UnterminatedString { .. } => '\'',
            Self::UnterminatedComment { .. } => '/',
        }
    }

    /// What the scanner would have accepted instead.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter { .. } => {
                "a keyword, identifier, literal, operator or punctuation"
            }
            Self::UnterminatedString { .. } => "closing quote",
            Self::UnterminatedComment { .. } => "closing */",
        }
    }
}
