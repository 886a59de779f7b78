//! Validation entry points and their result types.
//!
//! [`analyze`] is the `?`-friendly form that hands back the parsed tree;
//! [`validate`] folds the result into a plain [`ValidationOutcome`] value
//! for callers that only need a verdict.

use serde::Serialize;
use tracing::{debug, trace};

use crate::ast::{Statement, StatementKind};
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser, Production};

/// Why a statement was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The text could not be tokenized.
    #[error("lexical error: {0}")]
    Lexical(#[from] LexError),

    /// The tokens do not form a statement of the grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),
}

impl ValidationError {
    /// The analysis stage that failed.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Lexical(_) => Stage::Lexical,
            Self::Syntax(_) => Stage::Syntactic,
        }
    }

    /// Character offset of the failure.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lexical(err) => err.position(),
            Self::Syntax(err) => err.position(),
        }
    }

    /// Description of what was expected at [`position`](Self::position).
    #[must_use]
    pub fn expected(&self) -> &str {
        match self {
            Self::Lexical(err) => err.expected(),
            Self::Syntax(err) => &err.expected,
        }
    }
}

/// The two analysis stages, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    Lexical,
    Syntactic,
}

/// The result of validating one piece of SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// The text is one well-formed statement.
    Valid {
        /// Which statement it is.
        statement_kind: StatementKind,
    },
    /// The text was rejected.
    Invalid {
        /// Stage that rejected the text.
        stage: Stage,
        /// Human-readable description, including the position.
        message: String,
        /// Character offset of the offending character or token.
        position: usize,
        /// The construct that was expected there.
        expected: String,
        /// Grammar rule that was active; absent for lexical errors.
        #[serde(skip_serializing_if = "Option::is_none")]
        production: Option<Production>,
    },
}

impl ValidationOutcome {
    /// Returns true for [`ValidationOutcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The recognized statement kind, if valid.
    #[must_use]
    pub const fn statement_kind(&self) -> Option<StatementKind> {
        match self {
            Self::Valid { statement_kind } => Some(*statement_kind),
            Self::Invalid { .. } => None,
        }
    }

    /// The failing stage, if invalid.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { stage, .. } => Some(*stage),
        }
    }

    /// The failure position, if invalid.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { position, .. } => Some(*position),
        }
    }
}

impl From<ValidationError> for ValidationOutcome {
    fn from(error: ValidationError) -> Self {
        let stage = error.stage();
        let position = error.position();
        let expected = String::from(error.expected());
        match error {
            ValidationError::Lexical(err) => Self::Invalid {
                stage,
                message: err.to_string(),
                position,
                expected,
                production: None,
            },
            ValidationError::Syntax(err) => Self::Invalid {
                stage,
                message: err.to_string(),
                position,
                expected,
                production: Some(err.production),
            },
        }
    }
}

/// Tokenizes and parses `source` as a single statement.
///
/// # Errors
///
/// Returns [`ValidationError::Lexical`] if tokenization fails, otherwise
/// [`ValidationError::Syntax`] if the tokens do not form a statement.
pub fn analyze(source: &str) -> Result<Statement, ValidationError> {
    let tokens = Lexer::new(source).tokenize()?;
    trace!(tokens = tokens.len(), "tokenized input");
    let statement = Parser::new(&tokens).parse_statement()?;
    Ok(statement)
}

/// Validates `source`, reporting the statement kind or the first error.
#[must_use]
pub fn validate(source: &str) -> ValidationOutcome {
    match analyze(source) {
        Ok(statement) => {
            let kind = statement.kind();
            debug!(%kind, "statement accepted");
            ValidationOutcome::Valid {
                statement_kind: kind,
            }
        }
        Err(error) => {
            debug!(
                stage = ?error.stage(),
                position = error.position(),
                %error,
                "statement rejected"
            );
            error.into()
        }
    }
}
