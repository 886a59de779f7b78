//! Token types for the SQL tokenizer.

use super::Span;

/// SQL keywords.
///
/// Matching is case-insensitive; the recognizer only ever looks at the
/// variant, never at the source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Statements
    Select,
    Insert,
    Update,
    Delete,

    // Clauses
    From,
    Where,
    Into,
    Values,
    Set,
    Group,
    Order,
    By,
    Limit,
    Offset,
    As,
    Asc,
    Desc,

    // Logical operators
    And,
    Or,
    Not,

    // Reserved so they are never read as aliases
    Join,
    On,

    // Aggregates
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "INSERT" => Some(Self::Insert),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "SET" => Some(Self::Set),
            "GROUP" => Some(Self::Group),
            "ORDER" => Some(Self::Order),
            "BY" => Some(Self::By),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "JOIN" => Some(Self::Join),
            "ON" => Some(Self::On),
            "COUNT" => Some(Self::Count),
            "SUM" => Some(Self::Sum),
            "AVG" => Some(Self::Avg),
            "MIN" => Some(Self::Min),
            "MAX" => Some(Self::Max),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Set => "SET",
            Self::Group => "GROUP",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Join => "JOIN",
            Self::On => "ON",
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }

    /// Returns true for the aggregate function names.
    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Self::Count | Self::Sum | Self::Avg | Self::Min | Self::Max
        )
    }
}

/// Operators, both comparison and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// +
    Plus,
    /// -
    Minus,
    /// * (also the select-list wildcard)
    Star,
    /// /
    Slash,
}

impl Operator {
    /// Returns true for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }
}

/// Single-character punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuation {
    /// ,
    Comma,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ;
    Semicolon,
}

impl Punctuation {
    /// Returns the punctuation character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::Semicolon => ';',
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// SQL keyword
    Keyword(Keyword),
    /// Identifier (e.g., column_name)
    Identifier,
    /// Integer or decimal literal (e.g., 42, 3.14)
    Number,
    /// Single-quoted string literal (e.g., 'hello')
    String,
    /// Comparison or arithmetic operator
    Operator(Operator),
    /// , ( ) ;
    Punctuation(Punctuation),
    /// .
    Dot,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the token category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Operator(_) => "OPERATOR",
            Self::Punctuation(_) => "PUNCTUATION",
            Self::Dot => "DOT",
            Self::Eof => "EOF",
        }
    }
}

/// A token with its matched text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text, quotes included for strings. Empty for EOF.
    pub text: String,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates the end-of-input token at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::point(offset),
        }
    }

    /// Character offset of the token's first character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Describes the token for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_eof() {
            String::from("end of input")
        } else {
            format!("'{}'", self.text)
        }
    }
}
