//! Operand and condition AST types.

use core::fmt;

use crate::lexer::{Keyword, Operator};

/// A literal value. Numbers keep their source spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Integer or decimal literal.
    Number(String),
    /// String literal, without the surrounding quotes.
    String(String),
}

/// A column reference, optionally qualified by a table or alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Table name or alias (`u` in `u.age`).
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{table}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A number or string.
    Literal(Literal),
    /// A (possibly qualified) column.
    Column(ColumnRef),
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ComparisonOp {
    /// Maps an operator token to a comparison, if it is one.
    #[must_use]
    pub const fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Eq => Some(Self::Eq),
            Operator::NotEq => Some(Self::NotEq),
            Operator::Lt => Some(Self::Lt),
            Operator::LtEq => Some(Self::LtEq),
            Operator::Gt => Some(Self::Gt),
            Operator::GtEq => Some(Self::GtEq),
            Operator::Plus | Operator::Minus | Operator::Star | Operator::Slash => None,
        }
    }

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

/// A boolean condition in a WHERE clause.
///
/// `AND` binds tighter than `OR`; parentheses only group and leave no node
/// of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `left op right`
    Comparison {
        left: Operand,
        op: ComparisonOp,
        right: Operand,
    },
    /// `NOT condition`
    Not(Box<Condition>),
    /// `left AND right`
    And(Box<Condition>, Box<Condition>),
    /// `left OR right`
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// Number of comparisons in this condition tree.
    #[must_use]
    pub fn comparison_count(&self) -> usize {
        match self {
            Self::Comparison { .. } => 1,
            Self::Not(inner) => inner.comparison_count(),
            Self::And(left, right) | Self::Or(left, right) => {
                left.comparison_count() + right.comparison_count()
            }
        }
    }
}

/// Aggregate functions allowed in a select list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl Aggregate {
    /// Maps a keyword to an aggregate, if it names one.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Count => Some(Self::Count),
            Keyword::Sum => Some(Self::Sum),
            Keyword::Avg => Some(Self::Avg),
            Keyword::Min => Some(Self::Min),
            Keyword::Max => Some(Self::Max),
            _ => None,
        }
    }

    /// Returns the function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }
}

/// The single argument of an aggregate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionArg {
    /// `*`
    Wildcard,
    Column(ColumnRef),
    Literal(Literal),
}

/// An aggregate function call, e.g. `COUNT(id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub function: Aggregate,
    pub argument: FunctionArg,
}
