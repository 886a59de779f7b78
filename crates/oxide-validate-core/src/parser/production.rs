//! Names of the grammar productions.

use core::fmt;

use serde::Serialize;

/// A grammar rule, one per recognition procedure in the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Production {
    Statement,
    SelectStatement,
    ColumnList,
    ColumnItem,
    FunctionCall,
    FromClause,
    TableRef,
    WhereClause,
    Condition,
    AndCondition,
    ConditionTerm,
    Comparison,
    Operand,
    Literal,
    QualifiedName,
    GroupByClause,
    OrderByClause,
    LimitClause,
    InsertStatement,
    IdentifierList,
    ValueList,
    UpdateStatement,
    AssignmentList,
    DeleteStatement,
}

impl Production {
    /// Returns the rule name as written in the grammar.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Statement => "statement",
            Self::SelectStatement => "select_statement",
            Self::ColumnList => "column_list",
            Self::ColumnItem => "column_item",
            Self::FunctionCall => "function_call",
            Self::FromClause => "from_clause",
            Self::TableRef => "table_ref",
            Self::WhereClause => "where_clause",
            Self::Condition => "condition",
            Self::AndCondition => "and_condition",
            Self::ConditionTerm => "condition_term",
            Self::Comparison => "comparison",
            Self::Operand => "operand",
            Self::Literal => "literal",
            Self::QualifiedName => "qualified_name",
            Self::GroupByClause => "group_by_clause",
            Self::OrderByClause => "order_by_clause",
            Self::LimitClause => "limit_clause",
            Self::InsertStatement => "insert_statement",
            Self::IdentifierList => "identifier_list",
            Self::ValueList => "value_list",
            Self::UpdateStatement => "update_statement",
            Self::AssignmentList => "assignment_list",
            Self::DeleteStatement => "delete_statement",
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
