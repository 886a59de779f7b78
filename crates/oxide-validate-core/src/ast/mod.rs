//! Abstract Syntax Tree (AST) types for the accepted statements.
//!
//! The tree is built during one parse and dropped with it; validation only
//! reports its [`StatementKind`].

mod expression;
mod statement;

pub use expression::{
    Aggregate, ColumnRef, ComparisonOp, Condition, FunctionArg, FunctionCall, Literal, Operand,
};
pub use statement::{
    Assignment, DeleteStatement, InsertStatement, Limit, OrderBy, OrderDirection, SelectColumn,
    SelectItem, SelectStatement, Statement, StatementKind, TableRef, UpdateStatement,
};
