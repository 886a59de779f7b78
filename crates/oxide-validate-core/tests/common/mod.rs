#![allow(dead_code)]

use oxide_validate_core::ast::{
    DeleteStatement, InsertStatement, SelectStatement, Statement, UpdateStatement,
};
use oxide_validate_core::{analyze, ParseError, ValidationError};

pub fn parse(sql: &str) -> Statement {
    analyze(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    match analyze(sql) {
        Err(ValidationError::Syntax(e)) => e,
        Err(other) => panic!("Expected syntax error for: {sql}\nGot: {other:?}"),
        Ok(stmt) => panic!("Expected parse error for: {sql}\nParsed: {stmt:?}"),
    }
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

/// Asserts that `sql` is rejected at the character offset of the first
/// occurrence of `marker` in `sql`.
pub fn assert_rejected_at(sql: &str, marker: &str) -> ParseError {
    let err = parse_err(sql);
    let byte = sql
        .find(marker)
        .unwrap_or_else(|| panic!("marker {marker:?} not in {sql:?}"));
    let expected = sql[..byte].chars().count();
    assert_eq!(
        err.position(),
        expected,
        "Wrong position for {sql:?}: {}",
        err.message
    );
    err
}

/// Asserts that `sql` is rejected at its very end.
pub fn assert_rejected_at_eof(sql: &str) -> ParseError {
    let err = parse_err(sql);
    assert!(err.is_eof(), "Expected EOF error for {sql:?}, got {}", err.message);
    assert_eq!(err.position(), sql.chars().count());
    err
}
