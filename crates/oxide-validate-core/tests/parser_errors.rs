//! Tests for parser error cases: unrecognized statements, premature end
//! of input, trailing tokens and error positions.

mod common;
use common::*;

use oxide_validate_core::{Production, TokenKind};

#[test]
fn error_empty_input() {
    let err = assert_rejected_at_eof("");
    assert_eq!(
        err.message,
        "unexpected end of input, expected statement (SELECT, INSERT, UPDATE or DELETE)"
    );
    assert_eq!(err.production, Production::Statement);
}

#[test]
fn error_comment_only_input() {
    let err = parse_err("-- just a note\n  /* and another */ ");
    assert!(err.is_eof());
}

#[test]
fn error_unrecognized_statement() {
    let err = assert_rejected_at("DROP TABLE users", "DROP");
    assert_eq!(err.message, "unrecognized statement type 'DROP'");
    assert_eq!(err.found, TokenKind::Identifier);
}

#[test]
fn error_statement_starting_with_clause_keyword() {
    let err = assert_rejected_at("FROM users SELECT *", "FROM");
    assert!(err.message.starts_with("unrecognized statement type"));
}

#[test]
fn error_incomplete_select() {
    let err = assert_rejected_at_eof("SELECT");
    assert_eq!(err.production, Production::ColumnItem);
}

#[test]
fn error_missing_from_table() {
    let err = assert_rejected_at_eof("SELECT name FROM");
    assert_eq!(err.expected, "table name");
    assert!(err.message.contains("expected table name"));
    assert_eq!(err.position(), 16);
}

#[test]
fn error_missing_from() {
    // `name users` reads as column + alias, so FROM is missing at EOF
    let err = assert_rejected_at_eof("SELECT id, name users");
    assert_eq!(err.expected, "FROM after column list");
    let err = assert_rejected_at("SELECT id WHERE id = 1", "WHERE");
    assert_eq!(err.expected, "FROM after column list");
}

#[test]
fn error_trailing_tokens() {
    let err = assert_rejected_at("SELECT * FROM users; SELECT 1", "SELECT 1");
    assert_eq!(err.expected, "end of statement");
}

#[test]
fn error_semicolon_must_be_last() {
    let err = parse_err("DELETE FROM users;;");
    assert_eq!(err.position(), 18);
    let err = parse_err("UPDATE t SET a = 1; WHERE b = 2");
    assert_eq!(err.expected, "end of statement");
}

#[test]
fn error_unclosed_paren() {
    assert_rejected_at_eof("SELECT * FROM t WHERE (a = 1");
    assert_rejected_at_eof("INSERT INTO t (a, b");
}

#[test]
fn error_join_is_not_supported() {
    let err = assert_rejected_at("SELECT * FROM a JOIN b ON a.id = b.id", "JOIN");
    assert_eq!(err.expected, "end of statement");
}

#[test]
fn error_position_is_character_offset() {
    // Multi-byte characters before the error must count once each
    let err = assert_rejected_at("SELECT * FROM t WHERE name = 'Zoë' ORDER id", "id");
    assert_eq!(err.position(), 41);
    assert_eq!(err.expected, "BY after ORDER");
    assert_rejected_at_eof("SELECT * FROM t WHERE name = 'Zoë' AND");
}
