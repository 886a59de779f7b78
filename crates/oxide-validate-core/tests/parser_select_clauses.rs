//! Tests for GROUP BY, ORDER BY and LIMIT/OFFSET, and for clause order.

mod common;
use common::*;

use oxide_validate_core::ast::{ColumnRef, Limit, OrderDirection};
use oxide_validate_core::Production;

#[test]
fn group_by_single_column() {
    let s = parse_select("SELECT name, COUNT(*) FROM users GROUP BY name");
    assert_eq!(s.group_by, vec![ColumnRef::new("name")]);
}

#[test]
fn group_by_qualified_list() {
    let s = parse_select("SELECT u.name FROM users u GROUP BY u.name, u.city");
    assert_eq!(
        s.group_by,
        vec![
            ColumnRef::qualified("u", "name"),
            ColumnRef::qualified("u", "city"),
        ]
    );
}

#[test]
fn order_by_defaults_to_ascending() {
    let s = parse_select("SELECT * FROM users ORDER BY name");
    assert_eq!(s.order_by.len(), 1);
    assert_eq!(s.order_by[0].direction, OrderDirection::Asc);
}

#[test]
fn order_by_mixed_directions() {
    let s = parse_select("SELECT * FROM users ORDER BY age DESC, name ASC, id");
    let directions: Vec<_> = s.order_by.iter().map(|o| o.direction).collect();
    assert_eq!(
        directions,
        vec![OrderDirection::Desc, OrderDirection::Asc, OrderDirection::Asc]
    );
}

#[test]
fn limit_only() {
    let s = parse_select("SELECT * FROM users LIMIT 10");
    assert_eq!(
        s.limit,
        Some(Limit {
            count: 10,
            offset: None
        })
    );
}

#[test]
fn limit_with_offset() {
    let s = parse_select("SELECT * FROM users LIMIT 10 OFFSET 20");
    assert_eq!(
        s.limit,
        Some(Limit {
            count: 10,
            offset: Some(20)
        })
    );
}

#[test]
fn all_clauses_in_order() {
    let s = parse_select(
        "SELECT u.name, COUNT(*) AS total FROM users u WHERE u.age > 25 \
         GROUP BY u.name ORDER BY total DESC LIMIT 5 OFFSET 10;",
    );
    assert!(s.where_clause.is_some());
    assert_eq!(s.group_by.len(), 1);
    assert_eq!(s.order_by[0].column, ColumnRef::new("total"));
    assert_eq!(s.limit.map(|l| l.offset), Some(Some(10)));
}

#[test]
fn error_group_without_by() {
    let err = assert_rejected_at("SELECT * FROM users GROUP name", "name");
    assert_eq!(err.expected, "BY after GROUP");
    assert_eq!(err.production, Production::GroupByClause);
}

#[test]
fn error_empty_order_by() {
    let err = assert_rejected_at_eof("SELECT * FROM users ORDER BY");
    assert_eq!(err.production, Production::QualifiedName);
}

#[test]
fn error_limit_needs_integer() {
    let err = assert_rejected_at("SELECT * FROM users LIMIT 'ten'", "'ten'");
    assert_eq!(err.expected, "row count after LIMIT");
    assert_eq!(err.production, Production::LimitClause);
}

#[test]
fn error_limit_rejects_decimal() {
    assert_rejected_at("SELECT * FROM users LIMIT 1.5", "1.5");
}

#[test]
fn error_offset_without_value() {
    let err = assert_rejected_at_eof("SELECT * FROM users LIMIT 10 OFFSET");
    assert_eq!(err.expected, "row offset after OFFSET");
}

#[test]
fn error_offset_without_limit() {
    let err = assert_rejected_at("SELECT * FROM users OFFSET 5", "OFFSET");
    assert_eq!(err.expected, "end of statement");
}

#[test]
fn error_clauses_out_of_order() {
    assert_rejected_at("SELECT * FROM users ORDER BY name WHERE id = 1", "WHERE");
    assert_rejected_at("SELECT * FROM users LIMIT 1 GROUP BY name", "GROUP");
}

#[test]
fn error_where_after_group_by() {
    assert_rejected_at("SELECT name FROM users GROUP BY name WHERE id = 1", "WHERE");
}
