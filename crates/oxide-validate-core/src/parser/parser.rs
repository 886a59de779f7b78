//! SQL Parser implementation.

use tracing::trace;

use super::error::ParseError;
use super::Production;
use crate::ast::{
    Aggregate, Assignment, ColumnRef, ComparisonOp, Condition, DeleteStatement, FunctionArg,
    FunctionCall, InsertStatement, Limit, Literal, Operand, OrderBy, OrderDirection, SelectColumn,
    SelectItem, SelectStatement, Statement, TableRef, UpdateStatement,
};
use crate::lexer::{Keyword, Operator, Punctuation, Token, TokenKind};

/// Maximum number of `NOT` and `(` a condition may nest.
pub const MAX_CONDITION_DEPTH: usize = 128;

/// SQL Parser.
///
/// Walks a token slice with a single cursor. Every `parse_*` method
/// recognizes one production and either advances past it or fails; there is
/// no backtracking once an alternative has been chosen.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Stands in for a missing EOF token at the end of the slice.
    end: Token,
    /// Productions being recognized, innermost last.
    active: Vec<Production>,
    /// Open `NOT` and `(` in the current condition.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over tokens produced by the lexer.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = Token::eof(tokens.last().map_or(0, |t| t.span.end));
        Self {
            tokens,
            pos: 0,
            end,
            active: Vec::new(),
            depth: 0,
        }
    }

    /// Parses exactly one statement, an optional `;`, and the end of input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` at the first token that does not fit the
    /// grammar.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.enter(Production::Statement);
        let statement = match self.current().as_keyword() {
            Some(Keyword::Select) => Statement::Select(self.parse_select_statement()?),
            Some(Keyword::Insert) => Statement::Insert(self.parse_insert_statement()?),
            Some(Keyword::Update) => Statement::Update(self.parse_update_statement()?),
            Some(Keyword::Delete) => Statement::Delete(self.parse_delete_statement()?),
            _ => return Err(ParseError::unrecognized_statement(self.current())),
        };

        if self.check_punct(Punctuation::Semicolon) {
            self.advance();
        }
        if !self.current().is_eof() {
            return Err(self.unexpected("end of statement"));
        }

        self.leave();
        Ok(statement)
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.enter(Production::SelectStatement);
        self.expect_keyword(Keyword::Select, "SELECT")?;

        let columns = self.parse_column_list()?;
        let from = self.parse_from_clause()?;

        let where_clause = if self.check_keyword(Keyword::Where) {
            Some(self.parse_where_clause()?)
        } else {
            None
        };

        let group_by = if self.check_keyword(Keyword::Group) {
            self.parse_group_by_clause()?
        } else {
            vec![]
        };

        let order_by = if self.check_keyword(Keyword::Order) {
            self.parse_order_by_clause()?
        } else {
            vec![]
        };

        let limit = if self.check_keyword(Keyword::Limit) {
            Some(self.parse_limit_clause()?)
        } else {
            None
        };

        self.leave();
        Ok(SelectStatement {
            columns,
            from,
            where_clause,
            group_by,
            order_by,
            limit,
        })
    }

    /// Parses the SELECT list.
    fn parse_column_list(&mut self) -> Result<Vec<SelectColumn>, ParseError> {
        self.enter(Production::ColumnList);
        let mut columns = vec![];
        loop {
            columns.push(self.parse_column_item()?);
            if !self.check_punct(Punctuation::Comma) {
                break;
            }
            self.advance();
        }
        self.leave();
        Ok(columns)
    }

    /// Parses one SELECT list entry with its optional alias.
    fn parse_column_item(&mut self) -> Result<SelectColumn, ParseError> {
        self.enter(Production::ColumnItem);
        let item = match self.current().kind {
            TokenKind::Operator(Operator::Star) => {
                self.advance();
                SelectItem::Wildcard
            }
            TokenKind::Keyword(kw) if kw.is_aggregate() => {
                SelectItem::Function(self.parse_function_call()?)
            }
            TokenKind::Identifier => SelectItem::Column(self.parse_qualified_name()?),
            _ => return Err(self.unexpected("column name, aggregate function or '*'")),
        };
        let alias = self.parse_optional_alias()?;
        self.leave();
        Ok(SelectColumn { item, alias })
    }

    /// Parses an aggregate call such as `COUNT(*)` or `MAX(o.total)`.
    fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        self.enter(Production::FunctionCall);
        let function = self
            .current()
            .as_keyword()
            .and_then(Aggregate::from_keyword)
            .ok_or_else(|| self.unexpected("aggregate function"))?;
        self.advance();

        self.expect_punct(Punctuation::LeftParen, "'(' after function name")?;
        let argument = match self.current().kind {
            TokenKind::Operator(Operator::Star) => {
                self.advance();
                FunctionArg::Wildcard
            }
            TokenKind::Identifier => FunctionArg::Column(self.parse_qualified_name()?),
            TokenKind::Number | TokenKind::String => FunctionArg::Literal(self.parse_literal()?),
            _ => return Err(self.unexpected("column name, literal or '*' as function argument")),
        };
        self.expect_punct(Punctuation::RightParen, "closing ')'")?;

        self.leave();
        Ok(FunctionCall { function, argument })
    }

    /// Parses `FROM table_ref (, table_ref)*`.
    fn parse_from_clause(&mut self) -> Result<Vec<TableRef>, ParseError> {
        self.enter(Production::FromClause);
        self.expect_keyword(Keyword::From, "FROM after column list")?;
        let mut tables = vec![];
        loop {
            tables.push(self.parse_table_ref()?);
            if !self.check_punct(Punctuation::Comma) {
                break;
            }
            self.advance();
        }
        self.leave();
        Ok(tables)
    }

    /// Parses a table name with an optional alias.
    fn parse_table_ref(&mut self) -> Result<TableRef, ParseError> {
        self.enter(Production::TableRef);
        let name = self.expect_identifier("table name")?;
        let alias = self.parse_optional_alias()?;
        self.leave();
        Ok(TableRef { name, alias })
    }

    /// Parses an optional alias: `AS name` or a bare identifier.
    ///
    /// Clause words are keyword tokens, so `users WHERE` never reads
    /// `WHERE` as an alias.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.check_keyword(Keyword::As) {
            self.advance();
            Ok(Some(self.expect_identifier("alias after AS")?))
        } else if self.check(TokenKind::Identifier) {
            Ok(Some(self.expect_identifier("alias")?))
        } else {
            Ok(None)
        }
    }

    /// Parses `WHERE condition`.
    fn parse_where_clause(&mut self) -> Result<Condition, ParseError> {
        self.enter(Production::WhereClause);
        self.expect_keyword(Keyword::Where, "WHERE")?;
        let condition = self.parse_condition()?;
        self.leave();
        Ok(condition)
    }

    /// Parses `and_condition (OR and_condition)*`.
    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        self.enter(Production::Condition);
        let mut condition = self.parse_and_condition()?;
        while self.check_keyword(Keyword::Or) {
            self.advance();
            let right = self.parse_and_condition()?;
            condition = Condition::Or(Box::new(condition), Box::new(right));
        }
        self.leave();
        Ok(condition)
    }

    /// Parses `condition_term (AND condition_term)*`.
    fn parse_and_condition(&mut self) -> Result<Condition, ParseError> {
        self.enter(Production::AndCondition);
        let mut condition = self.parse_condition_term()?;
        while self.check_keyword(Keyword::And) {
            self.advance();
            let right = self.parse_condition_term()?;
            condition = Condition::And(Box::new(condition), Box::new(right));
        }
        self.leave();
        Ok(condition)
    }

    /// Parses `NOT term`, a parenthesized condition, or a comparison.
    ///
    /// Nesting is capped at [`MAX_CONDITION_DEPTH`].
    fn parse_condition_term(&mut self) -> Result<Condition, ParseError> {
        self.enter(Production::ConditionTerm);
        let nested = self.check_keyword(Keyword::Not) || self.check_punct(Punctuation::LeftParen);
        if nested && self.depth >= MAX_CONDITION_DEPTH {
            return Err(self.unexpected(&format!(
                "condition nested at most {MAX_CONDITION_DEPTH} deep"
            )));
        }

        let condition = if self.check_keyword(Keyword::Not) {
            self.advance();
            self.depth += 1;
            let inner = self.parse_condition_term()?;
            self.depth -= 1;
            Condition::Not(Box::new(inner))
        } else if self.check_punct(Punctuation::LeftParen) {
            self.advance();
            self.depth += 1;
            let inner = self.parse_condition()?;
            self.expect_punct(Punctuation::RightParen, "closing ')'")?;
            self.depth -= 1;
            inner
        } else {
            self.parse_comparison()?
        };

        self.leave();
        Ok(condition)
    }

    /// Parses `operand comparator operand`.
    fn parse_comparison(&mut self) -> Result<Condition, ParseError> {
        self.enter(Production::Comparison);
        let left = self.parse_operand()?;

        let op = match self.current().kind {
            TokenKind::Operator(op) => ComparisonOp::from_operator(op),
            _ => None,
        }
        .ok_or_else(|| self.unexpected("comparison operator"))?;
        self.advance();

        let right = self.parse_operand()?;
        self.leave();
        Ok(Condition::Comparison { left, op, right })
    }

    /// Parses a literal or a (qualified) column name.
    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        self.enter(Production::Operand);
        let operand = match self.current().kind {
            TokenKind::Number | TokenKind::String => Operand::Literal(self.parse_literal()?),
            TokenKind::Identifier => Operand::Column(self.parse_qualified_name()?),
            _ => return Err(self.unexpected("value (identifier, number or string)")),
        };
        self.leave();
        Ok(operand)
    }

    /// Parses a number or string literal.
    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        self.enter(Production::Literal);
        let token = self.current();
        let literal = match token.kind {
            TokenKind::Number => Literal::Number(token.text.clone()),
            TokenKind::String => {
                let text = token.text.as_str();
                let unquoted = text
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
                    .unwrap_or(text);
                Literal::String(String::from(unquoted))
            }
            _ => return Err(self.unexpected("literal (number or string)")),
        };
        self.advance();
        self.leave();
        Ok(literal)
    }

    /// Parses `identifier [. identifier]`.
    fn parse_qualified_name(&mut self) -> Result<ColumnRef, ParseError> {
        self.enter(Production::QualifiedName);
        let first = self.expect_identifier("column name")?;
        let column = if self.check(TokenKind::Dot) {
            self.advance();
            let name = self.expect_identifier("column name after '.'")?;
            ColumnRef::qualified(first, name)
        } else {
            ColumnRef::new(first)
        };
        self.leave();
        Ok(column)
    }

    /// Parses `GROUP BY qualified_name (, qualified_name)*`.
    fn parse_group_by_clause(&mut self) -> Result<Vec<ColumnRef>, ParseError> {
        self.enter(Production::GroupByClause);
        self.expect_keyword(Keyword::Group, "GROUP")?;
        self.expect_keyword(Keyword::By, "BY after GROUP")?;
        let mut columns = vec![];
        loop {
            columns.push(self.parse_qualified_name()?);
            if !self.check_punct(Punctuation::Comma) {
                break;
            }
            self.advance();
        }
        self.leave();
        Ok(columns)
    }

    /// Parses an ORDER BY list.
    fn parse_order_by_clause(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        self.enter(Production::OrderByClause);
        self.expect_keyword(Keyword::Order, "ORDER")?;
        self.expect_keyword(Keyword::By, "BY after ORDER")?;
        let mut items = vec![];
        loop {
            let column = self.parse_qualified_name()?;
            let direction = if self.check_keyword(Keyword::Desc) {
                self.advance();
                OrderDirection::Desc
            } else if self.check_keyword(Keyword::Asc) {
                self.advance();
                OrderDirection::Asc
            } else {
                OrderDirection::Asc
            };
            items.push(OrderBy { column, direction });

            if !self.check_punct(Punctuation::Comma) {
                break;
            }
            self.advance();
        }
        self.leave();
        Ok(items)
    }

    /// Parses `LIMIT n [OFFSET m]`.
    fn parse_limit_clause(&mut self) -> Result<Limit, ParseError> {
        self.enter(Production::LimitClause);
        self.expect_keyword(Keyword::Limit, "LIMIT")?;
        let count = self.expect_integer("row count after LIMIT")?;
        let offset = if self.check_keyword(Keyword::Offset) {
            self.advance();
            Some(self.expect_integer("row offset after OFFSET")?)
        } else {
            None
        };
        self.leave();
        Ok(Limit { count, offset })
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.enter(Production::InsertStatement);
        self.expect_keyword(Keyword::Insert, "INSERT")?;
        self.expect_keyword(Keyword::Into, "INTO after INSERT")?;
        let table = self.expect_identifier("table name")?;

        self.expect_punct(Punctuation::LeftParen, "'(' before column list")?;
        let columns = self.parse_identifier_list()?;
        self.expect_punct(Punctuation::RightParen, "closing ')' after column list")?;

        self.expect_keyword(Keyword::Values, "VALUES after column list")?;
        self.expect_punct(Punctuation::LeftParen, "'(' after VALUES")?;
        let values = self.parse_value_list()?;
        self.expect_punct(Punctuation::RightParen, "closing ')' after value list")?;

        self.leave();
        Ok(InsertStatement {
            table,
            columns,
            values,
        })
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.enter(Production::IdentifierList);
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier("column name")?);
            if !self.check_punct(Punctuation::Comma) {
                break;
            }
            self.advance();
        }
        self.leave();
        Ok(idents)
    }

    /// Parses a comma-separated list of literals.
    fn parse_value_list(&mut self) -> Result<Vec<Literal>, ParseError> {
        self.enter(Production::ValueList);
        let mut values = vec![];
        loop {
            values.push(self.parse_literal()?);
            if !self.check_punct(Punctuation::Comma) {
                break;
            }
            self.advance();
        }
        self.leave();
        Ok(values)
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.enter(Production::UpdateStatement);
        self.expect_keyword(Keyword::Update, "UPDATE")?;
        let table = self.parse_table_ref()?;
        self.expect_keyword(Keyword::Set, "SET after table name")?;
        let assignments = self.parse_assignment_list()?;

        let where_clause = if self.check_keyword(Keyword::Where) {
            Some(self.parse_where_clause()?)
        } else {
            None
        };

        self.leave();
        Ok(UpdateStatement {
            table,
            assignments,
            where_clause,
        })
    }

    /// Parses `column = operand (, column = operand)*`.
    fn parse_assignment_list(&mut self) -> Result<Vec<Assignment>, ParseError> {
        self.enter(Production::AssignmentList);
        let mut assignments = vec![];
        loop {
            let column = self.expect_identifier("column name")?;
            self.expect(TokenKind::Operator(Operator::Eq), "'=' after column name")?;
            let value = self.parse_operand()?;
            assignments.push(Assignment { column, value });

            if !self.check_punct(Punctuation::Comma) {
                break;
            }
            self.advance();
        }
        self.leave();
        Ok(assignments)
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.enter(Production::DeleteStatement);
        self.expect_keyword(Keyword::Delete, "DELETE")?;
        self.expect_keyword(Keyword::From, "FROM after DELETE")?;
        let table = self.parse_table_ref()?;

        let where_clause = if self.check_keyword(Keyword::Where) {
            Some(self.parse_where_clause()?)
        } else {
            None
        };

        self.leave();
        Ok(DeleteStatement {
            table,
            where_clause,
        })
    }

    // --- Helper methods ---

    /// Returns the current (unconsumed) token.
    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    /// Advances to the next token. The cursor never moves past EOF.
    fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Pushes a production onto the active stack.
    fn enter(&mut self, production: Production) {
        trace!(%production, depth = self.active.len(), "enter");
        self.active.push(production);
    }

    /// Pops the innermost production after it was recognized.
    fn leave(&mut self) {
        self.active.pop();
    }

    /// The innermost active production.
    fn production(&self) -> Production {
        self.active.last().copied().unwrap_or(Production::Statement)
    }

    /// Builds an error at the current token.
    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, self.current(), self.production())
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Checks if the current token is the given punctuation.
    fn check_punct(&self, punct: Punctuation) -> bool {
        self.check(TokenKind::Punctuation(punct))
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword, expected: &str) -> Result<(), ParseError> {
        self.expect(TokenKind::Keyword(keyword), expected)
    }

    /// Expects the current token to be the given punctuation.
    fn expect_punct(&mut self, punct: Punctuation, expected: &str) -> Result<(), ParseError> {
        self.expect(TokenKind::Punctuation(punct), expected)
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        let token = self.current();
        if token.kind == TokenKind::Identifier {
            let name = token.text.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Expects and returns a non-negative integer literal.
    fn expect_integer(&mut self, expected: &str) -> Result<u64, ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Number => match token.text.parse::<u64>() {
                Ok(n) => {
                    self.advance();
                    Ok(n)
                }
                Err(_) => Err(self.unexpected(expected)),
            },
            _ => Err(self.unexpected(expected)),
        }
    }
}
