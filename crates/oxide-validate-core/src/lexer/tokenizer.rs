//! SQL Tokenizer implementation.

use super::{Keyword, LexError, Operator, Punctuation, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
///
/// The order of the branches in [`Lexer::next_token`] is the matching
/// priority: comments before operators, two-character operators before
/// their one-character prefixes, and so on.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The current character offset.
    offset: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// The character offset of the start of the current token.
    start_offset: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            offset: 0,
            start: 0,
            start_offset: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.offset += 1;
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- to end of line
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let position = self.offset;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => return Err(LexError::UnterminatedComment { position }),
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a token covering the input from the token start to the cursor.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            &self.input[self.start..self.pos],
            Span::new(self.start_offset, self.offset),
        )
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans an integer or decimal number.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // `12abc` is neither a number nor an identifier
        match self.peek() {
            Some(c) if c.is_alphanumeric() || c == '_' => Err(LexError::UnexpectedCharacter {
                position: self.offset,
                character: c,
            }),
            _ => Ok(self.make_token(TokenKind::Number)),
        }
    }

    /// Scans a single-quoted string literal. The opening quote is consumed.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        loop {
            match self.advance() {
                Some('\'') => return Ok(self.make_token(TokenKind::String)),
                Some(_) => {}
                None => {
                    return Err(LexError::UnterminatedString {
                        position: self.start_offset,
                    });
                }
            }
        }
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the input at the cursor matches no token rule.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;
        self.start_offset = self.offset;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.offset));
        };

        let kind = match c {
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Operator(Operator::LtEq)
                } else if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::Operator(Operator::NotEq)
                } else {
                    TokenKind::Operator(Operator::Lt)
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Operator(Operator::GtEq)
                } else {
                    TokenKind::Operator(Operator::Gt)
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::Operator(Operator::NotEq)
            }
            '=' => TokenKind::Operator(Operator::Eq),
            '+' => TokenKind::Operator(Operator::Plus),
            '-' => TokenKind::Operator(Operator::Minus),
            '*' => TokenKind::Operator(Operator::Star),
            '/' => TokenKind::Operator(Operator::Slash),

            '\'' => return self.scan_string(),
            c if c.is_ascii_digit() => return self.scan_number(),
            c if c.is_ascii_alphabetic() || c == '_' => return Ok(self.scan_identifier()),

            '.' => TokenKind::Dot,
            ',' => TokenKind::Punctuation(Punctuation::Comma),
            '(' => TokenKind::Punctuation(Punctuation::LeftParen),
            ')' => TokenKind::Punctuation(Punctuation::RightParen),
            ';' => TokenKind::Punctuation(Punctuation::Semicolon),

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    position: self.start_offset,
                    character: c,
                });
            }
        };

        Ok(self.make_token(kind))
    }

    /// Tokenizes the entire input and returns all tokens, ending with EOF.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered; no tokens are returned
    /// in that case.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
