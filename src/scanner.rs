use crate::error::{LexError, LexErrorKind};
use crate::token::{Position, Token};
use crate::token_type::TokenType;
use crate::token_type::TokenType::*;

use std::collections::HashMap;

trait Alpha {
    fn is_identifier_start(&self) -> bool;
    fn is_identifier_part(&self) -> bool;
}

impl Alpha for char {
    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }
    fn is_identifier_part(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }
}

/// Single forward pass over the source with one character of lookahead.
pub struct Scanner {
    source: Vec<char>,
    pub tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    /// Index of the first character of the current line.
    line_start: usize,

    keywords: HashMap<&'static str, TokenType>,
}

macro_rules! match_ {
    ($self:ident, $expected:literal) => {
        if $self.is_at_end() {
            false
        } else if $self.source[$self.current] != $expected {
            false
        } else {
            $self.current += 1;
            true
        }
    };
}

/// Scans `source` to the end; the result always ends with one EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    scanner.scan_tokens()?;
    Ok(scanner.tokens)
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            line_start: 0,
            keywords: HashMap::from([
                ("break", BREAK),
                ("else", KEYWORD),
                ("if", KEYWORD),
                ("var", KEYWORD),
                ("while", KEYWORD),
            ]),
        }
    }

    pub fn scan_tokens(&mut self) -> Result<(), LexError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }
        self.start = self.current;
        let position = self.start_position();
        self.tokens.push(Token::new(EOF, String::new(), None, position));
        tracing::debug!(count = self.tokens.len(), "scanned tokens");
        Ok(())
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = self.advance();
        match c {
            '(' => self.add_token(LPAREN),
            ')' => self.add_token(RPAREN),
            '{' => self.add_token(LBRACE),
            '}' => self.add_token(RBRACE),
            ';' => self.add_token(SEMICOLON),
            '-' => self.add_token(MINUS),
            '+' => self.add_token(PLUS),
            '*' => self.add_token(STAR),
            '%' => self.add_token(PERCENT),
            '!' => {
                // no prefix `!` in this grammar, only `!=`
                if !match_!(self, '=') {
                    return Err(self.error(LexErrorKind::UnexpectedCharacter('!')));
                }
                self.add_token(BANG_EQUAL)
            }
            '=' => {
                let matches = match_!(self, '=');
                self.add_token(if matches { EQUAL_EQUAL } else { EQ })
            }
            '<' => {
                let matches = match_!(self, '=');
                self.add_token(if matches { LESS_EQUAL } else { LESS_THAN })
            }
            '>' => {
                let matches = match_!(self, '=');
                self.add_token(if matches { GREATER_EQUAL } else { GREATER_THAN })
            }
            '/' => {
                // a comment -- //
                if match_!(self, '/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(SLASH);
                }
            }
            // ignore whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
                self.line_start = self.current;
            }
            '0'..='9' => return self.number(),
            c if c.is_identifier_start() => self.identifier(),
            c => return Err(self.error(LexErrorKind::UnexpectedCharacter(c))),
        }
        Ok(())
    }

    fn advance(&mut self) -> char {
        let res = self.source[self.current];
        self.current += 1;
        res
    }

    fn start_position(&self) -> Position {
        Position::new(self.line, self.start - self.line_start + 1)
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token_literal(&mut self, type_: TokenType, literal: Option<i64>) {
        let position = self.start_position();
        let text = self.lexeme();
        let token = Token::new(type_, text, literal, position);
        tracing::trace!(%token, "scanned");
        self.tokens.push(token);
    }

    fn add_token(&mut self, type_: TokenType) {
        self.add_token_literal(type_, None);
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(self.start_position(), kind)
    }

    #[inline(always)]
    fn peek(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.source[self.current]
    }

    fn number(&mut self) -> Result<(), LexError> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        let text = self.lexeme();
        match text.parse::<i64>() {
            Ok(value) => {
                self.add_token_literal(NUMBER, Some(value));
                Ok(())
            }
            Err(_) => Err(self.error(LexErrorKind::NumberOutOfRange(text))),
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_identifier_part() {
            self.advance();
        }
        let text = self.lexeme();
        let token_type = self
            .keywords
            .get(text.as_str())
            .copied()
            .unwrap_or(IDENTIFIER);
        self.add_token(token_type);
    }
}
