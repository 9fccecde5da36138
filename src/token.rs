use crate::interpreter::Value;
use crate::token_type::TokenType;
use std::fmt;

/// A 1-based line and column. Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub type_: TokenType,
    pub lexeme: String,
    /// Parsed value, only present on NUMBER tokens.
    pub literal: Option<Value>,
    pub position: Position,
}

impl Token {
    pub fn new(
        type_: TokenType,
        lexeme: String,
        literal: Option<Value>,
        position: Position,
    ) -> Token {
        Token {
            type_,
            lexeme,
            literal,
            position,
        }
    }

    /// True for a KEYWORD token spelling `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.type_ == TokenType::KEYWORD && self.lexeme == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Token] type: {:?}, lexeme: {}, literal: {:?}, {}",
            self.type_, self.lexeme, self.literal, self.position
        )
    }
}
