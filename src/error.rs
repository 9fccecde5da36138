use crate::token::Position;
use crate::token_type::TokenType;
use std::fmt::{self, Display, Formatter};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Number literal '{0}' is out of range.")]
    NumberOutOfRange(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("[{position}] Error: {kind}")]
pub struct LexError {
    pub position: Position,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(position: Position, kind: LexErrorKind) -> Self {
        LexError { position, kind }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub position: Position,
    /// Kind of the token the parser stopped at.
    pub found: TokenType,
    pub lexeme: String,
    /// What the parser expected, e.g. "Expect ';' after value.".
    pub message: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.found == TokenType::EOF {
            write!(f, "[{}] Error at end: {}", self.position, self.message)
        } else {
            write!(
                f,
                "[{}] Error at '{}': {}",
                self.position, self.lexeme, self.message
            )
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),
    #[error("Cannot assign to undefined variable '{0}'.")]
    UndefinedAssignment(String),
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Modulo by zero.")]
    ModuloByZero,
    #[error("'break' outside of a loop.")]
    BreakOutsideLoop,
    #[error("Step limit of {0} exceeded.")]
    StepLimitExceeded(u64),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("[{position}] Runtime error: {kind}")]
pub struct RuntimeError {
    pub position: Position,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(position: Position, kind: RuntimeErrorKind) -> Self {
        RuntimeError { position, kind }
    }
}

/// Any failure of the scan, parse and execute pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ScriptError {
    pub fn position(&self) -> Position {
        match self {
            ScriptError::Lex(e) => e.position,
            ScriptError::Parse(e) => e.position,
            ScriptError::Runtime(e) => e.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_token_or_the_end() {
        let at_token = ParseError {
            position: Position::new(2, 7),
            found: TokenType::RBRACE,
            lexeme: String::from("}"),
            message: String::from("Expect ';' after value."),
        };
        assert_eq!(
            at_token.to_string(),
            "[line 2, column 7] Error at '}': Expect ';' after value."
        );

        let at_end = ParseError {
            found: TokenType::EOF,
            lexeme: String::new(),
            ..at_token
        };
        assert_eq!(
            at_end.to_string(),
            "[line 2, column 7] Error at end: Expect ';' after value."
        );
    }

    #[test]
    fn script_error_keeps_the_stage_position() {
        let err: ScriptError =
            RuntimeError::new(Position::new(4, 1), RuntimeErrorKind::DivisionByZero).into();
        assert_eq!(err.position(), Position::new(4, 1));
        assert_eq!(err.to_string(), "[line 4, column 1] Runtime error: Division by zero.");

        let err: ScriptError =
            LexError::new(Position::new(1, 3), LexErrorKind::UnexpectedCharacter('#')).into();
        assert_eq!(err.to_string(), "[line 1, column 3] Error: Unexpected character '#'.");
    }
}
