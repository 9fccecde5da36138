//! A lexer, parser and tree-walking evaluator for a small imperative
//! language: integer arithmetic, `var` bindings, `print`, `if`/`else`,
//! `while` and `break`, with block scoping.
//!
//! ```
//! let mut out: Vec<i64> = Vec::new();
//! scriptlet::run("var i = 0; while (i < 3) { i = i + 1; } print i;", &mut out).unwrap();
//! assert_eq!(out, vec![3]);
//! ```

pub mod ast_printer;
pub mod config;
pub mod environment;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod output;
pub mod parser;
pub mod scanner;
pub mod session;
pub mod stmt;
pub mod token;
pub mod token_type;

pub use config::Config;
pub use environment::Environment;
pub use error::{LexError, LexErrorKind, ParseError, RuntimeError, RuntimeErrorKind, ScriptError};
pub use interpreter::{Flow, Interpreter, Value};
pub use output::OutputSink;
pub use parser::{parse, Parser};
pub use scanner::tokenize;
pub use session::{run, run_with_config, Session};
pub use token::{Position, Token};
pub use token_type::TokenType;
