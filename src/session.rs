use crate::ast_printer::program_to_string;
use crate::config::Config;
use crate::environment::Environment;
use crate::error::ScriptError;
use crate::interpreter::{Interpreter, Value};
use crate::output::OutputSink;
use crate::parser::Parser;
use crate::scanner::tokenize;

/// Scans, parses and runs `source` against a fresh global scope.
pub fn run(source: &str, sink: &mut dyn OutputSink) -> Result<(), ScriptError> {
    run_with_config(source, sink, Config::default())
}

pub fn run_with_config(
    source: &str,
    sink: &mut dyn OutputSink,
    config: Config,
) -> Result<(), ScriptError> {
    Session::with_config(config).run(source, sink)
}

/// Runs several sources one after another against the same global scope.
/// Each run gets its own step budget.
#[derive(Debug, Default)]
pub struct Session {
    pub had_error: bool,
    pub had_runtime_error: bool,
    config: Config,
    globals: Environment<'static>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Session {
            config,
            ..Self::default()
        }
    }

    /// Runs `source` to completion or to its first error. Values printed
    /// before a runtime error stay in `sink`, and globals assigned before it
    /// keep their new values.
    pub fn run(&mut self, source: &str, sink: &mut dyn OutputSink) -> Result<(), ScriptError> {
        let result = self.pipeline(source, sink);
        if let Err(err) = &result {
            self.error(err);
        }
        result
    }

    /// Value of a global variable defined by an earlier run.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.lookup(name)
    }

    /// Clears the error flags, keeping the globals.
    pub fn reset_errors(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    fn pipeline(&mut self, source: &str, sink: &mut dyn OutputSink) -> Result<(), ScriptError> {
        let tokens = tokenize(source)?;
        let program = Parser::new(&tokens).parse()?;
        tracing::debug!(
            statements = program.len(),
            ast = %program_to_string(&program),
            "parsed program"
        );

        let mut interpreter = Interpreter::with_config(sink, self.config);
        let result = interpreter.interpret(&program, &self.globals);
        tracing::debug!(steps = interpreter.steps(), "finished run");
        Ok(result?)
    }

    fn error(&mut self, err: &ScriptError) {
        match err {
            ScriptError::Lex(_) | ScriptError::Parse(_) => {
                self.had_error = true;
                tracing::warn!(%err, "rejected script");
            }
            ScriptError::Runtime(_) => {
                self.had_runtime_error = true;
                tracing::error!(%err, "script failed");
            }
        }
    }
}
