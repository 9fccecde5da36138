use crate::config::Config;
use crate::environment::Environment;
use crate::error::{RuntimeError, RuntimeErrorKind};
use crate::expr::Expr;
use crate::output::OutputSink;
use crate::stmt::Stmt;
use crate::token::{Position, Token};
use crate::token_type::TokenType;

/// The only runtime value: a 64-bit signed integer. Arithmetic wraps on
/// overflow; comparisons produce `1` or `0`.
pub type Value = i64;

pub type ValueResult = Result<Value, RuntimeError>;
pub type ExecResult = Result<Flow, RuntimeError>;

/// How a statement finished when it did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Normal,
    /// A `break` is travelling outward to the nearest enclosing `while`.
    Break(Position),
}

pub fn is_truthy(value: Value) -> bool {
    value != 0
}

fn from_bool(b: bool) -> Value {
    b as Value
}

pub struct Interpreter<'s> {
    sink: &'s mut dyn OutputSink,
    config: Config,
    steps: u64,
}

impl<'s> Interpreter<'s> {
    pub fn new(sink: &'s mut dyn OutputSink) -> Self {
        Self::with_config(sink, Config::default())
    }

    pub fn with_config(sink: &'s mut dyn OutputSink, config: Config) -> Self {
        Interpreter {
            sink,
            config,
            steps: 0,
        }
    }

    /// Loop iterations performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Runs `statements` in `environment`, stopping at the first error.
    pub fn interpret(
        &mut self,
        statements: &[Stmt],
        environment: &Environment,
    ) -> Result<(), RuntimeError> {
        for statement in statements {
            if let Flow::Break(position) = self.execute(statement, environment)? {
                return Err(RuntimeError::new(
                    position,
                    RuntimeErrorKind::BreakOutsideLoop,
                ));
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, stmt: &Stmt, environment: &Environment) -> ExecResult {
        match stmt {
            Stmt::Block { statements } => {
                let scope = Environment::new(Some(environment));
                return self.execute_block(statements, &scope);
            }
            Stmt::Break { keyword } => return Ok(Flow::Break(keyword.position)),
            Stmt::Expression { expr } => {
                self.evaluate(expr, environment)?;
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if is_truthy(self.evaluate(condition, environment)?) {
                    return self.execute(then_branch, environment);
                } else if let Some(els) = else_branch {
                    return self.execute(els, environment);
                }
            }
            Stmt::Print { expr, .. } => {
                let value = self.evaluate(expr, environment)?;
                tracing::trace!(value, "print");
                self.sink.write(value);
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr, environment)?,
                    None => 0,
                };
                if environment.is_local(&name.lexeme) {
                    tracing::trace!(name = %name.lexeme, "redeclaring variable in the same scope");
                }
                environment.define(&name.lexeme, value);
            }
            Stmt::While {
                keyword,
                condition,
                body,
            } => {
                while is_truthy(self.evaluate(condition, environment)?) {
                    self.count_step(keyword)?;
                    if let Flow::Break(_) = self.execute(body, environment)? {
                        break;
                    }
                }
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs `statements` in `scope`. A `break` or error stops the block at
    /// once; the scope is dropped by the caller on every path.
    pub fn execute_block(&mut self, statements: &[Stmt], scope: &Environment) -> ExecResult {
        for statement in statements {
            if let flow @ Flow::Break(_) = self.execute(statement, scope)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    fn count_step(&mut self, keyword: &Token) -> Result<(), RuntimeError> {
        self.steps += 1;
        tracing::trace!(steps = self.steps, "loop iteration");
        match self.config.step_limit {
            Some(limit) if self.steps > limit => Err(RuntimeError::new(
                keyword.position,
                RuntimeErrorKind::StepLimitExceeded(limit),
            )),
            _ => Ok(()),
        }
    }

    pub fn evaluate(&mut self, expr: &Expr, environment: &Environment) -> ValueResult {
        match expr {
            Expr::Assign { name, value } => {
                let value = self.evaluate(value, environment)?;
                environment.assign(name, value)?;
                Ok(value)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => self.interpret_expr_binary(left, operator, right, environment),
            Expr::Grouping(expr) => self.evaluate(expr, environment),
            Expr::Number(value) => Ok(*value),
            Expr::Unary { operator, right } => {
                self.interpret_expr_unary(operator, right, environment)
            }
            Expr::Variable { name } => environment.get(name),
        }
    }

    fn interpret_expr_unary(
        &mut self,
        operator: &Token,
        right: &Expr,
        environment: &Environment,
    ) -> ValueResult {
        let res = self.evaluate(right, environment)?;
        match operator.type_ {
            TokenType::MINUS => Ok(res.wrapping_neg()),
            _ => unreachable!("Invalid unary operator"),
        }
    }

    fn interpret_expr_binary(
        &mut self,
        left: &Expr,
        operator: &Token,
        right: &Expr,
        environment: &Environment,
    ) -> ValueResult {
        let l = self.evaluate(left, environment)?;
        let r = self.evaluate(right, environment)?;
        let zero_check = |kind: RuntimeErrorKind| {
            if r == 0 {
                Err(RuntimeError::new(operator.position, kind))
            } else {
                Ok(())
            }
        };
        match operator.type_ {
            TokenType::PLUS => Ok(l.wrapping_add(r)),
            TokenType::MINUS => Ok(l.wrapping_sub(r)),
            TokenType::STAR => Ok(l.wrapping_mul(r)),
            TokenType::SLASH => {
                zero_check(RuntimeErrorKind::DivisionByZero)?;
                Ok(l.wrapping_div(r))
            }
            TokenType::PERCENT => {
                zero_check(RuntimeErrorKind::ModuloByZero)?;
                Ok(l.wrapping_rem(r))
            }
            TokenType::LESS_THAN => Ok(from_bool(l < r)),
            TokenType::LESS_EQUAL => Ok(from_bool(l <= r)),
            TokenType::GREATER_THAN => Ok(from_bool(l > r)),
            TokenType::GREATER_EQUAL => Ok(from_bool(l >= r)),
            TokenType::EQUAL_EQUAL => Ok(from_bool(l == r)),
            TokenType::BANG_EQUAL => Ok(from_bool(l != r)),
            _ => unreachable!("invalid binary operator"),
        }
    }
}
