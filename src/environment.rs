use crate::error::{RuntimeError, RuntimeErrorKind};
use crate::interpreter::Value;
use crate::token::Token;
use std::cell::RefCell;
use std::collections::HashMap;

/// One scope frame. A block's frame borrows its parent, so it can never
/// outlive it and is released when the block's execution returns.
#[derive(Debug, Default)]
pub struct Environment<'p> {
    enclosing: Option<&'p Environment<'p>>,
    values: RefCell<HashMap<String, Value>>,
}

impl<'p> Environment<'p> {
    pub fn new(enclosing: Option<&'p Environment<'p>>) -> Self {
        Environment {
            enclosing,
            values: RefCell::new(HashMap::new()),
        }
    }

    /// Binds `name` in this frame. Redeclaring a name in the same frame
    /// replaces the earlier binding.
    pub fn define(&self, name: &str, value: Value) {
        self.values.borrow_mut().insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.lookup(&name.lexeme).ok_or_else(|| {
            RuntimeError::new(
                name.position,
                RuntimeErrorKind::UndefinedVariable(name.lexeme.clone()),
            )
        })
    }

    /// Rebinds `name` in the nearest frame that defines it.
    pub fn assign(&self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.borrow_mut().get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }

        if let Some(enclosing) = self.enclosing {
            return enclosing.assign(name, value);
        }

        Err(RuntimeError::new(
            name.position,
            RuntimeErrorKind::UndefinedAssignment(name.lexeme.clone()),
        ))
    }

    /// Value of `name` in this frame or any enclosing one.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.borrow().get(name) {
            return Some(*value);
        }
        self.enclosing.and_then(|enclosing| enclosing.lookup(name))
    }

    /// Whether this frame itself binds `name`, ignoring enclosing frames.
    pub fn is_local(&self, name: &str) -> bool {
        self.values.borrow().contains_key(name)
    }
}
