use crate::interpreter::Value;
use crate::token::*;

/// Expression nodes. Each node owns its children; operator and name tokens
/// are kept so runtime errors can point at the source.
#[derive(PartialEq, Clone, Debug)]
pub enum Expr {
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Grouping(Box<Expr>),
    Number(Value),
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Variable {
        name: Token,
    },
}
