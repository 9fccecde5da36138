use crate::expr::Expr;
use crate::token::Token;

#[derive(PartialEq, Clone, Debug)]
pub enum Stmt {
    Block {
        statements: Vec<Stmt>,
    },
    Break {
        keyword: Token,
    },
    Expression {
        expr: Expr,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    Print {
        keyword: Token,
        expr: Expr,
    },
    /// `initializer` is `None` for `var x;`, which binds zero.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    While {
        keyword: Token,
        condition: Expr,
        body: Box<Stmt>,
    },
}

