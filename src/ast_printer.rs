use crate::expr::*;
use crate::stmt::Stmt;

/// Renders an expression as a parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
pub fn ast_to_string(expr: &Expr) -> String {
    match expr {
        Expr::Assign { name, value } => {
            parenthesize("=", &[name.lexeme.as_str(), ast_to_string(value).as_str()])
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(
            &operator.lexeme,
            &[ast_to_string(left).as_str(), ast_to_string(right).as_str()],
        ),
        Expr::Grouping(expr) => parenthesize("group", &[ast_to_string(expr).as_str()]),
        Expr::Number(value) => value.to_string(),
        Expr::Unary { operator, right } => {
            parenthesize(&operator.lexeme, &[ast_to_string(right).as_str()])
        }
        Expr::Variable { name } => name.lexeme.clone(),
    }
}

pub fn stmt_to_string(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Block { statements } => {
            let parts: Vec<String> = statements.iter().map(stmt_to_string).collect();
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            parenthesize("block", &parts)
        }
        Stmt::Break { .. } => String::from("(break)"),
        Stmt::Expression { expr } => ast_to_string(expr),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let condition = ast_to_string(condition);
            let then_branch = stmt_to_string(then_branch);
            match else_branch {
                Some(else_branch) => parenthesize(
                    "if",
                    &[
                        condition.as_str(),
                        then_branch.as_str(),
                        stmt_to_string(else_branch).as_str(),
                    ],
                ),
                None => parenthesize("if", &[condition.as_str(), then_branch.as_str()]),
            }
        }
        Stmt::Print { expr, .. } => parenthesize("print", &[ast_to_string(expr).as_str()]),
        Stmt::Var { name, initializer } => match initializer {
            Some(init) => {
                parenthesize("var", &[name.lexeme.as_str(), ast_to_string(init).as_str()])
            }
            None => parenthesize("var", &[name.lexeme.as_str()]),
        },
        Stmt::While {
            condition, body, ..
        } => parenthesize(
            "while",
            &[ast_to_string(condition).as_str(), stmt_to_string(body).as_str()],
        ),
    }
}

/// Renders a whole program, one form per top-level statement.
pub fn program_to_string(statements: &[Stmt]) -> String {
    statements
        .iter()
        .map(stmt_to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parenthesize(name: &str, parts: &[&str]) -> String {
    let mut builder: String = String::with_capacity(2 + name.len() + parts.len() * 2);
    builder.push('(');
    builder.push_str(name);
    for part in parts {
        builder.push(' ');
        builder.push_str(part);
    }
    builder.push(')');
    builder
}
