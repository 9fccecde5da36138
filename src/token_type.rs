#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Literals.
    NUMBER,
    IDENTIFIER,

    // Single-character tokens.
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    EQ,
    LPAREN,
    RPAREN,
    LBRACE,
    RBRACE,
    SEMICOLON,

    // Keywords. `var`, `while`, `if` and `else` share KEYWORD and are told
    // apart by lexeme; `print` is an IDENTIFIER.
    KEYWORD,
    BREAK,

    // One or two character tokens.
    LESS_EQUAL,
    GREATER_EQUAL,
    LESS_THAN,
    GREATER_THAN,
    EQUAL_EQUAL,
    BANG_EQUAL,

    EOF,
}
