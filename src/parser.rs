use crate::error::ParseError;
use crate::expr::*;
use crate::stmt::Stmt;
use crate::token::*;
use crate::token_type::TokenType::*;

/// Recursive-descent parser over a borrowed token slice. The slice must end
/// with an EOF token, as [`crate::scanner::tokenize`] guarantees.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    /// Number of `while` bodies enclosing the statement being parsed.
    loop_depth: usize,
    /// Nested statements, groupings, negations and assignments currently open.
    depth: usize,
    /// Set by `parse_recovering`: errors are collected and parsing resumes
    /// at the next statement of the enclosing block.
    recovering: bool,
    errors: Vec<ParseError>,
}

type ExprResult = Result<Expr, ParseError>;

type StmtResult = Result<Stmt, ParseError>;

/// Lexeme of the identifier that starts a print statement.
const PRINT: &str = "print";

/// Deepest nesting the parser accepts. Bounds the recursion of every pass
/// over the tree.
pub const MAX_DEPTH: usize = 64;

macro_rules! check {
    ($self:ident, $types:pat) => {
        if $self.is_at_end() {
            false
        } else {
            matches!(&$self.peek().type_, $types)
        }
    };
}

macro_rules! match_ {
    ($self:ident, $types:pat) => {
        if check!($self, $types) {
            $self.advance();
            true
        } else {
            false
        }
    };
}

macro_rules! consume {
    ($self:ident, $type_:pat, $message:expr) => {
        if check!($self, $type_) {
            Ok($self.advance())
        } else {
            Err(Parser::error($self.peek(), $message))
        }
    };
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            current: 0,
            loop_depth: 0,
            depth: 0,
            recovering: false,
            errors: Vec::new(),
        }
    }

    /// Parses the whole program, stopping at the first error.
    pub fn parse(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.recovering = false;
        self.program()
    }

    /// Parses the whole program, skipping to the next statement after each
    /// error so that every error in the source is reported.
    pub fn parse_recovering(&mut self) -> Result<Vec<Stmt>, Vec<ParseError>> {
        self.recovering = true;
        let result = self.program();
        self.recovering = false;
        let mut errors = std::mem::take(&mut self.errors);
        match result {
            Ok(statements) if errors.is_empty() => Ok(statements),
            Ok(_) => Err(errors),
            Err(err) => {
                errors.push(err);
                Err(errors)
            }
        }
    }

    pub fn expression(&mut self) -> ExprResult {
        self.assignment()
    }

    fn program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements: Vec<Stmt> = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.recoverable_statement()? {
                statements.push(stmt);
            }
        }
        Ok(statements)
    }

    /// A statement, or `None` when it failed and the error was recorded for
    /// `parse_recovering`. Recovering here keeps `loop_depth` of the block
    /// being parsed.
    fn recoverable_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        match self.statement() {
            Ok(stmt) => Ok(Some(stmt)),
            Err(err) if self.recovering => {
                self.errors.push(err);
                self.synchronize();
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn statement(&mut self) -> StmtResult {
        self.nested(Parser::any_statement)
    }

    fn any_statement(&mut self) -> StmtResult {
        if self.match_keyword("var") {
            return self.var_declaration();
        }
        if self.match_keyword("if") {
            return self.if_statement();
        }
        if self.match_keyword("while") {
            return self.while_statement();
        }
        if match_!(self, BREAK) {
            return self.break_statement();
        }
        if self.check_print() {
            let keyword = self.advance();
            return self.print_statement(keyword);
        }
        if match_!(self, LBRACE) {
            return Ok(Stmt::Block {
                statements: self.block()?,
            });
        }
        self.expression_statement()
    }

    fn if_statement(&mut self) -> StmtResult {
        consume!(self, LPAREN, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        consume!(self, RPAREN, "Expect ')' after if condition.")?;

        let then_branch = self.statement()?;
        // the innermost unmatched `if` takes the `else`
        let else_branch = if self.match_keyword("else") {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch,
        })
    }

    fn print_statement(&mut self, keyword: Token) -> StmtResult {
        let value = self.expression()?;
        consume!(self, SEMICOLON, "Expect ';' after value.")?;
        Ok(Stmt::Print {
            keyword,
            expr: value,
        })
    }

    fn break_statement(&mut self) -> StmtResult {
        let keyword = self.previous();
        if self.loop_depth == 0 {
            return Err(Parser::error(&keyword, "Can't use 'break' outside of a loop."));
        }
        consume!(self, SEMICOLON, "Expect ';' after 'break'.")?;
        Ok(Stmt::Break { keyword })
    }

    fn var_declaration(&mut self) -> StmtResult {
        let name = consume!(self, IDENTIFIER, "Expect variable name.")?;
        let mut initializer: Option<Expr> = None;
        if match_!(self, EQ) {
            initializer = Some(self.expression()?);
        }
        consume!(self, SEMICOLON, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    fn while_statement(&mut self) -> StmtResult {
        let keyword = self.previous();
        consume!(self, LPAREN, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        consume!(self, RPAREN, "Expect ')' after condition.")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;

        Ok(Stmt::While {
            keyword,
            condition,
            body: Box::new(body?),
        })
    }

    fn expression_statement(&mut self) -> StmtResult {
        let expr = self.expression()?;
        consume!(self, SEMICOLON, "Expect ';' after expression.")?;
        Ok(Stmt::Expression { expr })
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::<Stmt>::new();
        while !check!(self, RBRACE) && !self.is_at_end() {
            if let Some(stmt) = self.recoverable_statement()? {
                statements.push(stmt);
            }
        }
        consume!(self, RBRACE, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn assignment(&mut self) -> ExprResult {
        let expr = self.equality()?;
        if match_!(self, EQ) {
            let equals = self.previous();
            let value = self.nested(Parser::assignment)?;
            return match expr {
                Expr::Variable { name } => Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                }),
                _ => Err(Parser::error(&equals, "Invalid assignment target.")),
            };
        }
        Ok(expr)
    }

    fn equality(&mut self) -> ExprResult {
        let mut expr = self.comparison()?;
        while match_!(self, BANG_EQUAL | EQUAL_EQUAL) {
            let operator = self.previous();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> ExprResult {
        let mut expr: Expr = self.term()?;
        while match_!(self, GREATER_THAN | GREATER_EQUAL | LESS_THAN | LESS_EQUAL) {
            let operator = self.previous();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn term(&mut self) -> ExprResult {
        let mut expr: Expr = self.factor()?;
        while match_!(self, MINUS | PLUS) {
            let operator = self.previous();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn factor(&mut self) -> ExprResult {
        let mut expr: Expr = self.unary()?;
        while match_!(self, SLASH | STAR | PERCENT) {
            let operator = self.previous();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ExprResult {
        if match_!(self, MINUS) {
            let operator = self.previous();
            let right = self.nested(Parser::unary)?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }
        self.primary()
    }

    fn primary(&mut self) -> ExprResult {
        if match_!(self, NUMBER) {
            let token = self.previous();
            return match token.literal {
                Some(value) => Ok(Expr::Number(value)),
                None => Err(Parser::error(&token, "Expect number literal.")),
            };
        }
        if match_!(self, IDENTIFIER) {
            return Ok(Expr::Variable {
                name: self.previous(),
            });
        }
        if match_!(self, LPAREN) {
            let expr = self.nested(Parser::expression)?;
            consume!(self, RPAREN, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }
        Err(Parser::error(self.peek(), "Expect expression."))
    }

    /* Non-production rule functions */
    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len() || matches!(self.peek().type_, EOF)
    }
    #[inline(always)]
    fn peek(&self) -> &Token {
        // an exhausted slice without EOF behaves as if it ended in one
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_TOKEN)
    }
    #[inline(always)]
    fn previous(&self) -> Token {
        self.tokens[self.current - 1].clone()
    }
    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }
    fn check_keyword(&self, word: &str) -> bool {
        !self.is_at_end() && self.peek().is_keyword(word)
    }
    fn match_keyword(&mut self, word: &str) -> bool {
        if self.check_keyword(word) {
            self.advance();
            true
        } else {
            false
        }
    }
    fn check_print(&self) -> bool {
        check!(self, IDENTIFIER) && self.peek().lexeme == PRINT
    }
    /// Runs one nested production, failing once `MAX_DEPTH` levels are open.
    fn nested<T>(
        &mut self,
        production: fn(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(Parser::error(self.peek(), "Too much nesting."));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }
    fn error(token: &Token, message: &str) -> ParseError {
        ParseError {
            position: token.position,
            found: token.type_,
            lexeme: token.lexeme.clone(),
            message: String::from(message),
        }
    }
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if matches!(self.previous().type_, SEMICOLON) {
                return;
            }
            if matches!(self.peek().type_, BREAK | LBRACE | RBRACE)
                || ["var", "if", "while"].iter().any(|w| self.check_keyword(w))
                || self.check_print()
            {
                return;
            }
            self.advance();
        }
    }
}

static EOF_TOKEN: Token = Token {
    type_: EOF,
    lexeme: String::new(),
    literal: None,
    position: Position { line: 1, column: 1 },
};

/// Parses `tokens` as a whole program, halting at the first error.
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(tokens).parse()
}
