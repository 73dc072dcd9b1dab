use super::ast::*;
use crate::diagnostic::*;
use crate::lexing::*;
use log::{debug, trace};
use std::collections::HashMap;

type Result<T> = DiagnosticResult<T>;

/// Deepest nesting of prefix operators and groupings a single expression may reach.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

pub type StmtFn = fn(&mut Parser) -> Result<Stmt>;
pub type PrefixFn = fn(&mut Parser) -> Result<Expr>;
pub type InfixFn = fn(&mut Parser, lhs: Expr) -> Result<Expr>;

/// Recursive descent parser reading through a two-token window (`current`, `peek`).
///
/// Statements and expressions are dispatched through tables keyed by token
/// kind, so new forms are added by registering a parse function rather than
/// by editing a central match.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    statement_fns: HashMap<TokenKind, StmtFn>,
    prefix_fns: HashMap<TokenKind, PrefixFn>,
    infix_fns: HashMap<TokenKind, InfixFn>,
    errors: Vec<Diagnostic>,
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            statement_fns: HashMap::new(),
            prefix_fns: HashMap::new(),
            infix_fns: HashMap::new(),
            errors: Vec::new(),
            depth: 0,
        };

        parser.register_statement(TokenKind::Let, Parser::let_stmt);
        parser.register_statement(TokenKind::Return, Parser::return_stmt);

        parser.register_prefix(TokenKind::Identifier, Parser::identifier);
        parser.register_prefix(TokenKind::Int, Parser::integer);
        parser.register_prefix(TokenKind::True, Parser::boolean);
        parser.register_prefix(TokenKind::False, Parser::boolean);
        parser.register_prefix(TokenKind::Bang, Parser::prefix);
        parser.register_prefix(TokenKind::Minus, Parser::prefix);
        parser.register_prefix(TokenKind::LeftParen, Parser::grouping);

        for kind in &[
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::EqualEqual,
            TokenKind::BangEqual,
            TokenKind::Less,
            TokenKind::Greater,
        ] {
            parser.register_infix(*kind, Parser::infix);
        }

        parser
    }

    pub fn register_statement(&mut self, kind: TokenKind, func: StmtFn) {
        self.statement_fns.insert(kind, func);
    }

    pub fn register_prefix(&mut self, kind: TokenKind, func: PrefixFn) {
        self.prefix_fns.insert(kind, func);
    }

    pub fn register_infix(&mut self, kind: TokenKind, func: InfixFn) {
        self.infix_fns.insert(kind, func);
    }

    /// Diagnostics accumulated by every failed statement so far.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.peek
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements: Vec<Stmt> = Vec::new();

        while !self.current_is(TokenKind::EOF) {
            match self.parse_statement() {
                Ok(Some(stmt)) => statements.push(stmt),
                Ok(None) => {}
                Err(diagnostic) => {
                    trace!(target: "parser", "Statement failed: {}", diagnostic.message);
                    self.errors.push(diagnostic);
                }
            }
            self.advance();
        }

        debug!(
            target: "parser",
            "Parsed {} statement(s) with {} error(s)",
            statements.len(),
            self.errors.len()
        );

        Program {
            source: self.lexer.source().clone(),
            statements,
        }
    }

    /// Dispatches on the current token. Kinds with no registered statement
    /// produce `Ok(None)`.
    pub fn parse_statement(&mut self) -> Result<Option<Stmt>> {
        match self.statement_fns.get(&self.current.kind).copied() {
            Some(func) => {
                trace!(target: "parser", "Dispatching statement on {}", self.current);
                func(self).map(Some)
            }
            None => {
                trace!(target: "parser", "Skipping {}", self.current);
                Ok(None)
            }
        }
    }

    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Consumes the peek token if it is `kind`; otherwise leaves the window
    /// untouched and fails.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<()> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(Diagnostic::expected(kind, &self.peek))
        }
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    // Statements

    fn let_stmt(&mut self) -> Result<Stmt> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier::new(self.current.clone());

        self.expect_peek(TokenKind::Equal)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Stmt::let_stmt(token, name, value))
    }

    fn return_stmt(&mut self) -> Result<Stmt> {
        let token = self.current.clone();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Stmt::return_stmt(token, value))
    }

    // Expressions

    pub fn parse_expression(&mut self, prec: Precedence) -> Result<Expr> {
        self.depth += 1;
        let result = if self.depth > MAX_EXPRESSION_DEPTH {
            Err(Diagnostic::error(&self.current, "Expression nested too deeply"))
        } else {
            self.expression(prec)
        };
        self.depth -= 1;
        result
    }

    fn expression(&mut self, prec: Precedence) -> Result<Expr> {
        let prefix = self
            .prefix_fns
            .get(&self.current.kind)
            .copied()
            .ok_or_else(|| {
                let message = format!("No prefix parse function for {:?}", self.current.kind);
                Diagnostic::error(&self.current, &message)
            })?;

        let mut lhs = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && prec < Precedence::for_kind(self.peek.kind) {
            let infix = match self.infix_fns.get(&self.peek.kind).copied() {
                Some(infix) => infix,
                None => break,
            };
            self.advance();
            lhs = infix(self, lhs)?;
        }

        Ok(lhs)
    }

    fn identifier(&mut self) -> Result<Expr> {
        Ok(Expr::identifier(self.current.clone()))
    }

    fn integer(&mut self) -> Result<Expr> {
        let token = self.current.clone();
        match token.lexeme().parse::<i64>() {
            Ok(value) => Ok(Expr::integer(token, value)),
            Err(_) => {
                let message = format!("Could not parse {} as integer", token.lexeme());
                Err(Diagnostic::error(&token, &message))
            }
        }
    }

    fn boolean(&mut self) -> Result<Expr> {
        let token = self.current.clone();
        let value = token.kind == TokenKind::True;
        Ok(Expr::boolean(token, value))
    }

    fn prefix(&mut self) -> Result<Expr> {
        let operator = self.current.clone();
        self.advance();
        let rhs = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::prefix(operator, rhs))
    }

    fn infix(&mut self, lhs: Expr) -> Result<Expr> {
        let operator = self.current.clone();
        let prec = Precedence::for_kind(operator.kind);
        self.advance();
        let rhs = self.parse_expression(prec)?;
        Ok(Expr::infix(lhs, operator, rhs))
    }

    fn grouping(&mut self) -> Result<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightParen)?;
        Ok(expr)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
}

impl Precedence {
    pub fn for_kind(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equals,
            TokenKind::Less | TokenKind::Greater => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}
