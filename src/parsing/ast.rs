use crate::lexing::Token;
use crate::source::*;
use std::fmt;

pub struct Program {
    pub source: Source,
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct Identifier {
    pub token: Token,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Identifier { token }
    }

    pub fn name(&self) -> &str {
        self.token.lexeme()
    }
}

impl ContainsSpan for Identifier {
    fn span(&self) -> &Span {
        self.token.span()
    }
}

// Statements

pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

pub enum StmtKind {
    Let(LetStmt),
    Return(ReturnStmt),
}

pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    pub fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::StmtResult {
        match &self.kind {
            StmtKind::Let(stmt) => visitor.visit_let_stmt(stmt),
            StmtKind::Return(stmt) => visitor.visit_return_stmt(stmt),
        }
    }

    pub fn let_stmt(token: Token, name: Identifier, value: Expr) -> Self {
        let span = Span::join(&token, &value);
        Stmt::new(StmtKind::Let(LetStmt { token, name, value }), span)
    }

    pub fn return_stmt(token: Token, value: Expr) -> Self {
        let span = Span::join(&token, &value);
        Stmt::new(StmtKind::Return(ReturnStmt { token, value }), span)
    }
}

impl ContainsSpan for Stmt {
    fn span(&self) -> &Span {
        &self.span
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            StmtKind::Let(stmt) => write!(
                f,
                "{} {} = {};",
                stmt.token.lexeme(),
                stmt.name.name(),
                stmt.value
            ),
            StmtKind::Return(stmt) => write!(f, "{} {};", stmt.token.lexeme(), stmt.value),
        }
    }
}

pub trait StmtVisitor {
    type StmtResult;

    fn visit_let_stmt(&mut self, stmt: &LetStmt) -> Self::StmtResult;
    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) -> Self::StmtResult;
}

// Expressions

pub enum ExprKind {
    Identifier(Identifier),
    IntegerLiteral(Token, i64),
    BooleanLiteral(Token, bool),
    Prefix(Token, Box<Expr>),
    Infix(Box<Expr>, Token, Box<Expr>),
}

pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::ExprResult {
        match &self.kind {
            ExprKind::Identifier(identifier) => visitor.visit_identifier_expr(identifier),
            ExprKind::IntegerLiteral(token, value) => visitor.visit_integer_expr(token, *value),
            ExprKind::BooleanLiteral(token, value) => visitor.visit_boolean_expr(token, *value),
            ExprKind::Prefix(operator, rhs) => visitor.visit_prefix_expr(operator, rhs),
            ExprKind::Infix(lhs, operator, rhs) => visitor.visit_infix_expr(lhs, operator, rhs),
        }
    }

    pub fn identifier(token: Token) -> Self {
        let span = token.span.clone();
        Expr::new(ExprKind::Identifier(Identifier::new(token)), span)
    }

    pub fn integer(token: Token, value: i64) -> Self {
        let span = token.span.clone();
        Expr::new(ExprKind::IntegerLiteral(token, value), span)
    }

    pub fn boolean(token: Token, value: bool) -> Self {
        let span = token.span.clone();
        Expr::new(ExprKind::BooleanLiteral(token, value), span)
    }

    pub fn prefix(operator: Token, rhs: Expr) -> Self {
        let span = Span::join(&operator, &rhs);
        Expr::new(ExprKind::Prefix(operator, Box::new(rhs)), span)
    }

    pub fn infix(lhs: Expr, operator: Token, rhs: Expr) -> Self {
        let span = Span::join(&lhs, &rhs);
        Expr::new(ExprKind::Infix(Box::new(lhs), operator, Box::new(rhs)), span)
    }
}

impl ContainsSpan for Expr {
    fn span(&self) -> &Span {
        &self.span
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(identifier) => write!(f, "{}", identifier.name()),
            ExprKind::IntegerLiteral(_, value) => write!(f, "{}", value),
            ExprKind::BooleanLiteral(_, value) => write!(f, "{}", value),
            ExprKind::Prefix(operator, rhs) => write!(f, "({}{})", operator.lexeme(), rhs),
            ExprKind::Infix(lhs, operator, rhs) => {
                write!(f, "({} {} {})", lhs, operator.lexeme(), rhs)
            }
        }
    }
}

pub trait ExprVisitor {
    type ExprResult;

    fn visit_identifier_expr(&mut self, identifier: &Identifier) -> Self::ExprResult;
    fn visit_integer_expr(&mut self, token: &Token, value: i64) -> Self::ExprResult;
    fn visit_boolean_expr(&mut self, token: &Token, value: bool) -> Self::ExprResult;
    fn visit_prefix_expr(&mut self, operator: &Token, rhs: &Expr) -> Self::ExprResult;
    fn visit_infix_expr(&mut self, lhs: &Expr, operator: &Token, rhs: &Expr) -> Self::ExprResult;
}
