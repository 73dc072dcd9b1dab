mod ast;
mod ast_printer;
mod parser;

pub use ast::{
    Expr, ExprKind, ExprVisitor, Identifier, LetStmt, Program, ReturnStmt, Stmt, StmtKind,
    StmtVisitor,
};
pub use ast_printer::ASTPrinter;
pub use parser::{InfixFn, Parser, Precedence, PrefixFn, StmtFn, MAX_EXPRESSION_DEPTH};
