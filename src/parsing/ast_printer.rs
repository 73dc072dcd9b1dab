use super::ast::*;
use crate::lexing::*;

enum ASTPrinterMode {
    Stdout,
    Collect(Vec<String>),
}

pub struct ASTPrinter {
    indent: i32,
    mode: ASTPrinterMode,
}

impl ASTPrinter {
    pub fn new() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Stdout,
        }
    }

    pub fn collect() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Collect(Vec::new()),
        }
    }

    pub fn print(&mut self, program: &Program) {
        self.print_stmts(&program.statements);
    }

    pub fn print_stmts(&mut self, stmts: &[Stmt]) {
        stmts.iter().for_each(|s| s.accept(self));
    }

    pub fn collected(&self) -> &[String] {
        match &self.mode {
            ASTPrinterMode::Collect(collection) => &collection,
            _ => &[],
        }
    }

    fn write_ln(&mut self, token: &str) {
        let indent = if self.indent > 0 {
            (1..self.indent).map(|_| "|  ").collect::<String>() + "|--"
        } else {
            String::new()
        };

        let line = format!("{}{}", indent, token);

        match &mut self.mode {
            ASTPrinterMode::Stdout => println!("{}", line),
            ASTPrinterMode::Collect(collection) => collection.push(line),
        }
    }

    fn indent<T>(&mut self, block: T)
    where
        T: Fn(&mut ASTPrinter) -> (),
    {
        self.indent += 1;
        block(self);
        self.indent -= 1;
    }
}

impl StmtVisitor for ASTPrinter {
    type StmtResult = ();

    fn visit_let_stmt(&mut self, stmt: &LetStmt) {
        self.write_ln(&format!("Let(name: {})", stmt.name.name()));
        self.indent(|visitor| stmt.value.accept(visitor));
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) {
        self.write_ln("Return");
        self.indent(|visitor| stmt.value.accept(visitor));
    }
}

impl ExprVisitor for ASTPrinter {
    type ExprResult = ();

    fn visit_identifier_expr(&mut self, identifier: &Identifier) {
        self.write_ln(&format!("Identifier({})", identifier.name()));
    }

    fn visit_integer_expr(&mut self, _token: &Token, value: i64) {
        self.write_ln(&format!("Integer({})", value));
    }

    fn visit_boolean_expr(&mut self, _token: &Token, value: bool) {
        self.write_ln(&format!("Boolean({})", value));
    }

    fn visit_prefix_expr(&mut self, operator: &Token, rhs: &Expr) {
        self.write_ln(&format!("Prefix({})", operator.lexeme()));
        self.indent(|visitor| rhs.accept(visitor));
    }

    fn visit_infix_expr(&mut self, lhs: &Expr, operator: &Token, rhs: &Expr) {
        self.write_ln(&format!("Infix({})", operator.lexeme()));
        self.indent(|visitor| {
            lhs.accept(visitor);
            rhs.accept(visitor);
        });
    }
}
