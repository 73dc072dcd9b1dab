use crate::lexing::{Token, TokenKind};
use crate::source::*;
use colored::*;
use std::fmt;
use std::rc::Rc;

pub type DiagnosticResult<T> = std::result::Result<T, Diagnostic>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Error,
    // Warning,
}

#[derive(Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
    pub expected: Option<TokenKind>,
    pub found: Option<TokenKind>,
}

impl Diagnostic {
    pub fn error<T: ContainsSpan>(span: &T, message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            span: span.span().clone(),
            message: String::from(message),
            expected: None,
            found: None,
        }
    }

    /// A grammar assertion failed: `expected` was required next, `found` was there instead.
    pub fn expected(expected: TokenKind, found: &Token) -> Self {
        let message = format!(
            "Expected next token to be {:?}, got {:?} ('{}') instead",
            expected,
            found.kind,
            found.lexeme()
        );
        Diagnostic {
            expected: Some(expected),
            found: Some(found.kind),
            ..Diagnostic::error(found, &message)
        }
    }
}

impl ContainsSpan for Diagnostic {
    fn span(&self) -> &Span {
        &self.span
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity
            && self.message == other.message
            && self.span.index == other.span.index
            && self.span.length == other.span.length
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?}: {} ({}, index {})",
            self.severity,
            self.message,
            self.span.location(),
            self.span.index
        )
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = match diagnostic.severity {
            Severity::Error => "• Error:".red().bold(),
        };
        println!("\n{} {}\n", header, diagnostic.message);
        let (line, offset) = diagnostic.span.entire_line();
        println!("  {}", line);

        let offset = (0..offset).map(|_| " ").collect::<String>();
        let underline = (0..diagnostic.span.length.max(1))
            .map(|_| "^")
            .collect::<String>();
        println!("  {}{}", offset, underline);
        println!("  {}\n", diagnostic.span.location());
    }
}
