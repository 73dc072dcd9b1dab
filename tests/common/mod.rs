pub use monkey::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_source {

    use monkey::source::{Source, SourceImpl};

    pub fn new() -> Source {
        new_text("")
    }

    pub fn new_text(text: &str) -> Source {
        std::rc::Rc::new(SourceImpl {
            name: String::from("<test>"),
            content: String::from(text),
        })
    }
}

#[allow(dead_code)]
pub mod test_span {

    use super::test_source;
    use monkey::source::*;

    pub fn new(index: usize, length: usize) -> Span {
        Span {
            source: test_source::new(),
            index,
            length,
            line: 1,
        }
    }
}

#[allow(dead_code)]
pub mod test_token {

    use super::test_source;
    use monkey::lexing::*;
    use monkey::source::Span;

    pub fn test(kind: TokenKind, text: &str) -> Token {
        let span = Span::new(&test_source::new_text(text), 0, text.len(), 1);
        Token::new(kind, span)
    }

    pub fn eof() -> Token {
        test(TokenKind::EOF, "")
    }

    pub fn let_keyword() -> Token {
        test(TokenKind::Let, "let")
    }

    pub fn equals() -> Token {
        test(TokenKind::Equal, "=")
    }

    pub fn semicolon() -> Token {
        test(TokenKind::Semicolon, ";")
    }

    pub fn identifier(name: &str) -> Token {
        test(TokenKind::Identifier, name)
    }

    pub fn int(literal: &str) -> Token {
        test(TokenKind::Int, literal)
    }

    pub fn illegal(literal: &str) -> Token {
        test(TokenKind::Illegal, literal)
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

#[allow(dead_code)]
impl TestReporter {
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!(
            "Expected {} {}, got {}",
            expected.len(),
            kind,
            got.len(),
        );
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
