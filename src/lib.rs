pub mod diagnostic;
pub mod lexing;
pub mod parsing;
pub mod repl;
pub mod source;

use diagnostic::*;
use lexing::*;
use parsing::*;
pub use source::*;
use std::rc::Rc;

pub fn run(source: Source) -> Result<Program, &'static str> {
    let reporter: Rc<dyn Reporter> = DefaultReporter::new();
    run_with_reporter(source, reporter)
}

pub fn run_with_reporter(
    source: Source,
    reporter: Rc<dyn Reporter>,
) -> Result<Program, &'static str> {
    let lexer = Lexer::new(source);

    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        for diagnostic in parser.errors() {
            reporter.report(diagnostic.clone());
        }
        Err("Parsing failed")
    }
}
