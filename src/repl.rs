use crate::lexing::Lexer;
use crate::parsing::Parser;
use crate::source;
use log::debug;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// Reads one line at a time, parsing each with a fresh lexer and parser, until
/// `input` runs dry.
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        debug!(target: "repl", "Read {:?}", line);

        let mut parser = Parser::new(Lexer::new(source::text(&line)));
        let program = parser.parse_program();

        if parser.errors().is_empty() {
            writeln!(output, "{}", program)?;
        } else {
            for diagnostic in parser.errors() {
                writeln!(output, "\t{}", diagnostic.message)?;
            }
        }
    }
}
