use std::io::Cursor;

#[test]
fn prints_parsed_program() {
    let output = run_repl("let x = 1 + 2 * 3;\nreturn x\n");
    assert_eq!(output, ">> let x = (1 + (2 * 3));\n>> return x;\n>> ");
}

#[test]
fn prints_diagnostics() {
    let output = run_repl("let 5;\n");
    assert_eq!(
        output,
        ">> \tExpected next token to be Identifier, got Int ('5') instead\n>> "
    );
}

#[test]
fn empty_input_only_prompts() {
    assert_eq!(run_repl(""), ">> ");
}

fn run_repl(input: &str) -> String {
    let mut output: Vec<u8> = Vec::new();
    monkey::repl::start(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}
