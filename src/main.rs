use monkey::parsing::ASTPrinter;
use std::env;
use std::io;

fn main() -> Result<(), &'static str> {
    env_logger::init();

    if let Some(path) = env::args().nth(1) {
        let source = monkey::source::file(&path).map_err(|_| "Could not read source file")?;
        let program = monkey::run(source)?;
        ASTPrinter::new().print(&program);
        return Ok(());
    }

    let user = env::var("USER").unwrap_or_else(|_| String::from("there"));
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Type in commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    monkey::repl::start(stdin.lock(), &mut stdout).map_err(|_| "Could not read from stdin")
}
