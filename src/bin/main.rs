use lox_scanner::{diagnostics::ConsoleReporter, scanner::Scanner};
use std::{
    env,
    io::{self, Write},
};

fn main() {
    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => run_prompt(),
        2 => run_file(args[1].as_str()),
        _ => {
            eprintln!("Usage: lox-scanner [script]");
            std::process::exit(64);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(65);
    }
}

fn run_file(path: &str) -> io::Result<()> {
    let contents = std::fs::read_to_string(path)?;

    let mut reporter = ConsoleReporter::new();
    run(contents.as_str(), &mut reporter);

    if reporter.had_error() {
        std::process::exit(65);
    }
    Ok(())
}

fn run_prompt() -> io::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 {
            break;
        }

        // A bad line should not poison the next one, so each gets a
        // fresh reporter and the error flag is simply forgotten.
        let mut reporter = ConsoleReporter::new();
        run(buffer.as_str(), &mut reporter);
    }

    Ok(())
}

fn run(source: &str, reporter: &mut ConsoleReporter) {
    let tokens = Scanner::new(source, reporter).scan_tokens();
    for token in &tokens {
        println!("{}", token);
    }
}
