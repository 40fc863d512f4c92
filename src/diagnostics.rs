use std::io::{self, Write};

/// Receives lexical errors as they are found. The scanner only reports;
/// storing, printing, and turning errors into an exit status are the
/// caller's business.
pub trait DiagnosticSink {
    fn report(&mut self, line: usize, message: &str);
}

/// Writes each diagnostic to stderr and remembers that at least one arrived,
/// so a driver can decide whether compilation should continue.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }
}

impl DiagnosticSink for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        let mut stderr = io::stderr();
        // Nothing sensible to do if stderr itself is gone.
        let _ = writeln!(stderr, "[line {}] Error: {}", line, message);
        self.had_error = true;
    }
}
