use std::fmt::{self, Display};
use std::result;

pub type Result<T> = result::Result<T, Error>;

/// The two recoverable lexical-error classes. Neither aborts a scan: the
/// scanner reports the error, discards the offending input, and carries on.
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    UnexpectedCharacter { found: char },
    UnterminatedString,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    line: usize,
    message: String,
}

impl Error {
    pub fn unexpected_character(line: usize, found: char) -> Error {
        let kind = ErrorKind::UnexpectedCharacter { found };
        let message = format!("Unexpected character '{}'.", found);
        Error { kind, line, message }
    }

    pub fn unterminated_string(line: usize) -> Error {
        let kind = ErrorKind::UnterminatedString;
        Error { kind, line, message: "Unterminated string.".into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}
