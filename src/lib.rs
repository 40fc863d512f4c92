//! A scanner for the Lox scripting language: one pass over an in-memory
//! source buffer, out comes the flat token stream a parser consumes.
//! Lexical errors go to a caller-supplied [DiagnosticSink] instead of
//! aborting the scan.

pub mod diagnostics;
pub mod error;
pub mod scanner;
pub mod token;

pub use crate::diagnostics::DiagnosticSink;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::token::{Token, TokenKind};

use crate::scanner::Scanner;

/// Scans `source` to completion. The returned sequence always ends with a
/// single [TokenKind::EndOfFile] token; whether anything went wrong is
/// visible only through the sink.
pub fn scan(source: &str, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    Scanner::new(source, sink).scan_tokens()
}
