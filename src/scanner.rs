use crate::{
    diagnostics::DiagnosticSink,
    error::{Error, Result},
    token::{Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Single-pass scanner over one source buffer. Lexical errors go to the
/// sink; the token stream itself never fails. One scanner per scan.
pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let c = self.src.next()?;
            self.lexeme_buffer.clear();
            self.lexeme_buffer.push(c);
            // A multi-line string bumps `line` while it is being consumed,
            // but the token belongs to the line it started on.
            let start_line = self.line;

            match self.token_kind(c) {
                Ok(Some(kind)) => {
                    return Some(Token {
                        kind,
                        lexeme: std::mem::take(&mut self.lexeme_buffer),
                        line: start_line,
                    });
                }
                // Whitespace, newline or comment: nothing to emit.
                Ok(None) => {}
                Err(e) => self.sink.report(e.line(), e.message()),
            }
        }
    }
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
            sink,
        }
    }

    /// Drains the scanner and appends the terminating end-of-file token,
    /// tagged with whatever line the scan finished on.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next() {
            tokens.push(token);
        }
        tokens.push(Token {
            kind: TokenKind::EndOfFile,
            lexeme: String::new(),
            line: self.line,
        });
        tokens
    }

    fn token_kind(&mut self, c: char) -> Result<Option<TokenKind>> {
        use TokenKind::*;
        let kind = match c {
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ',' => Comma,
            '.' => Dot,
            '-' => Minus,
            '+' => Plus,
            ';' => Semicolon,
            '*' => Star,
            '!' => if self.next_matches('=') { BangEqual } else { Bang },
            '=' => if self.next_matches('=') { EqualEqual } else { Equal },
            '<' => if self.next_matches('=') { LessEqual } else { Less },
            '>' => if self.next_matches('=') { GreaterEqual } else { Greater },
            '/' => {
                if self.next_matches('/') {
                    // Comment runs to the end of the line; the newline itself
                    // is left for the main loop to count.
                    self.take_while(|n| n != &'\n');
                    return Ok(None);
                }
                Slash
            }
            ' ' | '\r' | '\t' => return Ok(None),
            '\n' => {
                self.line += 1;
                return Ok(None);
            }
            '"' => self.string()?,
            c if c.is_ascii_digit() => self.number(),
            c if can_start_identifier(&c) => self.identifier(),
            c => return Err(Error::unexpected_character(self.line, c)),
        };
        Ok(Some(kind))
    }

    fn next_matches(&mut self, c: char) -> bool {
        match self.src.peek() {
            Some(next) if c == *next => {
                self.lexeme_buffer.push(self.src.next().unwrap());
                true
            }
            _ => false,
        }
    }

    fn string(&mut self) -> Result<TokenKind> {
        while let Some(&c) = self.src.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.lexeme_buffer.push(c);
            self.src.next();
        }

        match self.src.next() {
            None => Err(Error::unterminated_string(self.line)),
            Some(quote) => {
                // Must be the closing " for the loop above to have stopped.
                self.lexeme_buffer.push(quote);
                let value = self.lexeme_buffer[1..self.lexeme_buffer.len() - 1].to_string();
                Ok(TokenKind::String(value))
            }
        }
    }

    fn number(&mut self) -> TokenKind {
        self.take_while(|n| n.is_ascii_digit());

        // Consume a fractional part only when a digit follows the dot, so
        // `1.` lexes as a number and a dot, not a malformed number.
        if let Some(&'.') = self.src.peek() {
            if let Some(maybe_digit) = self.src.peek_next() {
                if maybe_digit.is_ascii_digit() {
                    self.lexeme_buffer.push(self.src.next().unwrap());
                    self.take_while(|n| n.is_ascii_digit());
                }
            }
        }

        // Digit runs with at most one interior dot always parse as f64.
        TokenKind::Number(self.lexeme_buffer.parse().unwrap())
    }

    fn identifier(&mut self) -> TokenKind {
        self.take_while(is_part_of_valid_identifier);

        match KEYWORDS.get(self.lexeme_buffer.as_str()) {
            Some(keyword) => keyword.clone(),
            None => TokenKind::Identifier,
        }
    }

    fn take_while(&mut self, keep_going: impl Fn(&char) -> bool) {
        while let Some(next) = self.src.peek() {
            if !keep_going(next) {
                break;
            }
            self.lexeme_buffer.push(self.src.next().unwrap());
        }
    }
}

fn can_start_identifier(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}
