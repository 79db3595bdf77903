use std::fmt;

use tracing::debug;

use crate::token::{Literal, Token, TokenKind};

/// Exit status for a scan that reported at least one lexical error.
pub const EXIT_LEXICAL_ERROR: u8 = 65;

/// Classifies a scan error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// String literal with no closing quote before end of input.
    UnterminatedString,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => write!(f, "Unexpected character: {ch}"),
            Self::UnterminatedString => f.write_str("Unterminated string."),
        }
    }
}

/// Lexical error reported during a scan.
///
/// Scanning never stops on these; they are collected alongside
/// the tokens in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
}

/// Result of scanning one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// Tokens in source order, always ending with [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    /// Diagnostics in source order.
    pub errors: Vec<ScanError>,
}

impl Scan {
    #[must_use]
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// `0` for a clean scan, `65` if any lexical error occurred.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.had_error() {
            EXIT_LEXICAL_ERROR
        } else {
            0
        }
    }
}

/// Scan a complete source text into tokens and diagnostics.
#[must_use]
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn scan(source: &str) -> Scan {
    Scanner::new(source).scan_tokens()
}

/// Single-pass cursor over one source buffer.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Consume the scanner and run it over the whole input.
    #[must_use]
    pub fn scan_tokens(mut self) -> Scan {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan finished"
        );

        Scan {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => self.add_pair(TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_pair(TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.add_pair(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.add_pair(TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.matches(b'/') {
                    self.skip_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.read_string(),
            b'0'..=b'9' => self.read_number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.read_identifier(),
            _ => self.unexpected_character(),
        }
    }

    const fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current + 1).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.current += 1;
        Some(ch)
    }

    /// Consume the next byte only if it equals `expected`.
    fn matches(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None, self.line);
    }

    fn add_pair(&mut self, with_equal: TokenKind, alone: TokenKind) {
        let kind = if self.matches(b'=') { with_equal } else { alone };
        self.add_token(kind);
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>, line: usize) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal,
            line,
        });
    }

    fn report(&mut self, kind: ScanErrorKind) {
        let error = ScanError {
            kind,
            line: self.line,
        };
        debug!(%error, "lexical error");
        self.errors.push(error);
    }

    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|c| c != b'\n') {
            self.current += 1;
        }
    }

    fn read_string(&mut self) {
        let start_line = self.line;

        loop {
            match self.advance() {
                None => {
                    self.report(ScanErrorKind::UnterminatedString);
                    return;
                }
                Some(b'"') => break,
                Some(b'\n') => self.line += 1,
                Some(_) => {}
            }
        }

        // Strip the surrounding quotes.
        let value = &self.source[self.start + 1..self.current - 1];
        self.push_token(
            TokenKind::String,
            Some(Literal::String(value.to_string())),
            start_line,
        );
    }

    fn read_number(&mut self) {
        self.skip_digits();

        // A trailing `.` only belongs to the number when a digit follows it.
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
            self.skip_digits();
        }

        // Digits with an optional fraction always parse.
        let value: f64 = self.lexeme().parse().unwrap_or_default();
        self.push_token(TokenKind::Number, Some(Literal::Number(value)), self.line);
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }
    }

    fn read_identifier(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.current += 1;
        }

        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn unexpected_character(&mut self) {
        // The offending byte may start a multi-byte character; report and
        // skip the whole scalar so later lexemes stay on char boundaries.
        let ch = self.source[self.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.current = self.start + ch.len_utf8();
        self.report(ScanErrorKind::UnexpectedCharacter(ch));
    }
}
