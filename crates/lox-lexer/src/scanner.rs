// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that produces tokens from source text.

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::{debug, instrument, trace};

use super::{LexError, Literal, Reporter, Span, Token, TokenKind, keyword};

/// A scanner that tokenizes Lox source code.
///
/// A scanner is built for one input and consumed by [`Scanner::scan_tokens`],
/// so it cannot be run twice.
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
    /// Byte offset of the first character of the lexeme being scanned
    start: usize,
    /// Byte offset of the next unconsumed character
    current: usize,
    /// Line the lexeme being scanned starts on
    start_line: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            start_line: 1,
            line: 1,
        }
    }

    /// Scans the whole input and returns its tokens, ending with [`TokenKind::Eof`].
    ///
    /// Lexical errors go to `reporter` and scanning carries on after them,
    /// so the result holds every token recognized around the bad input.
    #[instrument(level = "debug", skip_all, fields(bytes = self.source.len()))]
    pub fn scan_tokens<R>(mut self, reporter: &mut R) -> Vec<Token>
    where
        R: Reporter + ?Sized,
    {
        let mut errors = 0usize;

        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            if let Err(error) = self.scan_token() {
                debug!(line = error.line(), %error, "lexical error");
                errors += 1;
                reporter.report(&error);
            }
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            None,
            self.line,
            Span::new(self.source.len(), self.source.len()),
        ));

        debug!(tokens = self.tokens.len(), errors, lines = self.line, "scan finished");
        self.tokens
    }

    /// Recognizes at most one token starting at `self.start`.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let Some(ch) = self.advance() else {
            return Ok(());
        };

        match ch {
            // Single-character tokens
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // One or two character tokens
            '!' => self.scan_with_equal(TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.scan_with_equal(TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.scan_with_equal(TokenKind::LessEqual, TokenKind::Less),
            '>' => self.scan_with_equal(TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => self.scan_slash(),

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => return self.scan_string(),
            '0'..='9' => self.scan_number(),
            _ if is_alpha(ch) => self.scan_identifier(),

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    line: self.line,
                    character: ch,
                });
            }
        }

        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.current = pos + ch.len_utf8();
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character only if it is `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme();
        trace!(%kind, lexeme, line = self.start_line, "token");
        self.tokens.push(Token::new(
            kind,
            lexeme,
            literal,
            self.start_line,
            Span::new(self.start, self.current),
        ));
    }

    /// Emits `long` if the next character is `=`, otherwise `short`.
    fn scan_with_equal(&mut self, long: TokenKind, short: TokenKind) {
        let kind = if self.match_char('=') { long } else { short };
        self.add_token(kind);
    }

    fn scan_slash(&mut self) {
        if self.match_char('/') {
            // Line comment: the newline is left for the main loop to count.
            while let Some(ch) = self.peek() {
                if ch == '\n' {
                    break;
                }
                self.advance();
            }
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn scan_string(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString { line: self.line }),
                Some('"') => break,
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }

        // The closing quote.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.push_token(TokenKind::String, Some(Literal::String(value.to_string())));
        Ok(())
    }

    fn scan_number(&mut self) {
        self.consume_digits();

        // A '.' only belongs to the number when a digit follows it.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        // Digits with at most one interior '.' always parse.
        let value = self.lexeme().parse::<f64>().unwrap_or_default();
        self.push_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.advance();
        }

        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}

/// Checks if a character can start an identifier.
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Checks if a character can continue an identifier.
fn is_alpha_numeric(ch: char) -> bool {
    is_alpha(ch) || ch.is_ascii_digit()
}

/// Scans `source` in one pass, sending lexical errors to `reporter`.
pub fn scan<R>(source: &str, reporter: &mut R) -> Vec<Token>
where
    R: Reporter + ?Sized,
{
    Scanner::new(source).scan_tokens(reporter)
}
