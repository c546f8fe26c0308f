// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the Lox lexer.

use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The value carried by a string or number token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Text between the quotes, taken verbatim.
    String(String),
    /// Parsed numeric value.
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            // `{:?}` keeps the fractional part, so `1` renders as `1.0`.
            Literal::Number(n) => write!(f, "{:?}", n),
        }
    }
}

/// A token produced by the scanner.
///
/// Tokens are immutable once built: every field is private and exposed
/// through a read-only accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Option<Literal>,
    line: usize,
    span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The kind of token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text consumed for this token
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The literal value, present only for strings and numbers
    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// The 1-based source line the token starts on
    pub fn line(&self) -> usize {
        self.line
    }

    /// The byte range of the lexeme in the source
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}

/// The different kinds of tokens in Lox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// -
    Minus,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// /
    Slash,
    /// *
    Star,

    // One or two character tokens
    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal
    String,
    /// Numeric literal
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Returns true if this token carries a literal value.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// Returns the canonical upper-case name used when printing tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        let empty = Span::new(5, 5);
        let non_empty = Span::new(5, 10);

        assert!(empty.is_empty());
        assert!(!non_empty.is_empty());
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(
            TokenKind::Number,
            "42",
            Some(Literal::Number(42.0)),
            3,
            Span::new(10, 12),
        );
        assert_eq!(token.kind(), TokenKind::Number);
        assert_eq!(token.lexeme(), "42");
        assert_eq!(token.literal(), Some(&Literal::Number(42.0)));
        assert_eq!(token.line(), 3);
        assert_eq!(token.span(), Span::new(10, 12));
    }

    #[test]
    fn test_token_equality() {
        let t1 = Token::new(TokenKind::Plus, "+", None, 1, Span::new(0, 1));
        let t2 = Token::new(TokenKind::Plus, "+", None, 1, Span::new(0, 1));
        let t3 = Token::new(TokenKind::Minus, "-", None, 1, Span::new(0, 1));

        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
    }

    #[test]
    fn test_display_without_literal() {
        let token = Token::new(TokenKind::Identifier, "forest", None, 1, Span::new(0, 6));
        assert_eq!(token.to_string(), "IDENTIFIER forest null");
    }

    #[test]
    fn test_display_number_literal() {
        let token = Token::new(
            TokenKind::Number,
            "1",
            Some(Literal::Number(1.0)),
            1,
            Span::new(0, 1),
        );
        assert_eq!(token.to_string(), "NUMBER 1 1.0");

        let token = Token::new(
            TokenKind::Number,
            "123.45",
            Some(Literal::Number(123.45)),
            1,
            Span::new(0, 6),
        );
        assert_eq!(token.to_string(), "NUMBER 123.45 123.45");
    }

    #[test]
    fn test_display_string_literal() {
        let token = Token::new(
            TokenKind::String,
            "\"abc\"",
            Some(Literal::String("abc".to_string())),
            1,
            Span::new(0, 5),
        );
        assert_eq!(token.to_string(), "STRING \"abc\" abc");
    }

    #[test]
    fn test_display_eof() {
        let token = Token::new(TokenKind::Eof, "", None, 1, Span::new(0, 0));
        assert_eq!(token.to_string(), "EOF  null");
    }

    #[test]
    fn test_is_keyword_true() {
        assert!(TokenKind::And.is_keyword());
        assert!(TokenKind::Class.is_keyword());
        assert!(TokenKind::Fun.is_keyword());
        assert!(TokenKind::Nil.is_keyword());
        assert!(TokenKind::Print.is_keyword());
        assert!(TokenKind::While.is_keyword());
    }

    #[test]
    fn test_is_keyword_false() {
        assert!(!TokenKind::Plus.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Number.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::String.is_literal());
        assert!(TokenKind::Number.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(!TokenKind::True.is_literal());
        assert!(!TokenKind::Eof.is_literal());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::GreaterEqual.to_string(), "GREATER_EQUAL");
        assert_eq!(TokenKind::While.to_string(), "WHILE");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }
}
