// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator scanning documentation.
//!
//! This module documents the punctuation and operator scanning logic in
//! `scanner.rs`.
//!
//! ## Single-Character Tokens
//!
//! | Char | Token |
//! |------|-------|
//! | `(` `)` | `LeftParen`, `RightParen` |
//! | `{` `}` | `LeftBrace`, `RightBrace` |
//! | `,` `.` `;` | `Comma`, `Dot`, `Semicolon` |
//! | `-` `+` `*` | `Minus`, `Plus`, `Star` |
//!
//! ## One or Two Character Operators
//!
//! | Char | Method | Variants |
//! |------|--------|----------|
//! | `!` | `scan_with_equal` | `!`, `!=` |
//! | `=` | `scan_with_equal` | `=`, `==` |
//! | `<` | `scan_with_equal` | `<`, `<=` |
//! | `>` | `scan_with_equal` | `>`, `>=` |
//! | `/` | `scan_slash` | `/`, `//...` |
//!
//! ## Maximal Munch
//!
//! The longer lexeme always wins when its prefix matches:
//!
//! ```text
//! // For input "!="
//! scan_token():
//!   advance() returns '!'
//! scan_with_equal():
//!   match_char('=') consumes '='
//!   return BangEqual          -> one token, never Bang + Equal
//! ```
//!
//! ## Comment Handling
//!
//! `//` starts a comment that runs to the end of the line. The newline is
//! not consumed by the comment, so the main loop still counts it. There are
//! no block comments.

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::{Diagnostics, Token, TokenKind, scan};

    fn scan_all(src: &str) -> Vec<Token> {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(src, &mut diagnostics);
        assert!(!diagnostics.had_error());
        tokens
    }

    /// Scans `src` and returns the kinds, without the trailing Eof.
    fn scan_kinds(src: &str) -> Vec<TokenKind> {
        let mut kinds: Vec<TokenKind> = scan_all(src).iter().map(Token::kind).collect();
        assert_eq!(kinds.pop(), Some(TokenKind::Eof));
        kinds
    }

    #[test]
    fn test_single_character_tokens() {
        let cases = [
            ("(", TokenKind::LeftParen),
            (")", TokenKind::RightParen),
            ("{", TokenKind::LeftBrace),
            ("}", TokenKind::RightBrace),
            (",", TokenKind::Comma),
            (".", TokenKind::Dot),
            ("-", TokenKind::Minus),
            ("+", TokenKind::Plus),
            (";", TokenKind::Semicolon),
            ("/", TokenKind::Slash),
            ("*", TokenKind::Star),
            ("!", TokenKind::Bang),
            ("=", TokenKind::Equal),
            ("<", TokenKind::Less),
            (">", TokenKind::Greater),
        ];

        for (src, kind) in cases {
            let tokens = scan_all(src);
            assert_eq!(tokens.len(), 2, "{src}");
            assert_eq!(tokens[0].kind(), kind);
            assert_eq!(tokens[0].lexeme(), src);
            assert!(tokens[0].literal().is_none());
        }
    }

    #[test]
    fn test_two_character_operators() {
        let cases = [
            ("!=", TokenKind::BangEqual),
            ("==", TokenKind::EqualEqual),
            ("<=", TokenKind::LessEqual),
            (">=", TokenKind::GreaterEqual),
        ];

        for (src, kind) in cases {
            let tokens = scan_all(src);
            assert_eq!(tokens.len(), 2, "{src} should be a single token");
            assert_eq!(tokens[0].kind(), kind);
            assert_eq!(tokens[0].lexeme(), src);
        }
    }

    #[test]
    fn test_equal_runs_pair_greedily() {
        assert_eq!(
            scan_kinds("==="),
            vec![TokenKind::EqualEqual, TokenKind::Equal]
        );
        assert_eq!(
            scan_kinds("!=="),
            vec![TokenKind::BangEqual, TokenKind::Equal]
        );
    }

    #[test]
    fn test_separated_operators_stay_apart() {
        assert_eq!(scan_kinds("! ="), vec![TokenKind::Bang, TokenKind::Equal]);
        assert_eq!(scan_kinds("< ="), vec![TokenKind::Less, TokenKind::Equal]);
    }

    #[test]
    fn test_no_shift_operators() {
        assert_eq!(scan_kinds("<<"), vec![TokenKind::Less, TokenKind::Less]);
        assert_eq!(
            scan_kinds(">>="),
            vec![TokenKind::Greater, TokenKind::GreaterEqual]
        );
    }

    #[test]
    fn test_comment_skips_rest_of_line() {
        let tokens = scan_all("// comment\nvar");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Var);
        assert_eq!(tokens[0].line(), 2);
    }

    #[test]
    fn test_comment_after_code() {
        assert_eq!(
            scan_kinds("a / b // divide\n*"),
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Star
            ]
        );
    }

    #[test]
    fn test_no_block_comments() {
        assert_eq!(
            scan_kinds("/* x */"),
            vec![
                TokenKind::Slash,
                TokenKind::Star,
                TokenKind::Identifier,
                TokenKind::Star,
                TokenKind::Slash
            ]
        );
    }
}
