// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> Number(42.0)
//! 3.14      -> Number(3.14)
//! 123.      -> Number(123.0), Dot
//! .5        -> Dot, Number(5.0)
//! ```
//!
//! A `.` is only part of a number when a digit follows it. There are no
//! signs, exponents, radix prefixes or digit separators; `-1` is a `Minus`
//! followed by a number.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ```text
//! "hello"   -> String("hello"), lexeme includes the quotes
//! "a
//! b"        -> String("a\nb"), multi-line strings are allowed
//! ```
//!
//! There are no escape sequences: the literal is the exact text between
//! the quotes. A string still open at end of input is reported as
//! `UnterminatedString` and produces no token.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: start chars + `0-9`
//!
//! The full run is looked up in the keyword table:
//!
//! ```text
//! "for"    -> TokenKind::For
//! "forest" -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.
