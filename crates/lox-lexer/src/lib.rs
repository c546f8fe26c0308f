// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # lox-lexer
//!
//! Lexical analysis (tokenization) for Lox source code.
//!
//! The scanner transforms Lox source text into an ordered list of tokens
//! that a parser can consume. It is the first stage of the front end.
//!
//! ## Structure
//!
//! - `scanner.rs` - `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Literal` definitions
//! - `keywords.rs` - the reserved-word table
//! - `error.rs` - `LexError` and the `Reporter` channel
//!
//! ## Documentation Submodules
//!
//! - `operators` - Punctuation and one/two character operators
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use lox_lexer::{Diagnostics, TokenKind, scan};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = scan("var x = 42;", &mut diagnostics);
//!
//! assert!(!diagnostics.had_error());
//! assert_eq!(tokens[0].kind(), TokenKind::Var);
//! assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use error::{Diagnostics, LexError, Reporter};
pub use keywords::{KEYWORDS, keyword};
pub use scanner::{Scanner, scan};
pub use token::{Literal, Span, Token, TokenKind};
