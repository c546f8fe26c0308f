// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The reserved-word table.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::TokenKind;

/// Every reserved word, in the order they are listed in the language reference.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("fun", TokenKind::Fun),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Built on first lookup and never mutated afterwards.
static KEYWORD_TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Looks up `text` verbatim in the keyword table.
///
/// Matching is case-sensitive and exact: `For` and `forest` are not keywords.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORD_TABLE.get(text).copied()
}
