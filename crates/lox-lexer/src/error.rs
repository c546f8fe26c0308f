// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical errors and the reporting channel the scanner writes them to.
//!
//! Lexical errors never stop a scan. The scanner hands each one to a
//! [`Reporter`] supplied by the caller and carries on with the next
//! character, so the caller decides what an error means for the rest of
//! the pipeline.

use thiserror::Error;

/// Errors detected while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token
    #[error("Unexpected character.")]
    UnexpectedCharacter {
        /// Line the character was found on
        line: usize,
        /// The offending character
        character: char,
    },

    /// A string literal with no closing quote before end of input
    #[error("Unterminated string.")]
    UnterminatedString {
        /// Line the scanner was on when input ran out
        line: usize,
    },
}

impl LexError {
    /// Returns the 1-based line this error was reported for.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
            LexError::UnterminatedString { line } => *line,
        }
    }
}

/// Receives lexical errors as the scanner finds them.
pub trait Reporter {
    /// Called once per error, in source order.
    fn report(&mut self, error: &LexError);
}

/// Any `(line, message)` callback can be used as a reporter.
impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, error: &LexError) {
        self(error.line(), &error.to_string());
    }
}

/// A reporter that keeps every error it is given.
///
/// Stands in for a global "had error" flag: the driver asks it whether
/// anything went wrong and clears it between REPL lines.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    errors: Vec<LexError>,
}

impl Diagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one error has been reported.
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The errors reported so far, in order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Number of errors reported so far.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors have been reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Forgets every reported error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Consumes the collection, returning the errors.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: &LexError) {
        self.errors.push(error.clone());
    }
}
