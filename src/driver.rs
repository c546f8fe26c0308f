// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Runs source text through the scanner and prints the result.

use lox_lexer::{Diagnostics, LexError, scan};
use owo_colors::{OwoColorize, Stream, Style};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, info};

/// Exit status for a command line usage error (sysexits `EX_USAGE`).
pub const EX_USAGE: u8 = 64;
/// Exit status when the input had lexical errors (sysexits `EX_DATAERR`).
pub const EX_DATAERR: u8 = 65;
/// Exit status when the script could not be read (sysexits `EX_IOERR`).
pub const EX_IOERR: u8 = 74;

/// Errors raised by the driver itself, as opposed to lexical errors in the input.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The script file could not be read
    #[error("could not read '{}': {source}", path.display())]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing tokens or diagnostics failed
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    /// The process exit status this error maps to.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(EX_IOERR)
    }
}

/// Scans `source`, writes one token per line to `out` and every lexical
/// error to `err`. Returns the collected diagnostics so the caller can
/// decide what they mean.
pub fn run(source: &str, out: &mut impl Write, err: &mut impl Write) -> io::Result<Diagnostics> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);

    for token in &tokens {
        writeln!(out, "{token}")?;
    }
    for error in diagnostics.errors() {
        report(err, error)?;
    }

    Ok(diagnostics)
}

/// Writes a lexical error as `[line N] Error: message`.
pub fn report(err: &mut impl Write, error: &LexError) -> io::Result<()> {
    writeln!(
        err,
        "[line {}] {}: {}",
        error.line(),
        "Error".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
        error
    )
}

/// Scans a script file and maps the outcome to an exit status.
pub fn run_file(path: &Path) -> Result<ExitCode, DriverError> {
    info!(path = %path.display(), "scanning file");

    let source = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = source.len(), "read script");

    run_to_exit_code(&source)
}

/// Scans inline code given on the command line.
pub fn run_eval(code: &str) -> Result<ExitCode, DriverError> {
    debug!(bytes = code.len(), "scanning inline code");
    run_to_exit_code(code)
}

fn run_to_exit_code(source: &str) -> Result<ExitCode, DriverError> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let diagnostics = run(source, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(ExitCode::from(exit_status(&diagnostics)))
}

/// `0`, or `EX_DATAERR` when anything was reported.
pub fn exit_status(diagnostics: &Diagnostics) -> u8 {
    if diagnostics.had_error() { EX_DATAERR } else { 0 }
}
