// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lox - scanner front end for the Lox scripting language
//!
//! This is the main entry point for the lox CLI/REPL.
//!
//! ## Modes
//!
//! - `lox FILE` scans a script and prints its tokens
//! - `lox -e CODE` scans inline code
//! - `lox` starts an interactive REPL with highlighting and history
//!
//! Lexical errors make the file and eval modes exit with status 65.

mod cli;
mod driver;
mod repl;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use owo_colors::{OwoColorize, Stream, Style};
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(driver::EX_USAGE),
            };
        }
    };

    cli.apply_color();
    cli.init_logging();
    debug!(?cli, "parsed arguments");

    let result = if let Some(code) = &cli.eval {
        driver::run_eval(code)
    } else if let Some(path) = &cli.script {
        driver::run_file(path)
    } else {
        return match run_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!(
                    "{}: {:#}",
                    "REPL Error".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                    e
                );
                ExitCode::FAILURE
            }
        };
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "driver failed");
            eprintln!(
                "{}: {}",
                "Error".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                e
            );
            e.exit_code()
        }
    }
}

/// Start the interactive REPL
fn run_repl() -> anyhow::Result<()> {
    let mut repl = repl::Repl::new().context("failed to initialize REPL")?;
    repl.run()?;
    Ok(())
}
