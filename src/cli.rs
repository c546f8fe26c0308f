// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Command line arguments and process-wide setup (logging, colors).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default tracing filter when neither `--log` nor `LOX_LOG` is given.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter used by `--verbose`.
const VERBOSE_LOG_FILTER: &str = "lox=debug,lox_lexer=debug";

/// lox - scan Lox source code and print its tokens
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script to scan. Starts the interactive REPL when omitted.
    pub script: Option<PathBuf>,

    /// Scan CODE instead of a file
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "script")]
    pub eval: Option<String>,

    /// Tracing filter directive, e.g. "lox_lexer=trace"
    #[arg(long = "log", value_name = "FILTER", env = "LOX_LOG")]
    pub log: Option<String>,

    /// Enable debug logging for lox and lox-lexer
    #[arg(short, long)]
    pub verbose: bool,

    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, env = "LOX_COLOR")]
    pub color: ColorChoice,
}

/// Color policy for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when the output stream is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl Cli {
    /// The tracing filter directive this invocation asked for.
    pub fn log_filter(&self) -> &str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            self.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
        }
    }

    /// Installs the global tracing subscriber. Logs go to stderr so token
    /// output on stdout stays machine-readable.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_new(self.log_filter())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(self.color != ColorChoice::Never)
            .init();
    }

    /// Applies the color policy to every `if_supports_color` call site.
    pub fn apply_color(&self) {
        match self.color {
            ColorChoice::Auto => owo_colors::unset_override(),
            ColorChoice::Always => owo_colors::set_override(true),
            ColorChoice::Never => owo_colors::set_override(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_script() {
        let cli = Cli::try_parse_from(["lox", "main.lox"]).unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("main.lox")));
        assert!(cli.eval.is_none());
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::try_parse_from(["lox", "-e", "print 1;"]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("print 1;"));
        assert!(cli.script.is_none());
    }

    #[test]
    fn test_too_many_scripts_rejected() {
        assert!(Cli::try_parse_from(["lox", "a.lox", "b.lox"]).is_err());
    }

    #[test]
    fn test_eval_conflicts_with_script() {
        assert!(Cli::try_parse_from(["lox", "a.lox", "-e", "1"]).is_err());
    }

    #[test]
    fn test_verbose_overrides_log() {
        let cli = Cli::try_parse_from(["lox", "--log", "info", "-v"]).unwrap();
        assert_eq!(cli.log_filter(), VERBOSE_LOG_FILTER);

        let cli = Cli::try_parse_from(["lox", "--log", "lox_lexer=trace"]).unwrap();
        assert_eq!(cli.log_filter(), "lox_lexer=trace");
    }

    #[test]
    fn test_color_choice() {
        let cli = Cli::try_parse_from(["lox", "--color", "never"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
    }
}
