// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Eval-Print Loop) for the Lox scanner.
//!
//! Every line is scanned on its own and its tokens are printed. Lexical
//! errors are shown but never end the session.

use crate::driver;
use lox_lexer::{Diagnostics, KEYWORDS, LexError, TokenKind, scan};
use owo_colors::{OwoColorize, Stream, Style};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// REPL configuration constants
const HISTORY_FILE: &str = ".lox_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a Lox file and print its tokens"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
struct LoxHelper {
    /// Keywords and REPL commands for completion
    words: Vec<String>,
}

impl LoxHelper {
    fn new() -> Self {
        let words = KEYWORDS
            .iter()
            .map(|(text, _)| *text)
            .chain([".help", ".exit", ".clear", ".version", ".load"])
            .map(String::from)
            .collect();

        Self { words }
    }

    /// Start of the word that ends at `pos`.
    fn word_start(line: &str, pos: usize) -> usize {
        line[..pos]
            .rfind(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '.')
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl Completer for LoxHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = Self::word_start(line, pos);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for LoxHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[Self::word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| {
                let rest = &w[word.len()..];
                rest.if_supports_color(Stream::Stdout, |t| t.dimmed())
                    .to_string()
            })
    }
}

impl Highlighter for LoxHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(
                line.if_supports_color(Stream::Stdout, |t| t.magenta())
                    .to_string(),
            );
        }
        Cow::Owned(highlight_source(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Colors `line` using the scanner's own token boundaries. Text between
/// tokens (whitespace, comments, characters the scanner rejected) is kept
/// as-is, except comments which are dimmed.
fn highlight_source(line: &str) -> String {
    let tokens = scan(line, &mut |_: usize, _: &str| {});

    let mut result = String::with_capacity(line.len() * 2);
    let mut last = 0;

    for token in &tokens {
        let span = token.span();
        push_gap(&mut result, &line[last..span.start]);
        if let Some(style) = token_style(token.kind()) {
            let text = token.lexeme();
            result.push_str(
                &text
                    .if_supports_color(Stream::Stdout, |t| t.style(style))
                    .to_string(),
            );
        } else {
            result.push_str(token.lexeme());
        }
        last = span.end;
    }
    push_gap(&mut result, &line[last..]);

    result
}

fn push_gap(result: &mut String, gap: &str) {
    match gap.find("//") {
        Some(at) => {
            let (code, comment) = gap.split_at(at);
            result.push_str(code);
            result.push_str(
                &comment
                    .if_supports_color(Stream::Stdout, |t| t.dimmed())
                    .to_string(),
            );
        }
        None => result.push_str(gap),
    }
}

fn token_style(kind: TokenKind) -> Option<Style> {
    match kind {
        TokenKind::True | TokenKind::False | TokenKind::Nil | TokenKind::This | TokenKind::Super => {
            Some(Style::new().blue())
        }
        _ if kind.is_keyword() => Some(Style::new().magenta().bold()),
        TokenKind::String => Some(Style::new().green()),
        TokenKind::Number => Some(Style::new().yellow()),
        TokenKind::LeftParen | TokenKind::RightParen | TokenKind::LeftBrace | TokenKind::RightBrace => {
            Some(Style::new().yellow())
        }
        TokenKind::Bang
        | TokenKind::BangEqual
        | TokenKind::Equal
        | TokenKind::EqualEqual
        | TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Less
        | TokenKind::LessEqual
        | TokenKind::Minus
        | TokenKind::Plus
        | TokenKind::Slash
        | TokenKind::Star => Some(Style::new().cyan()),
        _ => None,
    }
}

impl Validator for LoxHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if needs_more_input(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// True while a string literal is still open or a brace or paren is
/// unclosed, so the editor keeps reading lines into the same entry.
fn needs_more_input(input: &str) -> bool {
    if ReplCommand::parse(input).is_some() {
        return false;
    }

    let mut diagnostics = Diagnostics::new();
    let tokens = scan(input, &mut diagnostics);

    let open_string = diagnostics
        .errors()
        .iter()
        .any(|e| matches!(e, LexError::UnterminatedString { .. }));
    if open_string {
        return true;
    }

    let mut depth = 0i64;
    for token in &tokens {
        match token.kind() {
            TokenKind::LeftParen | TokenKind::LeftBrace => depth += 1,
            TokenKind::RightParen | TokenKind::RightBrace => depth -= 1,
            _ => {}
        }
    }

    // Too many closers is an error for the parser, not a reason to wait.
    depth > 0
}

impl Helper for LoxHelper {}

/// The interactive REPL for the Lox scanner
pub struct Repl {
    editor: Editor<LoxHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(LoxHelper::new()));

        let history_path = history_path();

        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "could not create history directory");
            }
        }

        if editor.load_history(&history_path).is_err() {
            debug!(path = %history_path.display(), "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();
        debug!("repl started");

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".if_supports_color(Stream::Stdout, |t| t.dimmed()));
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".if_supports_color(Stream::Stdout, |t| t.dimmed()));
                    break;
                }
                Err(err) => {
                    eprintln!(
                        "{}: {:?}",
                        "Error".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                        err
                    );
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            warn!(path = %self.history_path.display(), error = %e, "could not save history");
        }

        debug!("repl finished");
        self.print_goodbye();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Lox Scanner".if_supports_color(Stream::Stdout, |t| t.style(Style::new().white().bold())),
            "v".if_supports_color(Stream::Stdout, |t| t.dimmed()),
            version.if_supports_color(Stream::Stdout, |t| t.bright_yellow())
        );
        println!(
            "  {} {} {}",
            "Type".if_supports_color(Stream::Stdout, |t| t.dimmed()),
            ".help".if_supports_color(Stream::Stdout, |t| t.cyan()),
            "for available commands".if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
        println!();
    }

    fn print_goodbye(&self) {
        println!();
        println!("{}", "Goodbye!".if_supports_color(Stream::Stdout, |t| t.bright_cyan()));
        println!();
    }

    fn format_prompt(&self) -> String {
        format!(
            "{} ",
            "lox>".if_supports_color(Stream::Stdout, |t| t.style(Style::new().bright_green().bold()))
        )
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                self.print_version();
                CommandResult::Continue
            }
            ReplCommand::Load => {
                if let Some(path) = arg {
                    self.load_file(path);
                } else {
                    eprintln!(
                        "{}: {} {}",
                        "Error".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                        ".load".if_supports_color(Stream::Stderr, |t| t.cyan()),
                        "requires a file path".if_supports_color(Stream::Stderr, |t| t.dimmed())
                    );
                }
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!(
            "{}",
            "REPL Commands:".if_supports_color(Stream::Stdout, |t| t.style(Style::new().white().bold()))
        );
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!(
                "  {:16} {}",
                cmd.if_supports_color(Stream::Stdout, |t| t.cyan()),
                desc.if_supports_color(Stream::Stdout, |t| t.dimmed())
            );
        }

        println!();
        println!(
            "{}",
            "Keyboard Shortcuts:".if_supports_color(Stream::Stdout, |t| t.style(Style::new().white().bold()))
        );
        println!();
        for (keys, desc) in [
            ("Ctrl+C", "Cancel current input"),
            ("Ctrl+D", "Exit REPL"),
            ("Ctrl+L", "Clear screen"),
            ("Tab", "Autocomplete"),
            ("↑/↓", "Navigate history"),
        ] {
            println!(
                "  {:16} {}",
                keys.if_supports_color(Stream::Stdout, |t| t.yellow()),
                desc.if_supports_color(Stream::Stdout, |t| t.dimmed())
            );
        }
        println!();
    }

    fn print_version(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "{}: {}",
            "Lox".if_supports_color(Stream::Stdout, |t| t.style(Style::new().bright_cyan().bold())),
            version.if_supports_color(Stream::Stdout, |t| t.yellow())
        );
        println!();
    }

    fn load_file(&mut self, path: &str) {
        let path = std::path::Path::new(path);

        match std::fs::read_to_string(path) {
            Ok(source) => self.scan_and_print(&source),
            Err(e) => {
                eprintln!(
                    "{}: could not read '{}': {}",
                    "Error".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                    path.display(),
                    e
                );
            }
        }
    }

    fn scan_and_print(&mut self, input: &str) {
        let stdout = io::stdout();
        let stderr = io::stderr();
        scan_entry(input, &mut stdout.lock(), &mut stderr.lock());
    }
}

/// Scans one REPL entry with its own diagnostics, so errors from a previous
/// entry never leak into this one. Returns whether this entry had errors.
fn scan_entry(input: &str, out: &mut impl Write, err: &mut impl Write) -> bool {
    match driver::run(input, out, err) {
        Ok(diagnostics) => {
            if diagnostics.had_error() {
                debug!(errors = diagnostics.len(), "entry had lexical errors");
            }
            diagnostics.had_error()
        }
        Err(e) => {
            warn!(error = %e, "could not write tokens");
            false
        }
    }
}

/// Where the history file lives: `<data dir>/lox/.lox_history`.
fn history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lox")
        .join(HISTORY_FILE)
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert!(matches!(
            ReplCommand::parse(".help"),
            Some((ReplCommand::Help, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".exit"),
            Some((ReplCommand::Exit, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".load test.lox"),
            Some((ReplCommand::Load, Some("test.lox")))
        ));
        assert!(matches!(
            ReplCommand::parse("  .Q  "),
            Some((ReplCommand::Exit, None))
        ));
        assert!(ReplCommand::parse("not a command").is_none());
        assert!(ReplCommand::parse(".unknown").is_none());
    }

    #[test]
    fn test_needs_more_input() {
        assert!(!needs_more_input("print 1;"));
        assert!(needs_more_input("fun f() {"));
        assert!(needs_more_input("print (1 +"));
        assert!(needs_more_input("print \"open"));
        assert!(!needs_more_input("print \"( inside a string\";"));
        assert!(!needs_more_input("print 1; // {"));
        assert!(!needs_more_input("}"));
        assert!(!needs_more_input(".load x.lox"));
    }

    #[test]
    fn test_helper_words() {
        let helper = LoxHelper::new();
        assert!(helper.words.iter().any(|w| w == "while"));
        assert!(helper.words.iter().any(|w| w == ".load"));
        assert_eq!(helper.words.len(), KEYWORDS.len() + 5);
    }

    #[test]
    fn test_word_start() {
        assert_eq!(LoxHelper::word_start("var fo", 6), 4);
        assert_eq!(LoxHelper::word_start("whi", 3), 0);
        assert_eq!(LoxHelper::word_start("x = (ret", 8), 5);
    }

    #[test]
    fn test_highlight_keeps_text() {
        owo_colors::set_override(false);
        let line = "var x = \"hi\" + 1.5; // note @";
        assert_eq!(highlight_source(line), line);
    }

    #[test]
    fn test_push_gap_splits_comment() {
        owo_colors::set_override(false);
        let mut result = String::new();
        push_gap(&mut result, "  // note");
        push_gap(&mut result, " ");
        assert_eq!(result, "  // note ");
    }

    #[test]
    fn test_errors_reset_between_entries() {
        owo_colors::set_override(false);
        let mut out = Vec::new();
        let mut err = Vec::new();

        assert!(scan_entry("print @;", &mut out, &mut err));
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "[line 1] Error: Unexpected character.\n"
        );

        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(!scan_entry("print 1;", &mut out, &mut err));
        assert!(err.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "PRINT print null\nNUMBER 1 1.0\nSEMICOLON ; null\nEOF  null\n"
        );
    }

    #[test]
    fn test_token_style() {
        assert!(token_style(TokenKind::Var).is_some());
        assert!(token_style(TokenKind::Nil).is_some());
        assert!(token_style(TokenKind::Identifier).is_none());
        assert!(token_style(TokenKind::Semicolon).is_none());
        assert!(token_style(TokenKind::Eof).is_none());
    }
}
