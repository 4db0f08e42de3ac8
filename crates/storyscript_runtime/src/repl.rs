//! Interactive parsing loop.
//!
//! Each entry is parsed on its own and answered with its tree and
//! diagnostics. Input continues over several lines while a block, group or
//! block string is open.

use std::io::{self, Write};

use storyscript_syntax::pretty::{PrettyConfig, render_tokens, render_tree_with_config};
use storyscript_syntax::{ParseConfig, parse_with_config};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, is_incomplete};
use crate::error::{Error, ErrorKind, Result};
use crate::report::render_diagnostic;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    parse_config: ParseConfig,
    pretty: PrettyConfig,

    /// Use ANSI colors in diagnostics.
    color: bool,

    /// Print the token stream before the tree.
    show_tokens: bool,

    /// Whether to show the welcome banner.
    show_banner: bool,

    prompt: String,
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            parse_config: ParseConfig::default(),
            pretty: PrettyConfig::default(),
            color: true,
            show_tokens: false,
            show_banner: true,
            prompt: "story> ".to_string(),
            continuation_prompt: "   ... ".to_string(),
        }
    }

    /// Sets the parser configuration.
    #[must_use]
    pub fn with_parse_config(mut self, config: ParseConfig) -> Self {
        self.parse_config = config;
        self
    }

    /// Enables or disables colored diagnostics.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Runs the REPL loop until end of input or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!();
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        if let Some(command) = trimmed.strip_prefix(':') {
            return Ok(self.command(command));
        }

        print!("{}", self.eval(&input));
        let _ = io::stdout().flush();
        Ok(true)
    }

    /// Reads a potentially multi-line entry.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);
                    if !is_incomplete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::new(ErrorKind::Editor(
                        "unexpected end of input inside an open block".to_string(),
                    )));
                }
            }
        }
    }

    /// Handles a `:command`. Returns false to exit.
    fn command(&mut self, command: &str) -> bool {
        match command.trim() {
            "q" | "quit" => return false,
            "tokens" => {
                self.show_tokens = !self.show_tokens;
                println!("token listing {}", if self.show_tokens { "on" } else { "off" });
            }
            "spans" => {
                self.pretty.show_spans = !self.pretty.show_spans;
                println!("spans {}", if self.pretty.show_spans { "on" } else { "off" });
            }
            "help" => Self::print_help(),
            other => println!("unknown command :{other} (try :help)"),
        }
        true
    }

    /// Parses an entry and renders its tree and diagnostics.
    #[must_use]
    pub fn eval(&self, input: &str) -> String {
        let result = parse_with_config(input, &self.parse_config);
        let mut output = String::new();
        if self.show_tokens {
            output.push_str(&render_tokens(&result.tokens));
        }
        output.push_str(&render_tree_with_config(&result.root, &self.pretty));
        output.push('\n');
        for diagnostic in &result.diagnostics {
            output.push_str(&render_diagnostic("<input>", input, diagnostic, self.color));
        }
        output
    }

    /// Prints an error to stderr.
    fn print_error(&self, error: &Error) {
        if self.color {
            eprintln!("\x1b[31mError: {error}\x1b[0m");
        } else {
            eprintln!("Error: {error}");
        }
    }

    fn print_help() {
        println!(":tokens   toggle the token listing");
        println!(":spans    toggle byte ranges in the tree");
        println!(":quit     leave (or press Ctrl+D)");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("Storyscript {}", env!("CARGO_PKG_VERSION"));
        println!("Enter definitions to see how they parse. :help lists commands.\n");
        let _ = io::stdout().flush();
    }
}
