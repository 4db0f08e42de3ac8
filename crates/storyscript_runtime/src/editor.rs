//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation. Tests drive the REPL with a scripted editor instead.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use storyscript_syntax::{DiagnosticKind, Keyword, LexMode, Lexer, Quote, TokenKind};

use crate::error::{Error, ErrorKind, Result};
use crate::highlight::StoryscriptHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints, highlighting, and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct StoryscriptHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: BlockValidator,
    highlighter: StoryscriptHighlighter,
}

impl Highlighter for StoryscriptHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for Storyscript keywords.
struct KeywordCompleter {
    keywords: Vec<&'static str>,
}

impl KeywordCompleter {
    fn new() -> Self {
        let mut keywords: Vec<_> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
        keywords.sort_unstable();
        keywords.dedup();
        Self { keywords }
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(|c: char| c.is_whitespace() || "(){},".contains(c))
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];
        let candidates = self
            .keywords
            .iter()
            .filter(|kw| !word.is_empty() && kw.starts_with(word))
            .map(|kw| Pair {
                display: (*kw).to_string(),
                replacement: (*kw).to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Validator that keeps reading while a block, group or block string is open.
#[derive(Default)]
struct BlockValidator;

impl Validator for BlockValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_incomplete(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Returns true if `input` has unclosed braces, parentheses or a block
/// string.
pub(crate) fn is_incomplete(input: &str) -> bool {
    let mut lexer = Lexer::new(input);
    let mut depth = 0i64;
    loop {
        let scanned = lexer.scan(LexMode::Plain);
        let open_block_string = scanned.diagnostic.is_some_and(|d| {
            matches!(
                d.kind,
                DiagnosticKind::UnterminatedString {
                    quote: Quote::Triple
                }
            )
        });
        if open_block_string {
            return true;
        }
        match scanned.token.kind {
            TokenKind::LBrace | TokenKind::LParen => depth += 1,
            TokenKind::RBrace | TokenKind::RParen => depth -= 1,
            TokenKind::Eof => return depth > 0,
            _ => {}
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<StoryscriptHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?
            .build();

        let helper = StoryscriptHelper {
            completer: KeywordCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: BlockValidator,
            highlighter: StoryscriptHighlighter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Editor(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
