//! Syntax highlighting for the REPL.
//!
//! Keywords depend on context, so input is parsed and colored from the
//! parser's token stream rather than scanned in a single mode.

use std::borrow::Cow;

use storyscript_syntax::{TokenKind, parse};

/// Highlighter for Storyscript input.
pub struct StoryscriptHighlighter;

impl StoryscriptHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlights a line (or several) of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let result = parse(line);
        let mut output = String::with_capacity(line.len() * 2);
        for token in &result.tokens {
            match style(token.kind) {
                Some(style) => {
                    output.push_str(style);
                    output.push_str(token.text);
                    output.push_str("\x1b[0m");
                }
                None => output.push_str(token.text),
            }
        }
        Cow::Owned(output)
    }
}

impl Default for StoryscriptHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

const fn style(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Keyword(_) => Some("\x1b[32m"),
        TokenKind::String(_) => Some("\x1b[33m"),
        TokenKind::Number => Some("\x1b[35m"),
        TokenKind::Comment => Some("\x1b[2;3m"),
        TokenKind::Error => Some("\x1b[4;31m"),
        TokenKind::LBrace | TokenKind::RBrace | TokenKind::LParen | TokenKind::RParen => {
            Some("\x1b[1m")
        }
        TokenKind::Arrow => Some("\x1b[36m"),
        _ => None,
    }
}
