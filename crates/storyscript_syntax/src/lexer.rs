//! Lexer for Storyscript.
//!
//! The lexer converts source text into tokens one request at a time. Each
//! request names a [`LexMode`]; the mode only decides which words are
//! keywords, so the lexer can be rewound and asked again in another mode
//! without changing token boundaries.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::span::Span;
use crate::token::{Quote, Token, TokenKind};

/// A saved lexer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    line: u32,
    column: u32,
}

impl Checkpoint {
    /// Byte offset of this position.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.position
    }

    /// Line of this position (1-based).
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Column of this position (1-based).
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// A token together with the lexical problem found while scanning it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scanned<'src> {
    /// The token.
    pub token: Token<'src>,
    /// Set for unterminated strings and invalid characters.
    pub diagnostic: Option<Diagnostic>,
}

/// Lexer for Storyscript source.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Problems found by [`Lexer::next_token`].
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the next token, recording any lexical problem.
    pub fn next_token(&mut self, mode: LexMode) -> Token<'src> {
        let scanned = self.scan(mode);
        if let Some(diagnostic) = scanned.diagnostic {
            self.diagnostics.push(diagnostic);
        }
        scanned.token
    }

    /// Returns the next token and its lexical problem, if any.
    pub fn scan(&mut self, mode: LexMode) -> Scanned<'src> {
        let start = self.checkpoint();

        let Some(c) = self.peek_char() else {
            return Scanned {
                token: self.finish(TokenKind::Eof, start),
                diagnostic: None,
            };
        };

        let mut diagnostic = None;
        let kind = match c {
            c if c.is_whitespace() => self.scan_whitespace(),
            '#' => self.scan_comment(),
            '"' if self.rest.starts_with("\"\"\"") => {
                self.scan_block_string(start, &mut diagnostic)
            }
            '"' => self.scan_quoted(Quote::Double, start, &mut diagnostic),
            '\'' => self.scan_quoted(Quote::Single, start, &mut diagnostic),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_word_start(c) => self.scan_word(mode),
            '(' => self.punct(TokenKind::LParen),
            ')' => self.punct(TokenKind::RParen),
            '{' => self.punct(TokenKind::LBrace),
            '}' => self.punct(TokenKind::RBrace),
            ',' => self.punct(TokenKind::Comma),
            '=' => self.punct(TokenKind::Eq),
            ':' => self.punct(TokenKind::Colon),
            '%' => self.punct(TokenKind::Percent),
            '.' => self.punct(TokenKind::Dot),
            '-' if self.rest.starts_with("->") => {
                self.advance();
                self.advance();
                TokenKind::Arrow
            }
            _ => {
                self.scan_invalid();
                TokenKind::Error
            }
        };

        let token = self.finish(kind, start);
        if kind == TokenKind::Error {
            diagnostic = Some(Diagnostic::error(
                token.span,
                DiagnosticKind::InvalidCharacter {
                    text: token.text.to_string(),
                },
            ));
        }
        log::trace!("scanned {kind:?} {:?} in {mode:?}", token.text);
        Scanned { token, diagnostic }
    }

    /// Tokenizes all source in top-level mode and returns every token,
    /// trivia included, ending with `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &'src str) -> Vec<Token<'src>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token(LexMode::TopLevel);
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Returns the current position.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Moves back (or forward) to a saved position.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
        self.rest = &self.source[checkpoint.position..];
    }

    /// Returns the source text.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Takes the problems recorded by [`Lexer::next_token`].
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Builds a token from `start` to the current position.
    fn finish(&self, kind: TokenKind, start: Checkpoint) -> Token<'src> {
        Token::new(
            kind,
            Span::new(start.position, self.position, start.line, start.column),
            &self.source[start.position..self.position],
        )
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn punct(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn scan_whitespace(&mut self) -> TokenKind {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
        TokenKind::Whitespace
    }

    /// Scans a comment starting with `#`; the line break is not included.
    fn scan_comment(&mut self) -> TokenKind {
        while let Some(c) = self.peek_char() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.advance();
        }
        TokenKind::Comment
    }

    /// Scans a single-line string delimited by `quote`.
    fn scan_quoted(
        &mut self,
        quote: Quote,
        start: Checkpoint,
        diagnostic: &mut Option<Diagnostic>,
    ) -> TokenKind {
        let close = if quote == Quote::Single { '\'' } else { '"' };
        self.advance(); // opening delimiter
        loop {
            match self.peek_char() {
                Some(c) if c == close => {
                    self.advance();
                    return TokenKind::String(quote);
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        Some('\n' | '\r') | None => break,
                        Some(_) => self.advance(),
                    }
                }
                Some('\n' | '\r') | None => break,
                Some(_) => self.advance(),
            }
        }
        *diagnostic = Some(self.unterminated(quote, start));
        TokenKind::String(quote)
    }

    /// Scans a `"""` block string.
    ///
    /// Inside the block `#` starts a comment that runs to the end of the
    /// line; a `"""` inside that comment does not close the string.
    fn scan_block_string(
        &mut self,
        start: Checkpoint,
        diagnostic: &mut Option<Diagnostic>,
    ) -> TokenKind {
        for _ in 0..3 {
            self.advance();
        }
        let mut in_comment = false;
        loop {
            let Some(c) = self.peek_char() else {
                *diagnostic = Some(self.unterminated(Quote::Triple, start));
                break;
            };
            if in_comment {
                if c == '\n' {
                    in_comment = false;
                }
                self.advance();
                continue;
            }
            match c {
                '"' if self.rest.starts_with("\"\"\"") => {
                    for _ in 0..3 {
                        self.advance();
                    }
                    break;
                }
                '\\' => {
                    self.advance();
                    self.advance();
                }
                '#' => {
                    in_comment = true;
                    self.advance();
                }
                _ => self.advance(),
            }
        }
        TokenKind::String(Quote::Triple)
    }

    fn unterminated(&self, quote: Quote, start: Checkpoint) -> Diagnostic {
        Diagnostic::recovered(
            Span::new(start.position, self.position, start.line, start.column),
            DiagnosticKind::UnterminatedString { quote },
        )
    }

    /// Scans a run of ASCII digits.
    fn scan_number(&mut self) -> TokenKind {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        TokenKind::Number
    }

    /// Scans an identifier or a keyword of the current mode.
    ///
    /// A word whose part before the first `:` is a mode keyword is split
    /// there, so `state:` and `state:open` lex as the keyword `state`, a
    /// colon, and whatever follows.
    fn scan_word(&mut self, mode: LexMode) -> TokenKind {
        let len = self
            .rest
            .bytes()
            .take_while(|&b| is_word_byte(b))
            .count();
        let word = &self.rest[..len];

        let (kind, consumed) = match mode.keyword(word) {
            Some(keyword) => (TokenKind::Keyword(keyword), len),
            None => match split_keyword_colon(mode, word) {
                Some((keyword, head)) => (TokenKind::Keyword(keyword), head),
                None => (TokenKind::Identifier, len),
            },
        };
        for _ in 0..consumed {
            self.advance();
        }
        kind
    }

    /// Consumes a run of characters that cannot start any token.
    fn scan_invalid(&mut self) {
        self.advance();
        while let Some(c) = self.peek_char() {
            if can_start_token(c, self.rest) {
                break;
            }
            self.advance();
        }
    }
}

/// Returns the keyword before the first `:` of `word` and its length.
fn split_keyword_colon(mode: LexMode, word: &str) -> Option<(Keyword, usize)> {
    let (head, _) = word.split_once(':')?;
    mode.keyword(head).map(|keyword| (keyword, head.len()))
}

/// Returns true if `c` can start an identifier.
fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if `b` can continue an identifier.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b':' | b'#' | b'-')
}

/// Returns true if `c`, at the start of `rest`, begins a valid token.
fn can_start_token(c: char, rest: &str) -> bool {
    c.is_whitespace()
        || c.is_ascii_digit()
        || is_word_start(c)
        || matches!(
            c,
            '#' | '"' | '\'' | '(' | ')' | '{' | '}' | ',' | '=' | ':' | '%' | '.'
        )
        || rest.starts_with("->")
}
