//! Error-tolerant recursive-descent parser for Storyscript.
//!
//! The parser pulls tokens from the [`Lexer`] one at a time, telling it
//! which [`LexMode`] applies at each point. It buffers one token of
//! lookahead; asking for the same position in another mode rewinds the
//! lexer and scans the token again.
//!
//! Nodes are built on an explicit stack: a rule calls `start`, consumes
//! tokens (which land in the innermost open node) and calls `finish`,
//! which attaches the node to its parent. Parsing never fails. Problems
//! become diagnostics plus `error` or `missing` nodes in the tree.

mod condition;
mod goal;
mod item;
mod npc;
mod program;
mod room;
mod spinner;
mod trigger;
mod value;

use crate::config::ParseConfig;
use crate::diagnostic::{Diagnostic, DiagnosticKind, SyntaxError};
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::lexer::{Checkpoint, Lexer, Scanned};
use crate::node_kind::NodeKind;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tree::{Element, SyntaxNode};

/// The outcome of a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseResult<'src> {
    /// The `program` node.
    pub root: SyntaxNode<'src>,
    /// Everything that went wrong, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Every token read, trivia included, ending with `Eof`.
    pub tokens: Vec<Token<'src>>,
}

impl<'src> ParseResult<'src> {
    /// Returns true if any diagnostic reports skipped source.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Returns the error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Returns the tree if no source was skipped.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] carrying the error diagnostics otherwise.
    pub fn into_checked(self) -> Result<SyntaxNode<'src>, SyntaxError> {
        if self.has_errors() {
            Err(SyntaxError {
                diagnostics: self.diagnostics.into_iter().filter(Diagnostic::is_error).collect(),
            })
        } else {
            Ok(self.root)
        }
    }
}

/// Parses Storyscript source with the default configuration.
#[must_use]
pub fn parse(source: &str) -> ParseResult<'_> {
    parse_with_config(source, &ParseConfig::default())
}

/// Parses Storyscript source.
#[must_use]
pub fn parse_with_config<'src>(source: &'src str, config: &ParseConfig) -> ParseResult<'src> {
    log::debug!("parsing {} bytes", source.len());
    let mut parser = Parser::new(source, config.clone());
    parser.program();
    let result = parser.into_result();
    log::debug!(
        "parsed {} definitions, {} tokens, {} diagnostics",
        result.root.child_nodes().count(),
        result.tokens.len(),
        result.diagnostics.len()
    );
    result
}

/// The buffered lookahead token.
struct Lookahead<'src> {
    mode: LexMode,
    start: Checkpoint,
    scanned: Scanned<'src>,
}

/// A node under construction.
struct Frame<'src> {
    kind: NodeKind,
    children: Vec<Element<'src>>,
    at: Span,
}

/// Parser state for one source text.
pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
    config: ParseConfig,
    lookahead: Option<Lookahead<'src>>,
    stack: Vec<Frame<'src>>,
    tokens: Vec<Token<'src>>,
    diagnostics: Vec<Diagnostic>,
    /// Current nesting of groups and trigger blocks.
    depth: usize,
    /// Line on which the last consumed significant token ended.
    last_line: u32,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, config: ParseConfig) -> Self {
        Self {
            lexer: Lexer::new(source),
            config,
            lookahead: None,
            stack: vec![Frame {
                kind: NodeKind::Program,
                children: Vec::new(),
                at: Span::at_start(),
            }],
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            depth: 0,
            last_line: 0,
        }
    }

    fn into_result(mut self) -> ParseResult<'src> {
        let eof = self.peek(LexMode::TopLevel);
        self.tokens.push(eof);
        while self.stack.len() > 1 {
            self.finish();
        }
        let root = match self.stack.pop() {
            Some(frame) => SyntaxNode::new(frame.kind, frame.children, frame.at),
            None => SyntaxNode::new(NodeKind::Program, Vec::new(), Span::at_start()),
        };
        self.diagnostics.sort_by_key(|d| d.span.start);
        ParseResult {
            root,
            diagnostics: self.diagnostics,
            tokens: self.tokens,
        }
    }

    // ----- Tokens -----

    /// Returns the next significant token as scanned in `mode`.
    ///
    /// Trivia in front of it is consumed on the way.
    pub(crate) fn peek(&mut self, mode: LexMode) -> Token<'src> {
        if let Some(lookahead) = &self.lookahead {
            if lookahead.mode == mode {
                return lookahead.scanned.token;
            }
            self.lexer.rewind(lookahead.start);
            self.lookahead = None;
        }
        loop {
            let start = self.lexer.checkpoint();
            let scanned = self.lexer.scan(mode);
            if scanned.token.kind.is_trivia() {
                self.push_trivia(scanned.token);
                continue;
            }
            let token = scanned.token;
            self.lookahead = Some(Lookahead {
                mode,
                start,
                scanned,
            });
            return token;
        }
    }

    fn push_trivia(&mut self, token: Token<'src>) {
        self.tokens.push(token);
        if token.kind == TokenKind::Comment && self.config.keep_comments {
            self.push_element(token.into());
        }
    }

    /// Returns true if the next token in `mode` has the given kind.
    pub(crate) fn at(&mut self, mode: LexMode, kind: TokenKind) -> bool {
        self.peek(mode).kind == kind
    }

    /// Returns true if the next token in `mode` is the given keyword.
    pub(crate) fn at_keyword(&mut self, mode: LexMode, keyword: Keyword) -> bool {
        self.peek(mode).is_keyword(keyword)
    }

    /// Consumes the next token, scanned in `mode`, into the open node.
    ///
    /// End of input is never consumed.
    pub(crate) fn bump(&mut self, mode: LexMode) -> Token<'src> {
        let token = self.peek(mode);
        if token.is_eof() {
            return token;
        }
        if let Some(lookahead) = self.lookahead.take() {
            if let Some(diagnostic) = lookahead.scanned.diagnostic {
                self.diagnostics.push(diagnostic);
            }
        }
        self.tokens.push(token);
        self.last_line = token.end_line();
        self.push_element(token.into());
        token
    }

    /// Consumes the next token, wrapping invalid characters in an `error`
    /// node.
    pub(crate) fn bump_any(&mut self, mode: LexMode) -> Token<'src> {
        if self.at(mode, TokenKind::Error) {
            self.start(NodeKind::Error);
            let token = self.bump(mode);
            self.finish();
            token
        } else {
            self.bump(mode)
        }
    }

    /// Consumes the next token if it has the given kind.
    pub(crate) fn eat(&mut self, mode: LexMode, kind: TokenKind) -> bool {
        let matched = self.at(mode, kind);
        if matched {
            self.bump(mode);
        }
        matched
    }

    /// Consumes the next token if it is the given keyword.
    pub(crate) fn eat_keyword(&mut self, mode: LexMode, keyword: Keyword) -> bool {
        self.eat(mode, TokenKind::Keyword(keyword))
    }

    /// Consumes a token of the given kind or records it as missing.
    pub(crate) fn expect(&mut self, mode: LexMode, kind: TokenKind) -> bool {
        if self.eat(mode, kind) {
            true
        } else {
            self.missing(kind.name());
            false
        }
    }

    /// Consumes the given keyword or records it as missing.
    pub(crate) fn expect_keyword(&mut self, mode: LexMode, keyword: Keyword) -> bool {
        self.expect(mode, TokenKind::Keyword(keyword))
    }

    /// Consumes an identifier or records it as missing.
    ///
    /// A top-level keyword at column 1 is never taken as a name.
    pub(crate) fn expect_identifier(&mut self) -> bool {
        if self.at_top_level_start() {
            self.missing(TokenKind::Identifier.name());
            return false;
        }
        self.expect(LexMode::Plain, TokenKind::Identifier)
    }

    /// Returns the kind of the token after the lookahead, scanned in
    /// `second`, without consuming anything.
    pub(crate) fn peek_second(&mut self, first: LexMode, second: LexMode) -> TokenKind {
        self.peek(first);
        let after = self.lexer.checkpoint();
        let kind = loop {
            let token = self.lexer.scan(second).token;
            if !token.kind.is_trivia() {
                break token.kind;
            }
        };
        self.lexer.rewind(after);
        kind
    }

    /// Returns true if `token` starts on the line the previous token ended.
    pub(crate) fn on_same_line(&self, token: &Token<'src>) -> bool {
        !token.is_eof() && token.span.line == self.last_line
    }

    /// Returns true if the next token is a top-level keyword at column 1.
    pub(crate) fn at_top_level_start(&mut self) -> bool {
        let token = self.peek(LexMode::TopLevel);
        token.keyword().is_some() && token.span.column == 1
    }

    // ----- Nodes -----

    /// Opens a node; tokens consumed from now on become its children.
    pub(crate) fn start(&mut self, kind: NodeKind) {
        let at = self.position();
        self.stack.push(Frame {
            kind,
            children: Vec::new(),
            at,
        });
    }

    /// Closes the innermost node and attaches it to its parent.
    pub(crate) fn finish(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(frame) = self.stack.pop() {
            let node = SyntaxNode::new(frame.kind, frame.children, frame.at);
            self.push_element(node.into());
        }
    }

    fn push_element(&mut self, element: Element<'src>) {
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(element);
        }
    }

    /// Position of the next significant token, or of the lexer when
    /// nothing is buffered.
    fn position(&self) -> Span {
        match &self.lookahead {
            Some(lookahead) => lookahead.scanned.token.span.point(),
            None => {
                let here = self.lexer.checkpoint();
                Span::new(here.offset(), here.offset(), here.line(), here.column())
            }
        }
    }

    /// Records a required element as absent.
    pub(crate) fn missing(&mut self, expected: &str) {
        let mode = self
            .lookahead
            .as_ref()
            .map_or(LexMode::Plain, |lookahead| lookahead.mode);
        let at = self.peek(mode).span.point();
        self.diagnostics.push(Diagnostic::recovered(
            at,
            DiagnosticKind::MissingToken {
                expected: expected.to_string(),
            },
        ));
        self.push_element(SyntaxNode::missing(at).into());
    }

    // ----- Blocks and recovery -----

    /// Parses `{ statement* }` into a node of `kind`.
    ///
    /// `statement` is called with the next token scanned in `mode` and
    /// returns false when that token starts no statement; it must consume
    /// at least one token when it returns true.
    pub(crate) fn block(
        &mut self,
        kind: NodeKind,
        mode: LexMode,
        expected: &str,
        statement: fn(&mut Self, Token<'src>) -> bool,
    ) {
        if !self.at(mode, TokenKind::LBrace) {
            self.missing("'{'");
            return;
        }
        self.start(kind);
        self.block_body(mode, expected, statement);
        self.finish();
    }

    /// Like [`Parser::block`], but the braces and statements become
    /// children of the open node.
    pub(crate) fn braced(
        &mut self,
        mode: LexMode,
        expected: &str,
        statement: fn(&mut Self, Token<'src>) -> bool,
    ) {
        if self.at(mode, TokenKind::LBrace) {
            self.block_body(mode, expected, statement);
        } else {
            self.missing("'{'");
        }
    }

    /// Parses `{ statement* }` at a `{` into the open node.
    pub(crate) fn block_body(
        &mut self,
        mode: LexMode,
        expected: &str,
        statement: fn(&mut Self, Token<'src>) -> bool,
    ) {
        let opened_line = self.bump(mode).span.line;
        loop {
            let token = self.peek(mode);
            match token.kind {
                TokenKind::RBrace => {
                    self.bump(mode);
                    break;
                }
                TokenKind::Eof => {
                    self.unclosed(opened_line);
                    break;
                }
                _ if self.at_top_level_start() => {
                    self.unclosed(opened_line);
                    break;
                }
                _ => {
                    let token = self.peek(mode);
                    if !statement(self, token) {
                        self.recover(mode, expected);
                    }
                }
            }
        }
    }

    /// Closes a block that has no `}`.
    fn unclosed(&mut self, opened_line: u32) {
        let at = self.position();
        log::debug!("closing block from line {opened_line} at {}:{}", at.line, at.column);
        self.diagnostics.push(Diagnostic::recovered(
            at,
            DiagnosticKind::UnclosedBlock { opened_line },
        ));
        self.push_element(SyntaxNode::missing(at).into());
    }

    /// Skips tokens inside a block into one `error` node.
    ///
    /// Stops before a keyword of `mode`, a `}` closing the block, a
    /// top-level keyword at column 1, or end of input. Brace groups are
    /// skipped whole.
    pub(crate) fn recover(&mut self, mode: LexMode, expected: &str) {
        let first = self.peek(mode);
        self.report_unexpected(first, expected);
        log::debug!("recovering at {}:{}", first.span.line, first.span.column);

        self.start(NodeKind::Error);
        let mut braces = 0usize;
        let mut consumed = false;
        loop {
            let token = self.peek(mode);
            if token.is_eof() {
                break;
            }
            if consumed {
                if self.at_top_level_start() {
                    break;
                }
                let token = self.peek(mode);
                let sync = matches!(token.kind, TokenKind::Keyword(_) | TokenKind::RBrace);
                if braces == 0 && sync {
                    break;
                }
            }
            match self.bump(mode).kind {
                TokenKind::LBrace => braces += 1,
                TokenKind::RBrace => braces = braces.saturating_sub(1),
                _ => {}
            }
            consumed = true;
        }
        self.finish();
        let at = self.position();
        log::debug!("resuming at {}:{}", at.line, at.column);
    }

    /// Skips top-level tokens into one `error` node, up to the next
    /// top-level keyword.
    pub(crate) fn recover_top_level(&mut self) {
        let first = self.peek(LexMode::TopLevel);
        self.report_unexpected(first, "a definition");
        log::debug!("recovering at {}:{}", first.span.line, first.span.column);

        self.start(NodeKind::Error);
        loop {
            self.bump(LexMode::TopLevel);
            let token = self.peek(LexMode::TopLevel);
            if token.is_eof() || token.keyword().is_some() {
                break;
            }
        }
        self.finish();
    }

    /// Wraps the single next token in an `error` node.
    pub(crate) fn skip_token(&mut self, mode: LexMode, expected: &str) {
        let token = self.peek(mode);
        self.report_unexpected(token, expected);
        self.start(NodeKind::Error);
        self.bump(mode);
        self.finish();
    }

    fn report_unexpected(&mut self, token: Token<'src>, expected: &str) {
        // Invalid characters already carry a lexical diagnostic.
        if token.kind == TokenKind::Error {
            return;
        }
        let found = if token.is_eof() {
            token.kind.name().to_string()
        } else {
            format!("`{}`", token.text)
        };
        self.diagnostics.push(Diagnostic::error(
            token.span,
            DiagnosticKind::UnexpectedToken {
                found,
                expected: expected.to_string(),
            },
        ));
    }

    // ----- Nesting -----

    /// Enters a nested group or block starting at the next token.
    ///
    /// Past the configured limit the whole bracketed group becomes an
    /// `error` node and false is returned; the caller must then skip the
    /// construct. Every successful call is paired with [`Parser::leave`].
    pub(crate) fn enter(&mut self, mode: LexMode) -> bool {
        if self.depth < self.config.max_nesting {
            self.depth += 1;
            return true;
        }
        let limit = self.config.max_nesting;
        let token = self.peek(mode);
        self.diagnostics.push(Diagnostic::error(
            token.span,
            DiagnosticKind::NestingTooDeep { limit },
        ));
        self.start(NodeKind::Error);
        let mut open = 0usize;
        loop {
            let kind = self.peek(mode).kind;
            match kind {
                TokenKind::Eof => break,
                TokenKind::LBrace | TokenKind::LParen => open += 1,
                TokenKind::RBrace | TokenKind::RParen => open = open.saturating_sub(1),
                _ => {}
            }
            self.bump(mode);
            if open == 0 {
                break;
            }
        }
        self.finish();
        false
    }

    /// Leaves a nested group or block.
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
