//! S-expression rendering of syntax trees.
//!
//! Nodes print as `(kind child...)`. Identifier and number tokens print as
//! `(identifier)` and `(number)`; keywords, punctuation and comments are
//! left out unless [`PrettyConfig::show_tokens`] is set.
//!
//! # Example
//!
//! ```
//! use storyscript_syntax::{parse, pretty::render_tree};
//!
//! let result = parse("room foyer { name \"Foyer\" }");
//! assert_eq!(
//!     render_tree(&result.root),
//!     "(program (room_def (identifier) (room_block (room_name (string)))))"
//! );
//! ```

use std::fmt::Write;

use crate::node_kind::NodeKind;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tree::{Element, SyntaxNode};

/// Configuration for tree rendering.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Spaces per nesting level; 0 renders everything on one line.
    pub indent_width: usize,
    /// Append the byte range of every node and printed token.
    pub show_spans: bool,
    /// Print every token's text, comments included.
    pub show_tokens: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_spans: false,
            show_tokens: false,
        }
    }
}

impl PrettyConfig {
    /// Configuration for single-line output without spans or tokens.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            indent_width: 0,
            ..Self::default()
        }
    }
}

/// Renders a tree on one line.
#[must_use]
pub fn render_tree(node: &SyntaxNode<'_>) -> String {
    render_tree_with_config(node, &PrettyConfig::compact())
}

/// Renders a tree with custom configuration.
#[must_use]
pub fn render_tree_with_config(node: &SyntaxNode<'_>, config: &PrettyConfig) -> String {
    let mut printer = TreePrinter::new(config);
    printer.print_node(node, 0);
    printer.output
}

/// Renders a token stream, one token per line, as `line:column kind text`.
#[must_use]
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut output = String::new();
    for token in tokens {
        let _ = writeln!(
            output,
            "{}:{} {} {:?}",
            token.span.line,
            token.span.column,
            token.kind.name(),
            token.text
        );
    }
    output
}

struct TreePrinter<'c> {
    config: &'c PrettyConfig,
    output: String,
}

impl<'c> TreePrinter<'c> {
    fn new(config: &'c PrettyConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn print_node(&mut self, node: &SyntaxNode<'_>, depth: usize) {
        self.output.push('(');
        self.output.push_str(node.kind.name());
        self.print_span(node.span);
        for child in &node.children {
            match child {
                Element::Node(inner) => {
                    self.separator(depth + 1);
                    self.print_node(inner, depth + 1);
                }
                Element::Token(token) => self.print_token(node.kind, token, depth + 1),
            }
        }
        self.output.push(')');
    }

    fn print_token(&mut self, parent: NodeKind, token: &Token<'_>, depth: usize) {
        if self.config.show_tokens {
            self.separator(depth);
            let _ = write!(self.output, "{:?}", token.text);
            self.print_span(token.span);
            return;
        }
        // A string node already stands for its bare word.
        let named = matches!(token.kind, TokenKind::Identifier | TokenKind::Number);
        if named && !matches!(parent, NodeKind::String | NodeKind::Error) {
            self.separator(depth);
            self.output.push('(');
            self.output.push_str(token.kind.name());
            self.print_span(token.span);
            self.output.push(')');
        }
    }

    fn print_span(&mut self, span: Span) {
        if self.config.show_spans {
            let _ = write!(self.output, " [{}..{}]", span.start, span.end);
        }
    }

    fn separator(&mut self, depth: usize) {
        if self.config.indent_width == 0 {
            self.output.push(' ');
        } else {
            self.output.push('\n');
            let width = depth * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
        }
    }
}
