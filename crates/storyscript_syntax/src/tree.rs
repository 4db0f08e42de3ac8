//! Concrete syntax tree for Storyscript.
//!
//! Nodes own their children outright. A child is either a nested node or a
//! token borrowed from the source. Whitespace lives only in the token
//! stream of a [`ParseResult`](crate::ParseResult); comments are kept in the
//! tree as tokens of the node that was open when they were read.

use crate::keyword::Keyword;
use crate::node_kind::NodeKind;
use crate::span::Span;
use crate::string_value::string_value;
use crate::token::{Token, TokenKind};

/// A child of a syntax node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Element<'src> {
    /// A nested node.
    Node(SyntaxNode<'src>),
    /// A token.
    Token(Token<'src>),
}

impl<'src> Element<'src> {
    /// Returns the source span of this element.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Node(node) => node.span,
            Self::Token(token) => token.span,
        }
    }

    /// Returns the node, if this element is one.
    #[must_use]
    pub const fn as_node(&self) -> Option<&SyntaxNode<'src>> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    /// Returns the token, if this element is one.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token<'src>> {
        match self {
            Self::Node(_) => None,
            Self::Token(token) => Some(token),
        }
    }

    /// Returns true if this element is a comment or whitespace token.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        match self {
            Self::Node(_) => false,
            Self::Token(token) => token.kind.is_trivia(),
        }
    }
}

impl<'src> From<SyntaxNode<'src>> for Element<'src> {
    fn from(node: SyntaxNode<'src>) -> Self {
        Self::Node(node)
    }
}

impl<'src> From<Token<'src>> for Element<'src> {
    fn from(token: Token<'src>) -> Self {
        Self::Token(token)
    }
}

/// A node of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyntaxNode<'src> {
    /// What this node represents.
    pub kind: NodeKind,
    /// Children in source order.
    pub children: Vec<Element<'src>>,
    /// Union of the children's spans.
    pub span: Span,
    /// True if this node or any descendant is an `error` or `missing` node.
    pub has_error: bool,
}

impl<'src> SyntaxNode<'src> {
    /// Creates a node from its children.
    ///
    /// The span covers the children; a childless node gets a zero-width
    /// span at `at`.
    #[must_use]
    pub fn new(kind: NodeKind, children: Vec<Element<'src>>, at: Span) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span().to(last.span()),
            _ => at.point(),
        };
        let has_error = kind.is_error()
            || children
                .iter()
                .any(|child| child.as_node().is_some_and(|node| node.has_error));
        Self {
            kind,
            children,
            span,
            has_error,
        }
    }

    /// Creates a zero-width `missing` placeholder at `at`.
    #[must_use]
    pub fn missing(at: Span) -> Self {
        Self::new(NodeKind::Missing, Vec::new(), at)
    }

    /// Returns true if this is a `missing` placeholder.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.kind == NodeKind::Missing
    }

    /// Returns the child nodes.
    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode<'src>> {
        self.children.iter().filter_map(Element::as_node)
    }

    /// Returns the direct child tokens, comments included.
    pub fn tokens(&self) -> impl Iterator<Item = &Token<'src>> {
        self.children.iter().filter_map(Element::as_token)
    }

    /// Returns the direct child tokens that are not comments.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens().filter(|token| !token.kind.is_trivia())
    }

    /// Returns the first child node of the given kind.
    #[must_use]
    pub fn find(&self, kind: NodeKind) -> Option<&SyntaxNode<'src>> {
        self.child_nodes().find(|node| node.kind == kind)
    }

    /// Returns every child node of the given kind.
    pub fn find_all(&self, kind: NodeKind) -> impl Iterator<Item = &SyntaxNode<'src>> {
        self.child_nodes().filter(move |node| node.kind == kind)
    }

    /// Returns every node below this one in preorder.
    #[must_use]
    pub fn descendants(&self) -> Vec<&SyntaxNode<'src>> {
        let mut out = Vec::new();
        let mut stack: Vec<&SyntaxNode<'src>> = self.child_nodes().collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let start = stack.len();
            stack.extend(node.child_nodes());
            stack[start..].reverse();
        }
        out
    }

    /// Returns the first direct identifier token.
    ///
    /// For definitions this is the defined name.
    #[must_use]
    pub fn identifier(&self) -> Option<&Token<'src>> {
        self.tokens().find(|token| token.kind == TokenKind::Identifier)
    }

    /// Returns the first direct keyword token's keyword.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        self.tokens().find_map(Token::keyword)
    }

    /// Returns the value of a `string` node.
    ///
    /// Quoted strings are decoded; a bare word stands for itself.
    #[must_use]
    pub fn string_value(&self) -> Option<String> {
        if self.kind != NodeKind::String {
            return None;
        }
        let token = self.significant_tokens().next()?;
        match token.kind {
            TokenKind::String(quote) => Some(string_value(token.text, quote)),
            TokenKind::Identifier | TokenKind::Keyword(_) | TokenKind::Number => {
                Some(token.text.to_string())
            }
            _ => None,
        }
    }

    /// Returns the source text this node covers.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Counts the `error` and `missing` nodes in this subtree.
    #[must_use]
    pub fn error_count(&self) -> usize {
        let own = usize::from(self.kind.is_error());
        own + self
            .child_nodes()
            .filter(|node| node.has_error)
            .map(SyntaxNode::error_count)
            .sum::<usize>()
    }
}
