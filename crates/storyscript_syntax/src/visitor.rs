//! Visitor for walking syntax trees.
//!
//! Implement the `visit_*` methods of interest on [`TreeVisitor`] and pass
//! the visitor to [`walk_tree`].
//!
//! # Example
//!
//! ```
//! use storyscript_syntax::{parse, NodeKind, SyntaxNode};
//! use storyscript_syntax::visitor::{TreeVisitor, walk_tree};
//!
//! struct RoomNames(Vec<String>);
//!
//! impl TreeVisitor for RoomNames {
//!     fn enter_node(&mut self, node: &SyntaxNode<'_>) {
//!         if node.kind == NodeKind::RoomDef {
//!             if let Some(name) = node.identifier() {
//!                 self.0.push(name.text.to_string());
//!             }
//!         }
//!     }
//! }
//!
//! let result = parse("room foyer { }\nroom cellar { }");
//! let mut names = RoomNames(Vec::new());
//! walk_tree(&mut names, &result.root);
//! assert_eq!(names.0, vec!["foyer", "cellar"]);
//! ```

use crate::node_kind::NodeKind;
use crate::token::Token;
use crate::tree::{Element, SyntaxNode};

/// Trait for read-only tree visitors.
///
/// The default implementations do nothing.
#[allow(unused_variables)]
pub trait TreeVisitor {
    /// Called when entering any node, before its children.
    fn enter_node(&mut self, node: &SyntaxNode<'_>) {}

    /// Called when leaving any node, after its children.
    fn leave_node(&mut self, node: &SyntaxNode<'_>) {}

    /// Visit a token, comments included.
    fn visit_token(&mut self, token: &Token<'_>) {}

    /// Visit an `error` node (after `enter_node`).
    fn visit_error(&mut self, node: &SyntaxNode<'_>) {}

    /// Visit a `missing` placeholder (after `enter_node`).
    fn visit_missing(&mut self, node: &SyntaxNode<'_>) {}
}

/// Walks a tree depth-first in source order, calling visitor methods.
///
/// Order of calls for each node:
/// 1. `enter_node`
/// 2. `visit_error` or `visit_missing` for those kinds
/// 3. children (tokens through `visit_token`)
/// 4. `leave_node`
pub fn walk_tree<V: TreeVisitor + ?Sized>(visitor: &mut V, node: &SyntaxNode<'_>) {
    visitor.enter_node(node);
    match node.kind {
        NodeKind::Error => visitor.visit_error(node),
        NodeKind::Missing => visitor.visit_missing(node),
        _ => {}
    }
    for child in &node.children {
        match child {
            Element::Node(inner) => walk_tree(visitor, inner),
            Element::Token(token) => visitor.visit_token(token),
        }
    }
    visitor.leave_node(node);
}
