//! Integration tests over complete Storyscript files
//!
//! Each module parses realistic content of one kind and checks the tree
//! shape. Every parse also goes through [`check_invariants`].

mod npcs;
mod rooms;
mod triggers;
mod world;

use storyscript_syntax::{Element, NodeKind, ParseResult, SyntaxNode, parse};

/// Parses `source`, checks the structural invariants, and requires a
/// clean result.
pub fn parse_clean(source: &str) -> ParseResult<'_> {
    let result = parse(source);
    check_invariants(source, &result);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    result
}

/// Checks the properties every parse result has.
pub fn check_invariants(source: &str, result: &ParseResult<'_>) {
    let joined: String = result.tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, source, "token stream does not reproduce the source");
    assert!(result.tokens.last().is_some_and(|t| t.is_eof()));
    assert_eq!(result.root.kind, NodeKind::Program);
    check_node(&result.root);
}

fn check_node(node: &SyntaxNode<'_>) {
    let mut previous_end = node.span.start;
    for child in &node.children {
        let span = child.span();
        assert!(
            span.start >= previous_end,
            "{} children overlap at {}",
            node.kind,
            span.start
        );
        assert!(node.span.contains(&span), "{} child outside its span", node.kind);
        previous_end = span.end;
        if let Element::Node(inner) = child {
            check_node(inner);
        }
    }
}

/// Returns the kinds of the child nodes.
pub fn kinds(node: &SyntaxNode<'_>) -> Vec<NodeKind> {
    node.child_nodes().map(|n| n.kind).collect()
}

/// Returns the block of the definition named `name`.
pub fn block_of<'a>(root: &'a SyntaxNode<'a>, def: NodeKind, name: &str) -> &'a SyntaxNode<'a> {
    root.find_all(def)
        .find(|d| d.identifier().is_some_and(|t| t.text == name))
        .and_then(|d| d.child_nodes().find(|n| !n.is_missing()))
        .unwrap_or_else(|| panic!("no {def} named {name}"))
}
