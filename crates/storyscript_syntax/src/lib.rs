//! Scanner, parser, and syntax tree for Storyscript.
//!
//! Storyscript is a small declarative language for interactive-fiction
//! content: rooms, items, NPCs, goals, spinners and triggers. This crate
//! provides:
//! - [`Lexer`] - context-sensitive tokenization driven by a [`LexMode`]
//! - [`parse`] - error-tolerant parsing into a concrete [`SyntaxNode`] tree
//! - [`visitor`] - read-only tree traversal
//! - [`pretty`] - S-expression rendering of trees
//!
//! Parsing never fails. Malformed input produces [`Diagnostic`]s together
//! with `error` and `missing` nodes, and the rest of the file still parses.
//!
//! ```
//! use storyscript_syntax::{parse, NodeKind};
//!
//! let result = parse("room foyer {\n  name \"Foyer\"\n}\n");
//! assert!(result.diagnostics.is_empty());
//! let room = result.root.find(NodeKind::RoomDef).unwrap();
//! assert_eq!(room.identifier().unwrap().text, "foyer");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod diagnostic;
pub mod keyword;
pub mod lex_mode;
pub mod lexer;
pub mod node_kind;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod string_value;
pub mod token;
pub mod tree;
pub mod visitor;


pub use config::ParseConfig;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity, SyntaxError};
pub use keyword::Keyword;
pub use lex_mode::LexMode;
pub use lexer::{Checkpoint, Lexer, Scanned};
pub use node_kind::NodeKind;
pub use parser::{ParseResult, parse, parse_with_config};
pub use span::Span;
pub use string_value::string_value;
pub use token::{Quote, Token, TokenKind};
pub use tree::{Element, SyntaxNode};
