//! Storyscript - error-tolerant parsing for interactive-fiction content
//!
//! This crate re-exports the Storyscript crates for convenient access.
//! For detailed documentation, see the individual crates.
//!
//! # Architecture
//!
//! ```text
//! storyscript_runtime  - CLI, REPL, diagnostic reports, MessagePack export
//! storyscript_syntax   - Lexer, parser, syntax tree, visitor, tree printer
//! ```

pub use storyscript_runtime as runtime;
pub use storyscript_syntax as syntax;
