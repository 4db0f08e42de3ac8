//! CLI, REPL, diagnostic reporting, and export for Storyscript.
//!
//! This crate provides:
//! - [`Repl`] - Interactive parsing loop
//! - [`CliConfig`] and [`check_file`] - the `storyscript` checker
//! - [`report`] - diagnostics rendered with source context
//! - [`serialize`] - `MessagePack` export of parse results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod repl;
pub mod report;
pub mod serialize;

pub use check::{FileOutcome, check_file, read_source, render_result};
pub use config::CliConfig;
pub use error::{Error, ErrorKind, Result};
pub use repl::Repl;
