//! Error types for the Storyscript command-line tools.
//!
//! Syntax problems are not errors here: they are reported as diagnostics.
//! These errors cover everything around the parser, like files, the
//! terminal and export.

use std::path::Path;

use thiserror::Error;

/// The main error type for the runtime crate.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an I/O error mentioning the file involved.
    #[must_use]
    pub fn io(action: &str, path: &Path, error: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io(format!(
            "failed to {action} '{}': {error}",
            path.display()
        )))
    }

    /// Creates a usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }
}

/// Categorized error kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A source file is not valid UTF-8.
    #[error("'{path}' is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 {
        /// The file that was read.
        path: String,
        /// Offset of the first invalid byte.
        offset: usize,
    },

    /// Exporting a parse result failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The line editor failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}

/// Result type alias using the runtime [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
