//! Diagnostics produced while scanning and parsing.
//!
//! Parsing never fails outright. Everything that went wrong is reported
//! here, and the tree carries `error` and `missing` nodes at the same spots.

use thiserror::Error;

use crate::span::Span;
use crate::token::Quote;

/// How a problem was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    /// The parser synthesized the missing piece and nothing was lost.
    Recovered,
    /// Source text was skipped.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recovered => f.write_str("recovered"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// A string literal ran into a line break or the end of input.
    #[error("unterminated string literal (expected closing {})", .quote.delimiter())]
    UnterminatedString {
        /// The string's delimiter style.
        quote: Quote,
    },

    /// Bytes that cannot start a token.
    #[error("invalid characters `{text}`")]
    InvalidCharacter {
        /// The offending text.
        text: String,
    },

    /// A token that does not fit the grammar at this point.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// Description of the token found.
        found: String,
        /// Description of what would have been accepted.
        expected: String,
    },

    /// A required element is absent.
    #[error("missing {expected}")]
    MissingToken {
        /// Description of the missing element.
        expected: String,
    },

    /// End of input reached inside a block.
    #[error("missing `}}` to close the block opened on line {opened_line}")]
    UnclosedBlock {
        /// Line of the opening brace.
        opened_line: u32,
    },

    /// Groups or blocks nested beyond the configured limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },
}

/// A single diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Where the problem is.
    pub span: Span,
    /// What the problem is.
    pub kind: DiagnosticKind,
    /// How it was handled.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub const fn new(span: Span, kind: DiagnosticKind, severity: Severity) -> Self {
        Self {
            span,
            kind,
            severity,
        }
    }

    /// Creates an error-severity diagnostic.
    #[must_use]
    pub const fn error(span: Span, kind: DiagnosticKind) -> Self {
        Self::new(span, kind, Severity::Error)
    }

    /// Creates a recovered-severity diagnostic.
    #[must_use]
    pub const fn recovered(span: Span, kind: DiagnosticKind) -> Self {
        Self::new(span, kind, Severity::Recovered)
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns true if this diagnostic reports skipped source.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.span.line, self.span.column, self.severity, self.kind
        )
    }
}

/// Error returned when a checked parse contains errors.
#[derive(Debug, Clone, Error)]
#[error("{} syntax error(s); first: {}", .diagnostics.len(), first_message(.diagnostics))]
pub struct SyntaxError {
    /// The diagnostics that caused the failure, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

fn first_message(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .first()
        .map_or_else(String::new, ToString::to_string)
}
