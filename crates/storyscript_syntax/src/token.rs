//! Token types for Storyscript.
//!
//! Tokens are the output of the lexer and input to the parser. Unlike tree
//! nodes they borrow their text from the source buffer.

use crate::keyword::Keyword;
use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    /// The type of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
    /// The source text this token covers.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Self { kind, span, text }
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Returns the keyword this token carries, if any.
    #[must_use]
    pub const fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// Returns true if this token is the end-of-input marker.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns the 1-based line on which this token ends.
    #[must_use]
    pub fn end_line(&self) -> u32 {
        let newlines = self.text.bytes().filter(|&b| b == b'\n').count();
        self.span
            .line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX))
    }
}

/// Delimiter style of a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Quote {
    /// `"..."`
    Double,
    /// `'...'`
    Single,
    /// `"""..."""`, may span lines
    Triple,
}

impl Quote {
    /// Returns the delimiter text.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Double => "\"",
            Self::Single => "'",
            Self::Triple => "\"\"\"",
        }
    }
}

/// Token types for Storyscript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Words and literals
    /// Name like `foyer`, `clearance-granted`, or `flag#2`
    Identifier,
    /// Digit run like `42`
    Number,
    /// String literal in one of the quote styles
    String(Quote),
    /// Reserved word recognised in the current lex mode
    Keyword(Keyword),

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `=`
    Eq,
    /// `->`
    Arrow,
    /// `:`
    Colon,
    /// `%`
    Percent,
    /// `.`
    Dot,

    // Trivia
    /// Spaces, tabs, and line breaks
    Whitespace,
    /// `#` to end of line
    Comment,

    // Meta
    /// Bytes that cannot start any token
    Error,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true if this token kind is skipped by the parser.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// Returns true for identifier-shaped tokens: identifiers and keywords.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Identifier | Self::Keyword(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String(_) => "string",
            Self::Keyword(keyword) => keyword.as_str(),
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Eq => "'='",
            Self::Arrow => "'->'",
            Self::Colon => "':'",
            Self::Percent => "'%'",
            Self::Dot => "'.'",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Error => "invalid characters",
            Self::Eof => "end of input",
        }
    }
}
