//! Configuration for the parser.

/// Configuration for a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Deepest allowed nesting of condition groups and action blocks.
    pub max_nesting: usize,

    /// Whether comments are attached to the tree as tokens.
    ///
    /// The token stream of the result always contains them.
    pub keep_comments: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_nesting: 64,
            keep_comments: true,
        }
    }
}

impl ParseConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the nesting limit.
    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Builder method to keep or drop comments in the tree.
    #[must_use]
    pub fn with_keep_comments(mut self, keep_comments: bool) -> Self {
        self.keep_comments = keep_comments;
        self
    }
}
