//! Tokenizer configuration.

/// Default number of tokens that may be peeked beyond the current one.
pub const DEFAULT_LOOKAHEAD: usize = 1;

/// Default limit on simultaneously open arrays and inline tables.
pub const DEFAULT_MAX_NESTING: usize = 128;

/// Configuration for a [`Tokenizer`](crate::Tokenizer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// How many tokens beyond the current one `peek` can reach.
    /// The token queue holds `lookahead + 1` tokens.
    pub lookahead: usize,

    /// Maximum number of open arrays and inline tables.
    /// Opening one more is a syntax error.
    pub max_nesting: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl TokenizerConfig {
    /// Create a new config with the specified lookahead depth.
    pub fn with_lookahead(lookahead: usize) -> Self {
        Self {
            lookahead,
            ..Default::default()
        }
    }

    /// Create a new config with the specified nesting limit.
    pub fn with_max_nesting(max_nesting: usize) -> Self {
        Self {
            max_nesting,
            ..Default::default()
        }
    }

    /// Capacity of the token queue.
    pub(crate) fn queue_capacity(&self) -> usize {
        self.lookahead.saturating_add(1)
    }
}
