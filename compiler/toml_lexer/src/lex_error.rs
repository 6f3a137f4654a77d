//! Lexer error types.
//!
//! Two families, kept apart because they mean different things to a caller:
//!
//! - [`InternalError`]: the API was misused (asking for a token that does
//!   not exist, peeking past the configured lookahead). A bug in the caller.
//! - [`LexError::Syntax`]: the input is malformed. Always carries the 1-based
//!   position at which the problem was detected.
//!
//! Scanning is fail-fast. The first syntax error ends the token stream.

use thiserror::Error;
use toml_lexer_core::{CharClass, Position};

/// Any error the tokenizer can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// API misuse.
    #[error("internal error: {0}")]
    Internal(#[from] InternalError),

    /// Malformed input.
    #[error("syntax error at {position}: {kind}")]
    Syntax {
        kind: SyntaxErrorKind,
        position: Position,
    },
}

/// Misuse of the tokenizer API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum InternalError {
    /// `next` was called with no token available.
    #[error("no more tokens")]
    NoTokenAvailable,

    /// `peek` asked for a depth outside the queued tokens.
    #[error("peek depth {depth} is out of range ({available} token(s) available)")]
    PeekOutOfRange { depth: usize, available: usize },
}

/// What was wrong with the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum SyntaxErrorKind {
    // === Structure ===
    /// No rule of the current lexical mode accepts this character.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },

    /// Input ended inside a multi-character construct.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A character of a specific class was required.
    #[error("expected {expected}, found {found:?}")]
    ExpectedClass { expected: CharClass, found: char },

    /// One exact character was required.
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedChar { expected: char, found: char },

    /// More arrays and inline tables are open than the configured limit.
    #[error("arrays and inline tables nested deeper than {limit}")]
    NestingTooDeep { limit: usize },

    // === Numbers ===
    /// Decimal number with a leading zero (`05`, `-00`).
    #[error("decimal number has leading zero(s)")]
    LeadingZero,

    /// Second `.` in a float.
    #[error("float has more than one decimal point")]
    MultipleDecimalPoints,

    /// `.` after the exponent part.
    #[error("decimal point after exponent")]
    DecimalPointAfterExponent,

    /// Second `e`/`E` in a float.
    #[error("float has more than one exponent part")]
    MultipleExponents,

    /// Integer does not fit in 64 bits.
    #[error("integer overflows 64 bits")]
    IntegerOverflow,

    /// Float overflows to infinity or underflows to zero.
    #[error("float overflow/underflow")]
    FloatOutOfRange,

    // === Dates and times ===
    /// A local time followed by an offset.
    #[error("lone time cannot have an offset")]
    LoneTimeOffset,

    // === Strings ===
    /// Single-line string ended by a newline or end of input.
    #[error("unterminated string")]
    UnterminatedString,

    /// Multi-line string without its closing delimiter.
    #[error("unterminated multi-line string")]
    UnterminatedMultilineString,

    /// Unknown escape character after `\`.
    #[error("invalid escape sequence \\{found}")]
    InvalidEscape { found: char },

    /// `\u`/`\U` escape naming something that is not a Unicode scalar value.
    #[error("invalid unicode escape U+{code:X}")]
    InvalidUnicodeEscape { code: u32 },

    /// Control character inside a string or comment.
    #[error("control character {found:?} is not allowed here")]
    ControlCharacter { found: char },

    /// Multi-line string used as a key.
    #[error("multi-line strings cannot be keys")]
    MultilineKey,
}

impl LexError {
    /// Create a syntax error.
    pub(crate) fn syntax(kind: SyntaxErrorKind, position: Position) -> Self {
        Self::Syntax { kind, position }
    }

    /// The kind of a syntax error, or `None` for internal errors.
    pub fn syntax_kind(&self) -> Option<&SyntaxErrorKind> {
        match self {
            Self::Syntax { kind, .. } => Some(kind),
            Self::Internal(_) => None,
        }
    }

    /// Where a syntax error was detected, or `None` for internal errors.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Syntax { position, .. } => Some(*position),
            Self::Internal(_) => None,
        }
    }
}
