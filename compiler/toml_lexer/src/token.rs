//! Token model.
//!
//! A [`Token`] is immutable once produced: its kind, its literal value (for
//! kinds that carry one), the exact source text it was scanned from, and the
//! position of its first character.
//!
//! Tokens are only built inside the crate, through [`TokenBuilder`], which
//! keeps the kind/value pairing below an invariant of every emitted token:
//!
//! | Kind | Value |
//! |------|-------|
//! | `Id`, `String` | [`TokenValue::String`] |
//! | `Integer` | [`TokenValue::Integer`] |
//! | `Float` | [`TokenValue::Float`] |
//! | `Boolean` | [`TokenValue::Boolean`] |
//! | `OffsetDateTime`, `LocalDateTime` | [`TokenValue::DateTime`] |
//! | `LocalDate` | [`TokenValue::Date`] |
//! | `LocalTime` | [`TokenValue::Time`] |
//! | everything else | none |

use std::fmt;

use toml_lexer_core::Position;

use crate::date_time::{Date, DateTime, Time};

/// Kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Punctuation: `=`, `.`, `[`, `]`, `,`, `{`, `}`.
    Char,
    /// Key name, bare or quoted.
    Id,
    /// Run of spaces and tabs.
    Whitespace,
    /// Run of `\n` / `\r\n`.
    Newline,
    /// `#` through end of line, newline excluded.
    Comment,
    Integer,
    Float,
    Boolean,
    String,
    OffsetDateTime,
    LocalDateTime,
    LocalDate,
    LocalTime,
    /// `[[` opening an array-of-tables header.
    ArrayTableOpen,
    /// `]]` closing an array-of-tables header.
    ArrayTableClose,
}

impl TokenKind {
    /// Returns `true` if tokens of this kind carry a [`TokenValue`].
    pub fn has_value(self) -> bool {
        matches!(
            self,
            Self::Id
                | Self::Integer
                | Self::Float
                | Self::Boolean
                | Self::String
                | Self::OffsetDateTime
                | Self::LocalDateTime
                | Self::LocalDate
                | Self::LocalTime
        )
    }

    /// Returns `true` for whitespace, newlines, and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::Comment)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::Id => "Id",
            Self::Whitespace => "Whitespace",
            Self::Newline => "Newline",
            Self::Comment => "Comment",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::OffsetDateTime => "OffsetDateTime",
            Self::LocalDateTime => "LocalDateTime",
            Self::LocalDate => "LocalDate",
            Self::LocalTime => "LocalTime",
            Self::ArrayTableOpen => "ArrayTableOpen",
            Self::ArrayTableClose => "ArrayTableClose",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded literal value of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Decoded string contents, or the resolved name of a key.
    String(String),
    DateTime(DateTime),
    Date(Date),
    Time(Time),
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: Option<TokenValue>,
    lexeme: String,
    position: Position,
}

impl Token {
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The decoded value, present exactly when [`TokenKind::has_value`].
    #[inline]
    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    /// The exact source text of the token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Line and column of the token's first character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            Some(TokenValue::Integer(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.value {
            Some(TokenValue::Float(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Some(TokenValue::Boolean(v)) => Some(v),
            _ => None,
        }
    }

    /// String contents for `String` tokens, the key name for `Id` tokens.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<DateTime> {
        match self.value {
            Some(TokenValue::DateTime(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        match self.value {
            Some(TokenValue::Date(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<Time> {
        match self.value {
            Some(TokenValue::Time(v)) => Some(v),
            _ => None,
        }
    }
}

/// A token under construction.
///
/// Records the start position and accumulates the lexeme as the scanner
/// consumes characters. Consumed by one of the `finish` methods, so each
/// builder yields exactly one token.
#[derive(Debug)]
pub(crate) struct TokenBuilder {
    position: Position,
    lexeme: String,
}

impl TokenBuilder {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            lexeme: String::new(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.lexeme.push(c);
    }

    pub(crate) fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Finish a token that carries no value.
    pub(crate) fn finish(self, kind: TokenKind) -> Token {
        debug_assert!(!kind.has_value(), "{kind} requires a value");
        self.build(kind, None)
    }

    /// Finish a token with its decoded value.
    pub(crate) fn finish_with(self, kind: TokenKind, value: TokenValue) -> Token {
        debug_assert!(
            matches!(
                (kind, &value),
                (TokenKind::Id | TokenKind::String, TokenValue::String(_))
                    | (TokenKind::Integer, TokenValue::Integer(_))
                    | (TokenKind::Float, TokenValue::Float(_))
                    | (TokenKind::Boolean, TokenValue::Boolean(_))
                    | (
                        TokenKind::OffsetDateTime | TokenKind::LocalDateTime,
                        TokenValue::DateTime(_)
                    )
                    | (TokenKind::LocalDate, TokenValue::Date(_))
                    | (TokenKind::LocalTime, TokenValue::Time(_))
            ),
            "{kind} cannot carry {value:?}"
        );
        self.build(kind, Some(value))
    }

    fn build(self, kind: TokenKind, value: Option<TokenValue>) -> Token {
        Token {
            kind,
            value,
            lexeme: self.lexeme,
            position: self.position,
        }
    }
}
