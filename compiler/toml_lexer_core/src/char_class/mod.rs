//! Character classes used by the TOML scanner.
//!
//! Every multi-character construct is consumed by *expecting* a character of
//! a given class. When the expectation fails, the class name goes straight
//! into the syntax error ("expected hex digit"), so each class carries a
//! human-readable [`name`](CharClass::name).

use std::fmt;

/// A named set of characters the scanner can expect next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `0-9`.
    DecimalDigit,
    /// `0-9`, `+`, or `-` (start of a signed number or exponent).
    DecimalDigitOrSign,
    /// `0` or `1`.
    BinaryDigit,
    /// `0-7`.
    OctalDigit,
    /// `0-9`, `a-f`, `A-F`.
    HexDigit,
    /// Space or tab.
    Whitespace,
    /// Bare key character: `A-Z`, `a-z`, `0-9`, `_`, `-`.
    BareKey,
    /// Any character allowed inside strings and comments.
    Content,
}

impl CharClass {
    /// Returns `true` if `c` belongs to this class.
    #[inline]
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::DecimalDigit => c.is_ascii_digit(),
            Self::DecimalDigitOrSign => c.is_ascii_digit() || c == '+' || c == '-',
            Self::BinaryDigit => matches!(c, '0' | '1'),
            Self::OctalDigit => matches!(c, '0'..='7'),
            Self::HexDigit => c.is_ascii_hexdigit(),
            Self::Whitespace => is_whitespace(c),
            Self::BareKey => is_bare_key_char(c),
            Self::Content => is_content_char(c),
        }
    }

    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::DecimalDigit => "decimal digit",
            Self::DecimalDigitOrSign => "decimal digit, `+`, or `-`",
            Self::BinaryDigit => "binary digit",
            Self::OctalDigit => "octal digit",
            Self::HexDigit => "hex digit",
            Self::Whitespace => "space or tab",
            Self::BareKey => "letter, digit, `_`, or `-`",
            Self::Content => "printable character",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 128-entry lookup table for bare key characters.
/// `true` for A-Z, a-z, 0-9, `_`, and `-`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static IS_BARE_KEY_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0u16;
    while i < 128 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `c` may appear in a bare key.
#[inline]
pub fn is_bare_key_char(c: char) -> bool {
    c.is_ascii() && IS_BARE_KEY_TABLE[c as usize]
}

/// Returns `true` for the horizontal whitespace TOML recognizes (space, tab).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Returns `true` if `c` may appear literally in a string or comment.
///
/// Everything except control characters is allowed; tab is the one control
/// character TOML permits. Newlines are handled by the callers that allow
/// them (multi-line strings), never by this class.
#[inline]
pub fn is_content_char(c: char) -> bool {
    c == '\t' || (c > '\u{1f}' && c != '\u{7f}')
}
