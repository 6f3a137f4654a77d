//! Integers and floats.
//!
//! Grammar handled here, in the order it is checked:
//!
//! - `[+-]inf`, `[+-]nan`
//! - `0b`/`0o`/`0x` prefixed integers (leading zeros allowed)
//! - decimal integers without leading zeros (`0`, `+0`, `-0` alone are fine)
//! - decimal floats: integer part, optional `.digits`, optional exponent
//!
//! Underscores must sit between two digits of the active base. The digit
//! loop accepts any hex digit and then insists on the active base, so `0b12`
//! fails on `2` with "expected binary digit" instead of silently ending.

use toml_lexer_core::CharClass;

use super::Scanner;
use crate::lex_error::{LexError, SyntaxErrorKind};
use crate::parse_helpers::{parse_float, parse_int};
use crate::token::{Token, TokenBuilder, TokenKind, TokenValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    fn from_prefix(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Binary),
            'o' => Some(Self::Octal),
            'x' => Some(Self::Hex),
            _ => None,
        }
    }

    fn value(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    fn digit_class(self) -> CharClass {
        match self {
            Self::Binary => CharClass::BinaryDigit,
            Self::Octal => CharClass::OctalDigit,
            Self::Decimal => CharClass::DecimalDigit,
            Self::Hex => CharClass::HexDigit,
        }
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scan an integer or float literal.
    pub(crate) fn scan_number(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();

        let sign_len = usize::from(matches!(self.current(), Some('+' | '-')));
        match self.peek(sign_len) {
            Some('i') => return self.scan_special_float(token, "inf", f64::INFINITY),
            Some('n') => return self.scan_special_float(token, "nan", f64::NAN),
            _ => {}
        }

        let first = self.expect_class(&mut token, CharClass::DecimalDigitOrSign)?;
        let negative = first == '-';
        let mut radix = Radix::Decimal;
        // Digits only: no sign, prefix, or underscores.
        let mut digits = String::new();

        if first == '+' || first == '-' {
            let lead = self.expect_class(&mut token, CharClass::DecimalDigit)?;
            digits.push(lead);
            if lead == '0' {
                self.reject_leading_zero()?;
            }
        } else if first == '0' {
            if let Some(prefixed) = self.current().and_then(Radix::from_prefix) {
                radix = prefixed;
                self.bump(&mut token);
                digits.push(self.expect_class(&mut token, radix.digit_class())?);
            } else {
                digits.push('0');
                self.reject_leading_zero()?;
            }
        } else {
            digits.push(first);
        }

        self.scan_digits(&mut token, radix, &mut digits)?;

        if radix == Radix::Decimal && matches!(self.current(), Some('.' | 'e' | 'E')) {
            return self.scan_float(token, negative, digits);
        }

        let value = parse_int(&digits, radix.value(), negative).ok_or_else(|| {
            LexError::syntax(SyntaxErrorKind::IntegerOverflow, token.position())
        })?;
        Ok(token.finish_with(TokenKind::Integer, TokenValue::Integer(value)))
    }

    fn scan_special_float(
        &mut self,
        mut token: TokenBuilder,
        word: &str,
        magnitude: f64,
    ) -> Result<Token, LexError> {
        let negative = self.current() == Some('-');
        if matches!(self.current(), Some('+' | '-')) {
            self.bump(&mut token);
        }
        self.expect_word(&mut token, word)?;
        let value = if negative { -magnitude } else { magnitude };
        Ok(token.finish_with(TokenKind::Float, TokenValue::Float(value)))
    }

    /// A zero that starts a decimal number must be the whole integer part.
    fn reject_leading_zero(&mut self) -> Result<(), LexError> {
        match self.current() {
            Some(c) if c.is_ascii_digit() || c == '_' => {
                Err(self.error(SyntaxErrorKind::LeadingZero))
            }
            _ => Ok(()),
        }
    }

    /// Remaining digits and `_` separators of an integer part.
    fn scan_digits(
        &mut self,
        token: &mut TokenBuilder,
        radix: Radix,
        digits: &mut String,
    ) -> Result<(), LexError> {
        let class = radix.digit_class();
        while let Some(c) = self.current() {
            if radix == Radix::Decimal && matches!(c, 'e' | 'E') {
                break;
            }
            if c == '_' {
                self.bump(token);
            } else if !c.is_ascii_hexdigit() {
                break;
            }
            digits.push(self.expect_class(token, class)?);
        }
        Ok(())
    }

    /// Fraction and exponent of a decimal float. `digits` is the integer part.
    fn scan_float(
        &mut self,
        mut token: TokenBuilder,
        negative: bool,
        digits: String,
    ) -> Result<Token, LexError> {
        let mut text = String::with_capacity(digits.len() + 8);
        if negative {
            text.push('-');
        }
        text.push_str(&digits);

        let mut seen_fraction = false;
        let mut seen_exponent = false;
        while let Some(c) = self.current() {
            match c {
                '.' => {
                    if seen_exponent {
                        return Err(self.error(SyntaxErrorKind::DecimalPointAfterExponent));
                    }
                    if seen_fraction {
                        return Err(self.error(SyntaxErrorKind::MultipleDecimalPoints));
                    }
                    self.bump(&mut token);
                    text.push('.');
                    text.push(self.expect_class(&mut token, CharClass::DecimalDigit)?);
                    seen_fraction = true;
                }
                'e' | 'E' => {
                    if seen_exponent {
                        return Err(self.error(SyntaxErrorKind::MultipleExponents));
                    }
                    self.bump(&mut token);
                    text.push('e');
                    let lead = self.expect_class(&mut token, CharClass::DecimalDigitOrSign)?;
                    text.push(lead);
                    if !lead.is_ascii_digit() {
                        text.push(self.expect_class(&mut token, CharClass::DecimalDigit)?);
                    }
                    seen_exponent = true;
                }
                '_' => {
                    self.bump(&mut token);
                    text.push(self.expect_class(&mut token, CharClass::DecimalDigit)?);
                }
                c if c.is_ascii_hexdigit() => {
                    text.push(self.expect_class(&mut token, CharClass::DecimalDigit)?);
                }
                _ => break,
            }
        }

        let value = parse_float(&text).ok_or_else(|| {
            LexError::syntax(SyntaxErrorKind::FloatOutOfRange, token.position())
        })?;
        Ok(token.finish_with(TokenKind::Float, TokenValue::Float(value)))
    }
}

#[cfg(test)]
mod tests;
