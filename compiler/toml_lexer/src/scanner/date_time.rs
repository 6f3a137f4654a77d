//! RFC 3339 dates and times.
//!
//! Every field is a fixed number of decimal digits with exact separators.
//! Values are not range-checked.

use toml_lexer_core::CharClass;

use super::Scanner;
use crate::date_time::{Date, DateTime, Offset, Time};
use crate::lex_error::{LexError, SyntaxErrorKind};
use crate::token::{Token, TokenBuilder, TokenKind, TokenValue};

/// Digits of nanosecond precision kept from fractional seconds.
const NANOSECOND_DIGITS: usize = 9;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scan a literal that starts with a date: `LocalDate`, `LocalDateTime`,
    /// or `OffsetDateTime`.
    pub(crate) fn scan_date_time(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();
        let date = self.scan_date(&mut token)?;

        let has_time = match self.current() {
            Some('T' | 't') => true,
            Some(' ') => self.peek(1).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        if !has_time {
            return Ok(token.finish_with(TokenKind::LocalDate, TokenValue::Date(date)));
        }
        self.bump(&mut token);

        let time = self.scan_time(&mut token)?;
        let offset = self.scan_offset(&mut token)?;
        let kind = if offset.is_some() {
            TokenKind::OffsetDateTime
        } else {
            TokenKind::LocalDateTime
        };
        Ok(token.finish_with(kind, TokenValue::DateTime(DateTime { date, time, offset })))
    }

    /// Scan a time of day with no date. An offset after it is an error.
    pub(crate) fn scan_local_time(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();
        let time = self.scan_time(&mut token)?;
        if matches!(self.current(), Some('+' | '-' | 'Z' | 'z')) {
            return Err(self.error(SyntaxErrorKind::LoneTimeOffset));
        }
        Ok(token.finish_with(TokenKind::LocalTime, TokenValue::Time(time)))
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "fields are at most four decimal digits"
    )]
    fn scan_date(&mut self, token: &mut TokenBuilder) -> Result<Date, LexError> {
        let year = self.expect_digits(token, 4)? as u16;
        self.expect(token, '-')?;
        let month = self.expect_digits(token, 2)? as u8;
        self.expect(token, '-')?;
        let day = self.expect_digits(token, 2)? as u8;
        Ok(Date { year, month, day })
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "fields are two decimal digits"
    )]
    fn scan_time(&mut self, token: &mut TokenBuilder) -> Result<Time, LexError> {
        let hour = self.expect_digits(token, 2)? as u8;
        self.expect(token, ':')?;
        let minute = self.expect_digits(token, 2)? as u8;
        self.expect(token, ':')?;
        let second = self.expect_digits(token, 2)? as u8;

        let nanosecond = if self.current() == Some('.') {
            self.bump(token);
            self.scan_fraction(token)?
        } else {
            0
        };

        Ok(Time {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    /// Fractional seconds after the `.`, as nanoseconds.
    ///
    /// At least one digit is required. Digits past the ninth are consumed
    /// and dropped.
    fn scan_fraction(&mut self, token: &mut TokenBuilder) -> Result<u32, LexError> {
        let mut nanos = digit_value(self.expect_class(token, CharClass::DecimalDigit)?);
        let mut kept = 1;
        while let Some(c) = self.current().filter(char::is_ascii_digit) {
            self.bump(token);
            if kept < NANOSECOND_DIGITS {
                nanos = nanos * 10 + digit_value(c);
                kept += 1;
            }
        }
        for _ in kept..NANOSECOND_DIGITS {
            nanos *= 10;
        }
        Ok(nanos)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "fields are two decimal digits"
    )]
    fn scan_offset(&mut self, token: &mut TokenBuilder) -> Result<Option<Offset>, LexError> {
        match self.current() {
            Some('Z' | 'z') => {
                self.bump(token);
                Ok(Some(Offset::UTC))
            }
            Some(sign @ ('+' | '-')) => {
                self.bump(token);
                let hours = self.expect_digits(token, 2)? as u8;
                self.expect(token, ':')?;
                let minutes = self.expect_digits(token, 2)? as u8;
                Ok(Some(Offset {
                    negative: sign == '-',
                    hours,
                    minutes,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Exactly `count` decimal digits, as a number.
    fn expect_digits(&mut self, token: &mut TokenBuilder, count: usize) -> Result<u32, LexError> {
        let mut value = 0;
        for _ in 0..count {
            value = value * 10 + digit_value(self.expect_class(token, CharClass::DecimalDigit)?);
        }
        Ok(value)
    }
}

#[inline]
fn digit_value(c: char) -> u32 {
    c.to_digit(10).unwrap_or_default()
}

#[cfg(test)]
mod tests;
