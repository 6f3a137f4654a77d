//! Date and time values carried by date/time tokens.
//!
//! Fields hold exactly the digits that were written. Nothing here checks the
//! calendar: `2023-02-31` and an offset of `+25:99` are representable, and
//! validating them is left to whoever consumes the tokens.

use std::fmt;

/// A calendar date (`YYYY-MM-DD`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// A time of day (`HH:MM:SS[.fraction]`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fractional seconds in nanoseconds, `0..=999_999_999`.
    pub nanosecond: u32,
}

/// A UTC offset (`Z`, `+HH:MM`, or `-HH:MM`).
///
/// `Z` is the zero offset with `negative == false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub negative: bool,
    pub hours: u8,
    pub minutes: u8,
}

/// A date with a time and an optional offset.
///
/// `offset` is `Some` exactly when the token kind is
/// [`OffsetDateTime`](crate::TokenKind::OffsetDateTime).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
    pub offset: Option<Offset>,
}

impl Offset {
    /// The `Z` offset.
    pub const UTC: Self = Self {
        negative: false,
        hours: 0,
        minutes: 0,
    };
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        Ok(())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "{sign}{:02}:{:02}", self.hours, self.minutes)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)?;
        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}
