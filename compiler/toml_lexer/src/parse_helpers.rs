//! Numeric Parsing Helpers
//!
//! Conversions from the separator-free digit strings the numeric scanner
//! collects into values. Range failures are reported as `None`; the caller
//! attaches the literal's position.

use std::num::FpCategory;

/// Parse digits of `radix` into an `i64` with checked arithmetic.
///
/// `digits` must not contain a sign, prefix, or underscores. When `negative`
/// is set the value is accumulated downward, so `i64::MIN` is reachable.
#[inline]
pub(crate) fn parse_int(digits: &str, radix: u32, negative: bool) -> Option<i64> {
    let mut result: i64 = 0;
    for c in digits.chars() {
        let digit = i64::from(c.to_digit(radix)?);
        result = result.checked_mul(i64::from(radix))?;
        result = if negative {
            result.checked_sub(digit)?
        } else {
            result.checked_add(digit)?
        };
    }
    Some(result)
}

/// Parse a decimal float, rejecting results outside the `f64` range.
///
/// `text` is an optional `-`, digits, optional fraction, and optional
/// exponent, with no underscores. Overflow shows up as an infinite result,
/// underflow as zero from a mantissa that has a nonzero digit.
#[inline]
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    if value.is_infinite() {
        return None;
    }
    if value.classify() == FpCategory::Zero && has_nonzero_mantissa(text) {
        return None;
    }
    Some(value)
}

fn has_nonzero_mantissa(text: &str) -> bool {
    let mantissa = match text.find(['e', 'E']) {
        Some(end) => &text[..end],
        None => text,
    };
    mantissa.chars().any(|c| matches!(c, '1'..='9'))
}
