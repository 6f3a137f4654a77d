#![allow(clippy::unwrap_used, clippy::float_cmp, reason = "test assertions")]

use super::*;
use pretty_assertions::assert_eq;
use toml_lexer_core::Position;

fn scan(text: &str) -> Result<Token, LexError> {
    Scanner::new(text.chars()).scan_number()
}

fn integer(text: &str) -> i64 {
    let token = scan(text).unwrap();
    assert_eq!(token.kind(), TokenKind::Integer, "{text}");
    assert_eq!(token.lexeme(), text);
    token.as_integer().unwrap()
}

fn float(text: &str) -> f64 {
    let token = scan(text).unwrap();
    assert_eq!(token.kind(), TokenKind::Float, "{text}");
    assert_eq!(token.lexeme(), text);
    token.as_float().unwrap()
}

fn error(text: &str) -> (SyntaxErrorKind, u32) {
    let err = scan(text).unwrap_err();
    let column = err.position().unwrap().column;
    (err.syntax_kind().cloned().unwrap(), column)
}

// === Decimal integers ===

#[test]
fn decimal_integers() {
    assert_eq!(integer("1234"), 1234);
    assert_eq!(integer("+1234"), 1234);
    assert_eq!(integer("-1234"), -1234);
    assert_eq!(integer("123_456_789"), 123_456_789);
    assert_eq!(integer("1_2_3_4_5"), 12345);
    assert_eq!(integer("-1234_5"), -12345);
}

#[test]
fn lone_zero() {
    assert_eq!(integer("0"), 0);
    assert_eq!(integer("+0"), 0);
    assert_eq!(integer("-0"), 0);
}

#[test]
fn i64_limits() {
    assert_eq!(integer("9223372036854775807"), i64::MAX);
    assert_eq!(integer("-9223372036854775808"), i64::MIN);
}

#[test]
fn integer_overflow_reported_at_literal_start() {
    assert_eq!(error("9223372036854775808"), (SyntaxErrorKind::IntegerOverflow, 1));
    assert_eq!(error("-9223372036854775809"), (SyntaxErrorKind::IntegerOverflow, 1));
}

#[test]
fn leading_zeros_rejected() {
    assert_eq!(error("05"), (SyntaxErrorKind::LeadingZero, 2));
    assert_eq!(error("-00"), (SyntaxErrorKind::LeadingZero, 3));
    assert_eq!(error("+01"), (SyntaxErrorKind::LeadingZero, 3));
    assert_eq!(error("0_1"), (SyntaxErrorKind::LeadingZero, 2));
}

#[test]
fn misplaced_underscores() {
    assert_eq!(
        error("-12_"),
        (SyntaxErrorKind::UnexpectedEof, 5)
    );
    assert_eq!(
        error("1__2"),
        (
            SyntaxErrorKind::ExpectedClass {
                expected: CharClass::DecimalDigit,
                found: '_'
            },
            3
        )
    );
}

#[test]
fn lone_sign() {
    assert_eq!(error("+"), (SyntaxErrorKind::UnexpectedEof, 2));
}

#[test]
fn decimal_rejects_hex_letters() {
    assert_eq!(
        error("1f"),
        (
            SyntaxErrorKind::ExpectedClass {
                expected: CharClass::DecimalDigit,
                found: 'f'
            },
            2
        )
    );
}

// === Prefixed integers ===

#[test]
fn binary() {
    assert_eq!(integer("0b1001"), 9);
    assert_eq!(integer("0b0110"), 6);
    assert_eq!(integer("0b0000"), 0);
    assert_eq!(integer("0b0"), 0);
}

#[test]
fn octal() {
    assert_eq!(integer("0o700"), 448);
    assert_eq!(integer("0o744"), 484);
    assert_eq!(integer("0o000"), 0);
    assert_eq!(integer("0o0"), 0);
    assert_eq!(integer("0o777"), 511);
}

#[test]
fn hex() {
    assert_eq!(integer("0x42"), 66);
    assert_eq!(integer("0x0"), 0);
    assert_eq!(integer("0x0000"), 0);
    assert_eq!(integer("0x0f"), 15);
    assert_eq!(integer("0xFF"), 255);
    assert_eq!(integer("0xdead_beef"), 0xdead_beef);
}

#[test]
fn hex_e_is_a_digit() {
    assert_eq!(integer("0x1e5"), 0x1e5);
    assert_eq!(integer("0xE"), 14);
}

#[test]
fn prefixed_overflow() {
    assert_eq!(integer("0x7fff_ffff_ffff_ffff"), i64::MAX);
    assert_eq!(error("0x8000000000000000"), (SyntaxErrorKind::IntegerOverflow, 1));
}

#[test]
fn digits_outside_base() {
    assert_eq!(
        error("0b12"),
        (
            SyntaxErrorKind::ExpectedClass {
                expected: CharClass::BinaryDigit,
                found: '2'
            },
            4
        )
    );
    assert_eq!(
        error("0o12345678"),
        (
            SyntaxErrorKind::ExpectedClass {
                expected: CharClass::OctalDigit,
                found: '8'
            },
            10
        )
    );
}

#[test]
fn prefix_needs_a_digit() {
    assert_eq!(error("0x"), (SyntaxErrorKind::UnexpectedEof, 3));
    assert_eq!(
        error("0b_1"),
        (
            SyntaxErrorKind::ExpectedClass {
                expected: CharClass::BinaryDigit,
                found: '_'
            },
            3
        )
    );
}

#[test]
fn integer_stops_at_delimiters() {
    let mut scanner = Scanner::new("42, 7".chars());
    let token = scanner.scan_number().unwrap();
    assert_eq!(token.as_integer(), Some(42));
    assert_eq!(scanner.current(), Some(','));
}

// === Floats ===

#[test]
fn floats() {
    assert_eq!(float("+1.0"), 1.0);
    assert_eq!(float("3.1415"), 3.1415);
    assert_eq!(float("-0.01"), -0.01);
    assert_eq!(float("5e+22"), 5e22);
    assert_eq!(float("1e06"), 1e6);
    assert_eq!(float("-2E-2"), -0.02);
    assert_eq!(float("6.626e-34"), 6.626e-34);
    assert_eq!(float("224_617.445_991_228"), 224_617.445_991_228);
    assert_eq!(float("1_2.34_56"), 12.3456);
}

#[test]
fn zero_floats() {
    assert_eq!(float("0.5"), 0.5);
    assert_eq!(float("0e3"), 0.0);
    let negative_zero = float("-0.0");
    assert_eq!(negative_zero, 0.0);
    assert!(negative_zero.is_sign_negative());
}

#[test]
fn float_format_errors() {
    assert_eq!(error("7."), (SyntaxErrorKind::UnexpectedEof, 3));
    assert_eq!(
        error("3.e+20"),
        (
            SyntaxErrorKind::ExpectedClass {
                expected: CharClass::DecimalDigit,
                found: 'e'
            },
            3
        )
    );
    assert_eq!(error("1.2.3"), (SyntaxErrorKind::MultipleDecimalPoints, 4));
    assert_eq!(error("1e2.5"), (SyntaxErrorKind::DecimalPointAfterExponent, 4));
    assert_eq!(error("1e2e3"), (SyntaxErrorKind::MultipleExponents, 4));
    assert_eq!(error("1e"), (SyntaxErrorKind::UnexpectedEof, 3));
    assert_eq!(error("1e+"), (SyntaxErrorKind::UnexpectedEof, 4));
}

#[test]
fn float_range_reported_at_literal_start() {
    assert_eq!(error("1e400"), (SyntaxErrorKind::FloatOutOfRange, 1));
    assert_eq!(error("-1e400"), (SyntaxErrorKind::FloatOutOfRange, 1));
    assert_eq!(error("1e-400"), (SyntaxErrorKind::FloatOutOfRange, 1));
}

// === Special floats ===

#[test]
fn infinities() {
    assert_eq!(float("inf"), f64::INFINITY);
    assert_eq!(float("+inf"), f64::INFINITY);
    assert_eq!(float("-inf"), f64::NEG_INFINITY);
}

#[test]
fn nans() {
    assert!(float("nan").is_nan());
    assert!(float("+nan").is_nan());
    let negative = float("-nan");
    assert!(negative.is_nan());
    assert!(negative.is_sign_negative());
}

#[test]
fn misspelled_specials() {
    assert_eq!(
        error("imf"),
        (
            SyntaxErrorKind::ExpectedChar {
                expected: 'n',
                found: 'm'
            },
            2
        )
    );
    assert_eq!(
        error("-imf"),
        (
            SyntaxErrorKind::ExpectedChar {
                expected: 'n',
                found: 'm'
            },
            3
        )
    );
    assert_eq!(
        error("non"),
        (
            SyntaxErrorKind::ExpectedChar {
                expected: 'a',
                found: 'o'
            },
            2
        )
    );
    assert_eq!(error("+na"), (SyntaxErrorKind::UnexpectedEof, 4));
}

#[test]
fn error_position_tracks_lines() {
    let err = Scanner::new("0b12".chars()).scan_number().unwrap_err();
    assert_eq!(err.position(), Some(Position::new(1, 4)));
}
