#![allow(clippy::unwrap_used, reason = "test assertions")]

use super::*;
use pretty_assertions::assert_eq;

fn scan_date_time(text: &str) -> Result<Token, LexError> {
    Scanner::new(text.chars()).scan_date_time()
}

fn scan_local_time(text: &str) -> Result<Token, LexError> {
    Scanner::new(text.chars()).scan_local_time()
}

fn date(year: u16, month: u8, day: u8) -> Date {
    Date { year, month, day }
}

fn time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Time {
    Time {
        hour,
        minute,
        second,
        nanosecond,
    }
}

#[test]
fn offset_date_time_zulu() {
    let token = scan_date_time("1979-05-27T07:32:00Z").unwrap();
    assert_eq!(token.kind(), TokenKind::OffsetDateTime);
    assert_eq!(token.lexeme(), "1979-05-27T07:32:00Z");
    assert_eq!(
        token.as_date_time(),
        Some(DateTime {
            date: date(1979, 5, 27),
            time: time(7, 32, 0, 0),
            offset: Some(Offset::UTC),
        })
    );
}

#[test]
fn offset_date_time_negative() {
    let token = scan_date_time("1979-05-27T00:32:00.999999-07:00").unwrap();
    assert_eq!(token.kind(), TokenKind::OffsetDateTime);
    let value = token.as_date_time().unwrap();
    assert_eq!(value.time, time(0, 32, 0, 999_999_000));
    assert_eq!(
        value.offset,
        Some(Offset {
            negative: true,
            hours: 7,
            minutes: 0,
        })
    );
}

#[test]
fn space_separator_needs_a_digit() {
    let token = scan_date_time("1979-05-27 07:32:00Z").unwrap();
    assert_eq!(token.kind(), TokenKind::OffsetDateTime);
    assert_eq!(token.lexeme(), "1979-05-27 07:32:00Z");

    let mut scanner = Scanner::new("1979-05-27 # birthday".chars());
    let token = scanner.scan_date_time().unwrap();
    assert_eq!(token.kind(), TokenKind::LocalDate);
    assert_eq!(token.lexeme(), "1979-05-27");
    assert_eq!(scanner.current(), Some(' '));
}

#[test]
fn lowercase_separators() {
    let token = scan_date_time("1979-05-27t07:32:00z").unwrap();
    assert_eq!(token.kind(), TokenKind::OffsetDateTime);
    assert_eq!(token.as_date_time().unwrap().offset, Some(Offset::UTC));
}

#[test]
fn local_date_time() {
    let token = scan_date_time("1979-05-27T07:32:00").unwrap();
    assert_eq!(token.kind(), TokenKind::LocalDateTime);
    let value = token.as_date_time().unwrap();
    assert_eq!(value.offset, None);
    assert_eq!(value.to_string(), "1979-05-27T07:32:00");
}

#[test]
fn local_date() {
    let token = scan_date_time("1979-05-27").unwrap();
    assert_eq!(token.kind(), TokenKind::LocalDate);
    assert_eq!(token.as_date(), Some(date(1979, 5, 27)));
    assert_eq!(token.as_date_time(), None);
}

#[test]
fn local_time() {
    let token = scan_local_time("07:32:00").unwrap();
    assert_eq!(token.kind(), TokenKind::LocalTime);
    assert_eq!(token.as_time(), Some(time(7, 32, 0, 0)));

    let token = scan_local_time("00:32:00.999999").unwrap();
    assert_eq!(token.as_time(), Some(time(0, 32, 0, 999_999_000)));
}

#[test]
fn lone_time_rejects_offsets() {
    for text in ["07:32:00Z", "07:32:00z", "07:32:00+01:00", "07:32:00-01:00"] {
        let err = scan_local_time(text).unwrap_err();
        assert_eq!(err.syntax_kind(), Some(&SyntaxErrorKind::LoneTimeOffset), "{text}");
        assert_eq!(err.position().unwrap().column, 9, "{text}");
    }
}

#[test]
fn fraction_is_right_padded() {
    let token = scan_local_time("00:00:00.5").unwrap();
    assert_eq!(token.as_time().unwrap().nanosecond, 500_000_000);
    let token = scan_local_time("00:00:00.000000001").unwrap();
    assert_eq!(token.as_time().unwrap().nanosecond, 1);
}

#[test]
fn fraction_beyond_nanoseconds_is_truncated() {
    let token = scan_local_time("00:00:00.1234567899").unwrap();
    assert_eq!(token.lexeme(), "00:00:00.1234567899");
    assert_eq!(token.as_time().unwrap().nanosecond, 123_456_789);
}

#[test]
fn fraction_needs_a_digit() {
    let err = scan_local_time("07:32:00.").unwrap_err();
    assert_eq!(err.syntax_kind(), Some(&SyntaxErrorKind::UnexpectedEof));
}

#[test]
fn calendar_is_not_validated() {
    let token = scan_date_time("2023-02-31T25:61:60+99:99").unwrap();
    let value = token.as_date_time().unwrap();
    assert_eq!(value.date, date(2023, 2, 31));
    assert_eq!(value.time, time(25, 61, 60, 0));
    assert_eq!(
        value.offset,
        Some(Offset {
            negative: false,
            hours: 99,
            minutes: 99,
        })
    );
}

#[test]
fn malformed_fields() {
    let err = scan_date_time("1979-5-27").unwrap_err();
    assert_eq!(
        err.syntax_kind(),
        Some(&SyntaxErrorKind::ExpectedClass {
            expected: CharClass::DecimalDigit,
            found: '-'
        })
    );
    assert_eq!(err.position().unwrap().column, 7);

    let err = scan_date_time("1979-05-27T07-32-00").unwrap_err();
    assert_eq!(
        err.syntax_kind(),
        Some(&SyntaxErrorKind::ExpectedChar {
            expected: ':',
            found: '-'
        })
    );

    let err = scan_date_time("1979-05-27T07:32:00+07").unwrap_err();
    assert_eq!(err.syntax_kind(), Some(&SyntaxErrorKind::UnexpectedEof));
}
