//! Basic (`"`) and literal (`'`) strings, single- and multi-line.
//!
//! A multi-line string ends at the first run of three delimiter quotes. Up
//! to two quotes may sit right before the closing delimiter, so a run of four
//! or five quotes closes the string and contributes one or two quotes to its
//! value. The run is capped at five; a sixth quote starts the next token.

use toml_lexer_core::{is_whitespace, CharClass, Position};

use super::Scanner;
use crate::lex_error::{LexError, SyntaxErrorKind};
use crate::token::{Token, TokenBuilder, TokenKind, TokenValue};

/// Length of a multi-line delimiter.
const DELIMITER_LEN: usize = 3;

/// Longest quote run a multi-line string can end with.
const MAX_CLOSING_QUOTES: usize = 5;

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Scan a string starting at `"` or `'`.
    ///
    /// With `as_key` set the string is a quoted key: the token is an `Id`
    /// whose value is the decoded name, and multi-line strings are rejected.
    pub(crate) fn scan_string(&mut self, as_key: bool) -> Result<Token, LexError> {
        let mut token = self.begin();
        let quote = match self.current() {
            Some(c @ ('"' | '\'')) => c,
            Some(found) => return Err(self.error(SyntaxErrorKind::UnexpectedCharacter { found })),
            None => return Err(self.error(SyntaxErrorKind::UnexpectedEof)),
        };
        let basic = quote == '"';
        self.bump(&mut token);

        let multiline = self.peek(0) == Some(quote) && self.peek(1) == Some(quote);
        let value = if multiline {
            if as_key {
                return Err(LexError::syntax(SyntaxErrorKind::MultilineKey, token.position()));
            }
            self.bump(&mut token);
            self.bump(&mut token);
            self.scan_multiline_body(&mut token, quote, basic)?
        } else {
            self.scan_line_body(&mut token, quote, basic)?
        };

        let kind = if as_key { TokenKind::Id } else { TokenKind::String };
        Ok(token.finish_with(kind, TokenValue::String(value)))
    }

    fn scan_line_body(
        &mut self,
        token: &mut TokenBuilder,
        quote: char,
        basic: bool,
    ) -> Result<String, LexError> {
        let mut value = String::new();
        loop {
            match self.current() {
                None | Some('\n' | '\r') => {
                    return Err(self.error(SyntaxErrorKind::UnterminatedString));
                }
                Some(c) if c == quote => {
                    self.bump(token);
                    return Ok(value);
                }
                Some('\\') if basic => self.scan_escape(token, &mut value)?,
                Some(_) => value.push(self.expect_content(token)?),
            }
        }
    }

    fn scan_multiline_body(
        &mut self,
        token: &mut TokenBuilder,
        quote: char,
        basic: bool,
    ) -> Result<String, LexError> {
        // A newline right after the opening delimiter is not part of the value.
        if matches!(self.current(), Some('\n' | '\r')) {
            self.expect_newline(token)?;
        }

        let mut value = String::new();
        let mut quotes = 0;
        while quotes < MAX_CLOSING_QUOTES {
            let Some(c) = self.current() else {
                break;
            };
            if c == quote {
                self.bump(token);
                quotes += 1;
                continue;
            }
            if quotes >= DELIMITER_LEN {
                break;
            }
            // The quotes seen so far were content.
            for _ in 0..quotes {
                value.push(quote);
            }
            quotes = 0;

            match c {
                '\\' if basic && self.is_line_continuation() => {
                    self.bump(token);
                    self.skip_continuation(token)?;
                }
                '\\' if basic => self.scan_escape(token, &mut value)?,
                '\n' | '\r' => {
                    self.expect_newline(token)?;
                    if c == '\r' {
                        value.push('\r');
                    }
                    value.push('\n');
                }
                _ => value.push(self.expect_content(token)?),
            }
        }

        if quotes < DELIMITER_LEN {
            return Err(self.error(SyntaxErrorKind::UnterminatedMultilineString));
        }
        for _ in DELIMITER_LEN..quotes {
            value.push(quote);
        }
        Ok(value)
    }

    /// `\` followed by optional spaces or tabs and then a line ending.
    fn is_line_continuation(&mut self) -> bool {
        let mut index = 1;
        loop {
            match self.peek(index) {
                Some(c) if is_whitespace(c) => index += 1,
                Some('\n' | '\r') => return true,
                _ => return false,
            }
        }
    }

    /// Consume whitespace and line endings after a line-continuation `\`.
    fn skip_continuation(&mut self, token: &mut TokenBuilder) -> Result<(), LexError> {
        loop {
            match self.current() {
                Some(c) if is_whitespace(c) => {
                    self.bump(token);
                }
                Some('\n' | '\r') => self.expect_newline(token)?,
                _ => return Ok(()),
            }
        }
    }

    /// Decode one escape sequence starting at `\`.
    fn scan_escape(
        &mut self,
        token: &mut TokenBuilder,
        value: &mut String,
    ) -> Result<(), LexError> {
        let start = self.position();
        self.expect(token, '\\')?;
        let decoded = match self.current() {
            Some('b') => '\u{8}',
            Some('t') => '\t',
            Some('n') => '\n',
            Some('f') => '\u{c}',
            Some('r') => '\r',
            Some('"') => '"',
            Some('\\') => '\\',
            Some('u') => return self.scan_unicode_escape(token, value, start, 4),
            Some('U') => return self.scan_unicode_escape(token, value, start, 8),
            Some(found) => return Err(self.error(SyntaxErrorKind::InvalidEscape { found })),
            None => return Err(self.error(SyntaxErrorKind::UnexpectedEof)),
        };
        self.bump(token);
        value.push(decoded);
        Ok(())
    }

    /// `\uXXXX` or `\UXXXXXXXX`. The code point must be a Unicode scalar value.
    fn scan_unicode_escape(
        &mut self,
        token: &mut TokenBuilder,
        value: &mut String,
        start: Position,
        digits: usize,
    ) -> Result<(), LexError> {
        self.bump(token);
        let mut code: u32 = 0;
        for _ in 0..digits {
            let digit = self.expect_class(token, CharClass::HexDigit)?;
            code = (code << 4) | digit.to_digit(16).unwrap_or_default();
        }
        let decoded = char::from_u32(code).ok_or_else(|| {
            LexError::syntax(SyntaxErrorKind::InvalidUnicodeEscape { code }, start)
        })?;
        value.push(decoded);
        Ok(())
    }
}
