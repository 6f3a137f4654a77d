//! Character-level scanner.
//!
//! [`Scanner`] owns the [`LookaheadSource`] and the position counter. Every
//! character it consumes is appended to the [`TokenBuilder`] of the token
//! being scanned and advances the position, so lexemes and positions can
//! never drift apart.
//!
//! Multi-character constructs are consumed by *expecting* characters:
//! [`Scanner::expect`] for one exact character, [`Scanner::expect_class`]
//! for a [`CharClass`]. A failed expectation is a syntax error at the
//! position of the offending character.
//!
//! The simple token shapes (trivia, bare keys, punctuation, booleans) live
//! here. Numbers, dates and times, and strings have their own submodules.

mod date_time;
mod numeric;
mod string;

use toml_lexer_core::{is_bare_key_char, is_whitespace, CharClass, LookaheadSource, Position};

use crate::lex_error::{LexError, SyntaxErrorKind};
use crate::token::{Token, TokenBuilder, TokenKind, TokenValue};

pub(crate) struct Scanner<I: Iterator<Item = char>> {
    source: LookaheadSource<I>,
    position: Position,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub(crate) fn new(chars: I) -> Self {
        Self {
            source: LookaheadSource::new(chars),
            position: Position::START,
        }
    }

    /// Position of the next unconsumed character.
    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// The next unconsumed character.
    #[inline]
    pub(crate) fn current(&mut self) -> Option<char> {
        self.source.peek(0)
    }

    #[inline]
    pub(crate) fn peek(&mut self, index: usize) -> Option<char> {
        self.source.peek(index)
    }

    /// Syntax error at the current position.
    pub(crate) fn error(&self, kind: SyntaxErrorKind) -> LexError {
        LexError::syntax(kind, self.position)
    }

    /// Start a token at the current position.
    fn begin(&self) -> TokenBuilder {
        TokenBuilder::new(self.position)
    }

    /// Consume the next character into `token`. `None` at end of input.
    #[inline]
    fn bump(&mut self, token: &mut TokenBuilder) -> Option<char> {
        let c = self.source.get()?;
        self.position.advance(c);
        token.push(c);
        Some(c)
    }

    /// Consume `expected` or fail.
    fn expect(&mut self, token: &mut TokenBuilder, expected: char) -> Result<char, LexError> {
        match self.current() {
            Some(found) if found == expected => {
                self.bump(token);
                Ok(found)
            }
            Some(found) => Err(self.error(SyntaxErrorKind::ExpectedChar { expected, found })),
            None => Err(self.error(SyntaxErrorKind::UnexpectedEof)),
        }
    }

    /// Consume a character of `class` or fail.
    fn expect_class(
        &mut self,
        token: &mut TokenBuilder,
        class: CharClass,
    ) -> Result<char, LexError> {
        match self.current() {
            Some(found) if class.contains(found) => {
                self.bump(token);
                Ok(found)
            }
            Some(found) => Err(self.error(SyntaxErrorKind::ExpectedClass {
                expected: class,
                found,
            })),
            None => Err(self.error(SyntaxErrorKind::UnexpectedEof)),
        }
    }

    /// Consume each character of `word` in order.
    fn expect_word(&mut self, token: &mut TokenBuilder, word: &str) -> Result<(), LexError> {
        for expected in word.chars() {
            self.expect(token, expected)?;
        }
        Ok(())
    }

    /// Consume one string or comment character, rejecting control characters.
    fn expect_content(&mut self, token: &mut TokenBuilder) -> Result<char, LexError> {
        match self.current() {
            Some(found) if CharClass::Content.contains(found) => {
                self.bump(token);
                Ok(found)
            }
            Some(found) => Err(self.error(SyntaxErrorKind::ControlCharacter { found })),
            None => Err(self.error(SyntaxErrorKind::UnexpectedEof)),
        }
    }

    /// Consume one line ending: `\n` or `\r\n`.
    fn expect_newline(&mut self, token: &mut TokenBuilder) -> Result<(), LexError> {
        if self.current() == Some('\r') {
            self.bump(token);
        }
        self.expect(token, '\n')?;
        Ok(())
    }

    // ─── Trivia ──────────────────────────────────────────────────────────

    /// A run of line endings.
    pub(crate) fn scan_newlines(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();
        self.expect_newline(&mut token)?;
        while matches!(self.current(), Some('\n' | '\r')) {
            self.expect_newline(&mut token)?;
        }
        Ok(token.finish(TokenKind::Newline))
    }

    /// A run of spaces and tabs.
    pub(crate) fn scan_whitespace(&mut self) -> Token {
        let mut token = self.begin();
        while self.current().is_some_and(is_whitespace) {
            self.bump(&mut token);
        }
        token.finish(TokenKind::Whitespace)
    }

    /// `#` through end of line. The line ending is not part of the comment.
    pub(crate) fn scan_comment(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();
        self.expect(&mut token, '#')?;
        while !matches!(self.current(), None | Some('\n' | '\r')) {
            self.expect_content(&mut token)?;
        }
        Ok(token.finish(TokenKind::Comment))
    }

    // ─── Keys & Punctuation ──────────────────────────────────────────────

    /// A bare key. Its value is its own text.
    pub(crate) fn scan_bare_key(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();
        self.expect_class(&mut token, CharClass::BareKey)?;
        while self.current().is_some_and(is_bare_key_char) {
            self.bump(&mut token);
        }
        let name = token.lexeme().to_owned();
        Ok(token.finish_with(TokenKind::Id, TokenValue::String(name)))
    }

    /// A single punctuation character.
    pub(crate) fn scan_char(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();
        if self.bump(&mut token).is_none() {
            return Err(self.error(SyntaxErrorKind::UnexpectedEof));
        }
        Ok(token.finish(TokenKind::Char))
    }

    /// `[[` or `]]` of an array-of-tables header.
    pub(crate) fn scan_array_table(&mut self, kind: TokenKind) -> Result<Token, LexError> {
        let bracket = if kind == TokenKind::ArrayTableOpen {
            '['
        } else {
            ']'
        };
        let mut token = self.begin();
        self.expect(&mut token, bracket)?;
        self.expect(&mut token, bracket)?;
        Ok(token.finish(kind))
    }

    /// `true` or `false`, spelled exactly.
    pub(crate) fn scan_boolean(&mut self) -> Result<Token, LexError> {
        let mut token = self.begin();
        let value = self.current() == Some('t');
        self.expect_word(&mut token, if value { "true" } else { "false" })?;
        Ok(token.finish_with(TokenKind::Boolean, TokenValue::Boolean(value)))
    }
}
