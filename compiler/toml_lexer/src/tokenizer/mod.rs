//! Lookahead tokenizer.
//!
//! [`Tokenizer`] drives the [`Scanner`] and keeps up to `lookahead + 1`
//! scanned tokens in a queue so callers can peek ahead before consuming.
//!
//! # Lexical modes
//!
//! The same characters mean different things on either side of `=`: `true`
//! is a key name before it and a boolean after it. The tokenizer tracks a
//! mode to pick the right reading without backtracking:
//!
//! - `Key`: bare keys, quoted keys, `=`, `.`, `[`, `]`, `[[`, `]]`.
//! - `Value`: literals, and the `[`/`{`/`,`/`]`/`}` of arrays and inline
//!   tables.
//!
//! `=` enters `Value`. `{` and a `,` inside an inline table enter `Key`. A
//! newline returns to `Key`, except inside an array, which may span lines.
//! Whitespace, newlines, comments, and strings are recognized in both modes.
//!
//! # Errors
//!
//! The first syntax error stops scanning. Tokens scanned before it are still
//! delivered; after the queue drains, every call reports that error.

use std::collections::VecDeque;

use smallvec::SmallVec;
use toml_lexer_core::is_bare_key_char;
use tracing::{debug, trace};

use crate::config::TokenizerConfig;
use crate::lex_error::{InternalError, LexError, SyntaxErrorKind};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Lexical mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Nothing scanned yet.
    Init,
    Key,
    Value,
}

/// An open value container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Container {
    Array,
    InlineTable,
}

/// Tokenizer over a character stream.
///
/// Drive it with [`more`](Self::more) and [`next`](Self::next):
///
/// ```
/// use toml_lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::from_source("x = 1");
/// let mut kinds = Vec::new();
/// while tokenizer.more()? {
///     kinds.push(tokenizer.next()?.kind());
/// }
/// assert_eq!(kinds.last(), Some(&TokenKind::Integer));
/// # Ok::<(), toml_lexer::LexError>(())
/// ```
pub struct Tokenizer<I: Iterator<Item = char>> {
    scanner: Scanner<I>,
    config: TokenizerConfig,
    queue: VecDeque<Token>,
    mode: Mode,
    /// Open arrays and inline tables, innermost last.
    containers: SmallVec<[Container; 8]>,
    /// Error that stopped scanning, reported once the queue drains.
    error: Option<LexError>,
}

impl<'a> Tokenizer<std::str::Chars<'a>> {
    /// Tokenize a string with the default configuration.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.chars(), TokenizerConfig::default())
    }
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    /// Create a tokenizer. Nothing is read until the first call to
    /// `more`, `next`, or `peek`.
    pub fn new(chars: I, config: TokenizerConfig) -> Self {
        Self {
            scanner: Scanner::new(chars),
            config,
            queue: VecDeque::new(),
            mode: Mode::Init,
            containers: SmallVec::new(),
            error: None,
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Returns `true` if a token is available.
    ///
    /// Returns the scan error once every token before it has been consumed.
    pub fn more(&mut self) -> Result<bool, LexError> {
        self.prime();
        if !self.queue.is_empty() {
            return Ok(true);
        }
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(false),
        }
    }

    /// Consume the current token.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible; end of input is reported by `more`, not by `None`"
    )]
    pub fn next(&mut self) -> Result<Token, LexError> {
        self.prime();
        let Some(token) = self.queue.pop_front() else {
            return Err(match &self.error {
                Some(err) => err.clone(),
                None => InternalError::NoTokenAvailable.into(),
            });
        };
        self.fill();
        Ok(token)
    }

    /// Look at the token `depth` positions ahead without consuming it.
    /// `peek(0)` is the token `next` would return.
    ///
    /// `depth` beyond the configured lookahead is always out of range.
    pub fn peek(&mut self, depth: usize) -> Result<&Token, LexError> {
        self.prime();
        let available = self.queue.len();
        if depth < self.config.queue_capacity() {
            if let Some(token) = self.queue.get(depth) {
                return Ok(token);
            }
            if let Some(err) = &self.error {
                return Err(err.clone());
            }
        }
        Err(InternalError::PeekOutOfRange { depth, available }.into())
    }

    /// First fill on first use.
    fn prime(&mut self) {
        if self.mode == Mode::Init {
            self.set_mode(Mode::Key);
            self.fill();
        }
    }

    /// Scan until the queue is full, input ends, or an error stops scanning.
    fn fill(&mut self) {
        let capacity = self.config.queue_capacity();
        while self.queue.len() < capacity && self.error.is_none() {
            match self.scan_token() {
                Ok(Some(token)) => {
                    trace!(
                        kind = %token.kind(),
                        line = token.position().line,
                        column = token.position().column,
                        lexeme = token.lexeme(),
                        "token"
                    );
                    self.queue.push_back(token);
                }
                Ok(None) => break,
                Err(err) => {
                    debug!(error = %err, "scan stopped");
                    self.error = Some(err);
                }
            }
        }
    }

    fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(c) = self.scanner.current() else {
            return Ok(None);
        };
        let token = match c {
            '\n' | '\r' => {
                let token = self.scanner.scan_newlines()?;
                if self.innermost() != Some(Container::Array) {
                    self.set_mode(Mode::Key);
                }
                token
            }
            ' ' | '\t' => self.scanner.scan_whitespace(),
            '#' => self.scanner.scan_comment()?,
            '"' | '\'' => self.scanner.scan_string(self.mode == Mode::Key)?,
            _ if self.mode == Mode::Value => self.scan_value(c)?,
            _ => self.scan_key(c)?,
        };
        Ok(Some(token))
    }

    fn scan_key(&mut self, c: char) -> Result<Token, LexError> {
        let top_level = self.containers.is_empty();
        match c {
            _ if is_bare_key_char(c) => self.scanner.scan_bare_key(),
            '=' => {
                let token = self.scanner.scan_char()?;
                self.set_mode(Mode::Value);
                Ok(token)
            }
            '[' if top_level && self.scanner.peek(1) == Some('[') => {
                self.scanner.scan_array_table(TokenKind::ArrayTableOpen)
            }
            ']' if top_level && self.scanner.peek(1) == Some(']') => {
                self.scanner.scan_array_table(TokenKind::ArrayTableClose)
            }
            '.' | '[' | ']' => self.scanner.scan_char(),
            // `{ }` and `{ a = 1, }` close while a key is expected.
            '}' if self.innermost() == Some(Container::InlineTable) => {
                self.close(Container::InlineTable, c)?;
                let token = self.scanner.scan_char()?;
                self.set_mode(Mode::Value);
                Ok(token)
            }
            _ => Err(self.unexpected(c)),
        }
    }

    fn scan_value(&mut self, c: char) -> Result<Token, LexError> {
        match c {
            '[' => {
                self.open(Container::Array)?;
                self.scanner.scan_char()
            }
            '{' => {
                self.open(Container::InlineTable)?;
                let token = self.scanner.scan_char()?;
                self.set_mode(Mode::Key);
                Ok(token)
            }
            ']' => {
                self.close(Container::Array, c)?;
                self.scanner.scan_char()
            }
            '}' => {
                self.close(Container::InlineTable, c)?;
                self.scanner.scan_char()
            }
            ',' => match self.innermost() {
                Some(Container::InlineTable) => {
                    let token = self.scanner.scan_char()?;
                    self.set_mode(Mode::Key);
                    Ok(token)
                }
                Some(Container::Array) => self.scanner.scan_char(),
                None => Err(self.unexpected(c)),
            },
            't' | 'f' => self.scanner.scan_boolean(),
            _ if self.at_date() => self.scanner.scan_date_time(),
            _ if self.at_time() => self.scanner.scan_local_time(),
            _ if c.is_ascii_digit() || matches!(c, '+' | '-' | 'i' | 'n') => {
                self.scanner.scan_number()
            }
            _ => Err(self.unexpected(c)),
        }
    }

    /// Four digits and `-`.
    fn at_date(&mut self) -> bool {
        (0..4).all(|i| self.scanner.peek(i).is_some_and(|c| c.is_ascii_digit()))
            && self.scanner.peek(4) == Some('-')
    }

    /// Two digits and `:`.
    fn at_time(&mut self) -> bool {
        (0..2).all(|i| self.scanner.peek(i).is_some_and(|c| c.is_ascii_digit()))
            && self.scanner.peek(2) == Some(':')
    }

    fn innermost(&self) -> Option<Container> {
        self.containers.last().copied()
    }

    fn open(&mut self, container: Container) -> Result<(), LexError> {
        let limit = self.config.max_nesting;
        if self.containers.len() >= limit {
            return Err(self.scanner.error(SyntaxErrorKind::NestingTooDeep { limit }));
        }
        self.containers.push(container);
        trace!(?container, depth = self.containers.len(), "open");
        Ok(())
    }

    /// Close the innermost container, which must be `container`.
    fn close(&mut self, container: Container, c: char) -> Result<(), LexError> {
        if self.innermost() != Some(container) {
            return Err(self.unexpected(c));
        }
        self.containers.pop();
        trace!(?container, depth = self.containers.len(), "close");
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            trace!(from = ?self.mode, to = ?mode, "mode");
            self.mode = mode;
        }
    }

    fn unexpected(&self, found: char) -> LexError {
        self.scanner.error(SyntaxErrorKind::UnexpectedCharacter { found })
    }
}
