//! Lookahead source over a character stream.
//!
//! Wraps any `Iterator<Item = char>` and exposes consuming reads ([`get`])
//! plus non-consuming peeks at any depth ([`peek`]). Characters pulled from
//! the stream by a peek are held in a FIFO buffer until `get` consumes them.
//!
//! # Invariant
//!
//! The buffer never holds more than `index + 1` characters for the deepest
//! `peek(index)` issued since the last `get`. Nothing is read from the
//! underlying stream unless a caller asked to see it.
//!
//! End-of-input is `None` from both operations. Peeking past the end is
//! well-defined and returns `None` for every index at or beyond it.
//!
//! [`get`]: LookaheadSource::get
//! [`peek`]: LookaheadSource::peek

use std::collections::VecDeque;
use std::iter::Fuse;

/// Character source with arbitrary-depth lookahead.
///
/// The wrapped iterator is fused: once it reports end-of-input, every later
/// read reports end-of-input too, even if the iterator itself would resume.
#[derive(Clone, Debug)]
pub struct LookaheadSource<I: Iterator<Item = char>> {
    /// Underlying stream.
    chars: Fuse<I>,
    /// Characters read from `chars` by `peek` but not yet consumed by `get`.
    buffer: VecDeque<char>,
}

impl<I: Iterator<Item = char>> LookaheadSource<I> {
    /// Wrap a character stream. Nothing is read until the first `get`/`peek`.
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.fuse(),
            buffer: VecDeque::new(),
        }
    }

    /// Consume and return the next character, or `None` at end-of-input.
    ///
    /// Drains the lookahead buffer before touching the stream.
    #[inline]
    pub fn get(&mut self) -> Option<char> {
        match self.buffer.pop_front() {
            Some(c) => Some(c),
            None => self.chars.next(),
        }
    }

    /// Return the character `index` positions ahead without consuming it.
    ///
    /// `peek(0)` is the character the next [`get`](Self::get) will return.
    /// Pulls from the stream only as far as needed to satisfy `index`.
    pub fn peek(&mut self, index: usize) -> Option<char> {
        while self.buffer.len() <= index {
            let c = self.chars.next()?;
            self.buffer.push_back(c);
        }
        self.buffer.get(index).copied()
    }

    /// Returns `true` if the upcoming characters spell `expected` exactly.
    ///
    /// Consumes nothing. An empty `expected` always matches.
    pub fn starts_with(&mut self, expected: &str) -> bool {
        expected
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek(i) == Some(c))
    }

    /// Returns `true` if no characters remain.
    pub fn is_eof(&mut self) -> bool {
        self.peek(0).is_none()
    }

    /// Number of characters currently held in the lookahead buffer.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl<I: Iterator<Item = char>> Iterator for LookaheadSource<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.get()
    }
}
