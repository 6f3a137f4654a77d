//! Source positions.

use std::fmt;

/// 1-based line and column in the source text.
///
/// Columns count characters, not bytes. Consuming `\n` moves to column 1 of
/// the next line; every other character advances the column by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Position {
    /// First character of the source.
    pub const START: Self = Self { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Advance past `c`.
    #[inline]
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_one() {
        assert_eq!(Position::default(), Position::new(1, 1));
    }

    #[test]
    fn newline_resets_column() {
        let mut pos = Position::START;
        for c in "ab\ncd".chars() {
            pos.advance(c);
        }
        assert_eq!(pos, Position::new(2, 3));
    }

    #[test]
    fn carriage_return_is_an_ordinary_column() {
        let mut pos = Position::START;
        pos.advance('\r');
        assert_eq!(pos, Position::new(1, 2));
        pos.advance('\n');
        assert_eq!(pos, Position::new(2, 1));
    }

    #[test]
    fn columns_count_chars() {
        let mut pos = Position::START;
        for c in "λλ".chars() {
            pos.advance(c);
        }
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn display_is_line_colon_column() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }
}
