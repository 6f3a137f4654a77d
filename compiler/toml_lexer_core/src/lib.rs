//! Standalone character-level layer for the TOML lexer.
//!
//! This crate has no `toml_*` dependencies. It provides:
//!
//! - [`LookaheadSource`]: consuming reads plus arbitrary-depth peeks over any
//!   `Iterator<Item = char>`, buffering only what has been peeked.
//! - [`CharClass`]: the named character classes the scanner expects at each
//!   step (digits of each base, bare-key characters, string content, ...).
//! - [`Position`]: the 1-based line/column counter attached to tokens and
//!   syntax errors.
//!
//! The token model and the scanners live in `toml_lexer`.

mod char_class;
mod lookahead;
mod position;

pub use char_class::{is_bare_key_char, is_content_char, is_whitespace, CharClass};
pub use lookahead::LookaheadSource;
pub use position::Position;
