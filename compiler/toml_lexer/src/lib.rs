//! TOML tokenizer.
//!
//! Turns TOML source into a lazily produced sequence of typed [`Token`]s
//! for a parser to consume. Each token carries its kind, its decoded value
//! (integers, floats, booleans, strings, dates and times, key names), the
//! exact source text it came from, and its line/column.
//!
//! The tokenizer stops at tokens. It does not build tables, resolve dotted
//! keys, or check for duplicate keys, and it accepts calendrically invalid
//! dates.
//!
//! # Architecture
//!
//! - `toml_lexer_core`: lookahead character source, character classes,
//!   positions.
//! - `scanner`: one submodule per literal family
//!   (numbers, dates and times, strings).
//! - [`Tokenizer`]: lexical modes, container nesting, and the bounded token
//!   queue behind `more`/`next`/`peek`.
//!
//! # Example
//!
//! ```
//! use toml_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("answer = 0x2a")?;
//! let value = tokens.iter().find(|t| t.kind() == TokenKind::Integer);
//! assert_eq!(value.and_then(|t| t.as_integer()), Some(42));
//! # Ok::<(), toml_lexer::LexError>(())
//! ```

mod config;
mod date_time;
mod lex_error;
mod parse_helpers;
mod scanner;
mod token;
mod tokenizer;

pub use config::{TokenizerConfig, DEFAULT_LOOKAHEAD, DEFAULT_MAX_NESTING};
pub use date_time::{Date, DateTime, Offset, Time};
pub use lex_error::{InternalError, LexError, SyntaxErrorKind};
pub use token::{Token, TokenKind, TokenValue};
pub use tokenizer::Tokenizer;
pub use toml_lexer_core::{CharClass, Position};

/// Tokenize a whole document with the default configuration.
///
/// Stops at the first syntax error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::from_source(source);
    let mut tokens = Vec::new();
    while tokenizer.more()? {
        tokens.push(tokenizer.next()?);
    }
    Ok(tokens)
}
