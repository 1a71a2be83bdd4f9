//! # Tomlet Diagnostics
//!
//! Diagnostic reporting for the Tomlet TOML parser. This crate turns a
//! located parse failure into user-facing text: a short one-line message,
//! and an extended multi-line report showing the offending source line
//! with a caret underline and up to two lines of leading context.
//!
//! The tokenizer and grammar live in the parser crates; this crate only
//! deals with what happens after a failure has been located. The parser
//! hands over a message (or a lexical [`LexError`] cause), a [`Position`]
//! carrying the byte span of the offending text, the last fully parsed
//! key, and the complete original input.
//!
//! ## Usage
//!
//! ```
//! use tomlet_diagnostics::{LexError, ParseError, Position, Span};
//!
//! let input = "title = \"TOML example\\q\"\n";
//! let err = ParseError::from_cause(
//!     LexError::Escape { ch: 'q' },
//!     Position::new(1, Span::new(21..23)),
//! )
//! .with_last_key("title")
//! .with_input(input);
//!
//! // Short form, for log lines and `Result` chains:
//! assert_eq!(
//!     err.to_string(),
//!     r"toml: line 1 (last key parsed 'title'): invalid escape in string '\q'",
//! );
//!
//! // Extended form, for terminals that can show multi-line reports:
//! println!("{}", err.extended_with_usage());
//! ```
//!
//! Columns in the extended report are byte offsets within the line, not
//! display columns. For non-ASCII text the caret row therefore aligns in
//! byte terms only; this matches the positions the lexer reports and is
//! kept as-is.

mod error;
mod span;

pub use error::{LexError, ParseError, Result};
pub use span::{Position, Span};
