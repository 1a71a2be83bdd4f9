//! Error reporting for TOML parsing failures.
//!
//! This module provides the error types produced when parsing fails:
//!
//! - [`ParseError`] carries the failure message, its position in the
//!   source, the last successfully parsed key, and the original input.
//! - [`LexError`] is the closed set of lexical failure causes (bad string
//!   escapes, invalid UTF-8, malformed number and date-time literals).
//!
//! # Overview
//!
//! The parser constructs exactly one [`ParseError`] per failure and stops;
//! errors are never accumulated. The error's `Display` implementation is a
//! short one-line message, and [`ParseError::extended`] and
//! [`ParseError::extended_with_usage`] produce a multi-line annotated
//! snippet of the offending source line. Rendering is a pure computation
//! over the stored state, so the same error renders identically every
//! time and can be shared across threads freely.
//!
//! # Example
//!
//! ```
//! use tomlet_diagnostics::{ParseError, Position, Span};
//!
//! let input = "key = \"value\nother = 1\n";
//! let err = ParseError::new(
//!     "strings cannot contain newlines",
//!     Position::new(1, Span::new(12..13)),
//! )
//! .with_last_key("key")
//! .with_input(input);
//!
//! assert_eq!(
//!     err.to_string(),
//!     "toml: line 1 (last key parsed 'key'): strings cannot contain newlines",
//! );
//! ```

mod lexical;
mod parse_error;
mod render;

pub use lexical::LexError;
pub use parse_error::{ParseError, Result};
