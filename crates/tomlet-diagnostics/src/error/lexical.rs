//! The closed set of lexical error causes.
//!
//! Each variant is pure data carrying just enough to reconstruct its
//! message: the offending character, byte, or literal text. The lexer
//! creates one at the point of detection and it is consumed at format
//! time; variants are never mutated.

use thiserror::Error;

/// Usage text for escape failures: what the escape rules are and how to
/// write a backslash without triggering them.
const ESCAPE_USAGE: &str = r#"
A '\' inside a "-delimited string is interpreted as an escape character.

The following escape sequences are supported:
\b, \t, \n, \f, \r, \", \\, \uXXXX, and \UXXXXXXXX

To prevent a '\' from being recognized as an escape character, use either:

- a '-delimited literal string, where escape characters are not processed; or
- two backslashes to get a single backslash: "\\".
"#;

/// A lexical failure cause.
///
/// This is a closed set: the lexer can fail in exactly these four ways.
/// Callers match on the variant or query [`LexError::usage`]; there is no
/// open hierarchy to downcast from.
///
/// # Example
///
/// ```
/// use tomlet_diagnostics::LexError;
///
/// let cause = LexError::InvalidUtf8 { byte: 0xf8 };
/// assert_eq!(cause.to_string(), "invalid UTF-8 byte: 0xf8");
/// assert!(cause.usage().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// An unrecognized escape sequence in a basic string.
    #[error(r"invalid escape in string '\{ch}'")]
    Escape {
        /// The character following the backslash.
        ch: char,
    },

    /// A byte that is not valid UTF-8.
    #[error("invalid UTF-8 byte: {byte:#04x}")]
    InvalidUtf8 {
        /// The offending byte.
        byte: u8,
    },

    /// A malformed number literal.
    #[error("invalid number: \"{literal}\"")]
    InvalidNumber {
        /// The literal text as it appeared in the source.
        literal: String,
    },

    /// A malformed date or date-time literal.
    #[error("invalid date: \"{literal}\"")]
    InvalidDateTime {
        /// The literal text as it appeared in the source.
        literal: String,
    },
}

impl LexError {
    /// Extended usage text for this cause, when there is one.
    ///
    /// Only [`LexError::Escape`] carries usage text: a fixed explanation
    /// of the supported escape sequences and the quoting alternatives
    /// that avoid escape processing. The other variants return `None`.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            LexError::Escape { .. } => Some(ESCAPE_USAGE),
            LexError::InvalidUtf8 { .. }
            | LexError::InvalidNumber { .. }
            | LexError::InvalidDateTime { .. } => None,
        }
    }
}
