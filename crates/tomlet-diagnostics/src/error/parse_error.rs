//! The ParseError type carrying a located parse failure.
//!
//! [`ParseError`] aggregates everything needed to report a failure: the
//! message, the byte span of the offending text, the last successfully
//! parsed key, the optional lexical cause, and the full original input
//! for the extended rendering.

use std::fmt;

use log::debug;

use crate::{
    error::{LexError, render},
    span::Position,
};

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for a TOML parsing failure.
///
/// The parser constructs one of these per failure and aborts. A value is
/// immutable once built: the two renderings, `Display` (short form) and
/// [`ParseError::extended`] (annotated snippet), are pure functions of
/// the stored state.
///
/// For structural failures (duplicate key, malformed table header, and
/// so on) the message carries the text. For lexical failures, construct
/// with [`ParseError::from_cause`] and the [`LexError`] supplies the
/// text instead; the message and the cause are never both absent.
///
/// # Example
///
/// ```
/// use tomlet_diagnostics::{ParseError, Position, Span};
///
/// let err = ParseError::new(
///     "duplicate key 'title'",
///     Position::new(4, Span::new(31..36)),
/// )
/// .with_last_key("title");
///
/// assert_eq!(
///     err.to_string(),
///     "toml: line 4 (last key parsed 'title'): duplicate key 'title'",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ParseError {
    message: String,
    position: Position,
    last_key: String,
    cause: Option<LexError>,
    input: String,
}

impl ParseError {
    /// Create a structural parse error with a message.
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
            last_key: String::new(),
            cause: None,
            input: String::new(),
        }
    }

    /// Create a lexical parse error from its cause.
    ///
    /// The message text is supplied by the cause.
    pub fn from_cause(cause: LexError, position: Position) -> Self {
        Self {
            message: String::new(),
            position,
            last_key: String::new(),
            cause: Some(cause),
            input: String::new(),
        }
    }

    /// Attach the complete original input.
    ///
    /// The input must be the full source text, never a truncated portion:
    /// the extended rendering slices it into display lines by byte
    /// offset. Without it, the extended rendering falls back to the
    /// short message.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Attach the dotted path of the last fully parsed key.
    pub fn with_last_key(mut self, last_key: impl Into<String>) -> Self {
        self.last_key = last_key.into();
        self
    }

    /// Get the structural message. Empty when the cause supplies the text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the position of the failure.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the last fully parsed key. Empty when the failure occurred
    /// before any key was recognized.
    pub fn last_key(&self) -> &str {
        &self.last_key
    }

    /// Get the lexical cause, if any.
    pub fn cause(&self) -> Option<&LexError> {
        self.cause.as_ref()
    }

    /// Get the original input. Empty when it was not available.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Render the extended multi-line report.
    ///
    /// The report shows the offending line with a caret row under the
    /// exact span, preceded by up to two lines of context. When no input
    /// is attached this returns exactly the short message; it never
    /// panics on out-of-range positions, which are clamped instead.
    pub fn extended(&self) -> String {
        if self.input.is_empty() {
            debug!(line = self.position.line(); "no source text attached; rendering short form");
            return self.to_string();
        }
        render::snippet(self)
    }

    /// Render the extended report, followed by the cause's usage text.
    ///
    /// When the cause exposes usage text (see [`LexError::usage`]), it is
    /// appended after the snippet, separated by a blank line. Degrades
    /// the same way as [`ParseError::extended`] when no input is
    /// attached.
    pub fn extended_with_usage(&self) -> String {
        let mut out = self.extended();
        if !self.input.is_empty() {
            if let Some(usage) = self.cause.as_ref().and_then(LexError::usage) {
                out.push('\n');
                out.push_str(usage.trim());
                out.push('\n');
            }
        }
        out
    }

    /// The message text: the structural message when present, otherwise
    /// the cause's own message.
    pub(crate) fn message_text(&self) -> String {
        if !self.message.is_empty() {
            self.message.clone()
        } else if let Some(cause) = &self.cause {
            cause.to_string()
        } else {
            String::new()
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.last_key.is_empty() {
            write!(f, "toml: {}: {}", self.position, self.message_text())
        } else {
            write!(
                f,
                "toml: {} (last key parsed '{}'): {}",
                self.position,
                self.last_key,
                self.message_text()
            )
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
