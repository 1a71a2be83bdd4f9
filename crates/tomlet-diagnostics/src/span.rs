//! Source spans and positions for error reporting.
//!
//! All offsets are measured in raw bytes of the source text, not
//! characters or codepoints. The lexer tracks line numbers itself, so a
//! [`Position`] pairs a 1-based line number with a byte [`Span`]; the
//! in-line column is derived at rendering time by [`resolve_column`].

use std::fmt;

/// A byte span in source text.
///
/// Spans identify the exact bytes implicated by an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A located failure: a 1-based line number plus the byte span of the
/// offending text.
///
/// The line number comes from the lexer, which counts `\n` characters as
/// it scans; it is consistent with counting the newlines before
/// `span.start()` plus one. When the full input is known,
/// `span.start() + span.len()` never exceeds the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    line: usize,
    span: Span,
}

impl Position {
    /// Create a position from a 1-based line number and a byte span.
    pub fn new(line: usize, span: Span) -> Self {
        Self { line, span }
    }

    /// The 1-based line number of the offending span.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The byte span of the offending text.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

/// Resolve the in-line byte column of `start`, given the input already
/// split on `\n`.
///
/// Walks the lines accumulating a running byte offset: a line of length
/// `L` owns bytes `[pos, pos + L]`, plus one byte for the newline the
/// split removed. An offset exactly on a line boundary belongs to the
/// line that starts there, and an offset past the end of the input
/// clamps to the end of the last line.
pub(crate) fn resolve_column(lines: &[&str], start: usize) -> usize {
    let mut pos = 0;
    for line in lines {
        let ll = line.len() + 1; // +1 for the removed newline
        if pos + ll > start {
            return start.saturating_sub(pos);
        }
        pos += ll;
    }
    lines.last().map_or(0, |line| line.len())
}
