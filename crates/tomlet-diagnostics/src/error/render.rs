//! Extended rendering of parse errors as annotated source snippets.
//!
//! The report has a fixed line-oriented shape: a message header, a
//! location line, up to two lines of leading context, the offending line
//! behind a right-aligned line-number gutter, and a caret row under the
//! offending span. Rendering never fails; degenerate positions are
//! clamped rather than reported as secondary errors.
//!
//! ```text
//! error: expected a value
//!
//! At line 3, column 4-5:
//!
//!       1 | x = 1
//!       2 | y = 2
//!       3 | z = @
//!               ^
//! ```

use crate::{error::ParseError, span::resolve_column};

/// Width of the line-number gutter, excluding the ` | ` separator.
const GUTTER_WIDTH: usize = 7;

/// Render the annotated snippet for `err`.
///
/// The caller guarantees the error has input attached.
pub(crate) fn snippet(err: &ParseError) -> String {
    let lines: Vec<&str> = err.input().split('\n').collect();

    // The lexer's line number is trusted but clamped, so a position at
    // the very end of the input (an in-progress multi-line token) cannot
    // index past the last line.
    let line = err.position().line().clamp(1, lines.len());
    let col = resolve_column(&lines, err.position().span().start());
    let len = err.position().span().len();

    let mut out = String::new();
    out.push_str(&format!("error: {}\n\n", err.message_text()));
    out.push_str(&format!("At line {line}, column {col}-{}:\n\n", col + len));

    if line > 2 {
        out.push_str(&gutter_line(line - 2, lines[line - 3]));
    }
    if line > 1 {
        out.push_str(&gutter_line(line - 1, lines[line - 2]));
    }
    out.push_str(&gutter_line(line, lines[line - 1]));

    // At least one caret, even for a zero-length span.
    out.push_str(&" ".repeat(GUTTER_WIDTH + 3 + col));
    out.push_str(&"^".repeat(len.max(1)));
    out.push('\n');
    out
}

/// Format one source line behind its right-aligned line-number gutter.
///
/// The line text is written verbatim, with no re-escaping.
fn gutter_line(number: usize, text: &str) -> String {
    format!("{number:>width$} | {text}\n", width = GUTTER_WIDTH)
}
