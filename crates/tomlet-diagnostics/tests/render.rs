use tomlet_diagnostics::{LexError, ParseError, Position, Span};

#[test]
fn test_mixed_array_report() {
    let input = "arrays-and-ints =  [1, [\"x\"]]\n";
    let err = ParseError::new(
        "Array contains values of type 'Integer' and 'Array', but arrays must be homogeneous.",
        Position::new(1, Span::new(19..32)),
    )
    .with_last_key("arrays-and-ints")
    .with_input(input);

    assert_eq!(
        err.to_string(),
        "toml: line 1 (last key parsed 'arrays-and-ints'): Array contains values of type \
         'Integer' and 'Array', but arrays must be homogeneous."
    );

    let report = err.extended();
    assert!(report.contains("At line 1, column 19-32:\n"));
    assert!(report.contains("      1 | arrays-and-ints =  [1, [\"x\"]]\n"));

    // The caret row starts at byte column 19 and spans 13 characters.
    let caret_row = format!("{}{}", " ".repeat(10 + 19), "^".repeat(13));
    assert!(report.contains(&format!("[\"x\"]]\n{caret_row}\n")));
}

#[test]
fn test_failure_on_third_line_shows_two_context_lines() {
    let input = "a = 1\nb = 2\nc = ???\n";
    let err = ParseError::new("expected a value", Position::new(3, Span::new(16..19)))
        .with_last_key("b")
        .with_input(input);

    let report = err.extended();
    assert!(report.contains("      1 | a = 1\n      2 | b = 2\n      3 | c = ???\n"));
    assert_eq!(report.matches(" | ").count(), 3);
}

#[test]
fn test_failure_on_fifth_line_still_shows_only_two_context_lines() {
    let input = "a = 1\nb = 2\nc = 3\nd = 4\ne = ???\n";
    let err = ParseError::new("expected a value", Position::new(5, Span::new(28..31)))
        .with_last_key("d")
        .with_input(input);

    let report = err.extended();
    assert!(!report.contains("      1 |"));
    assert!(!report.contains("      2 |"));
    assert!(report.contains("      3 | c = 3\n      4 | d = 4\n      5 | e = ???\n"));
}

#[test]
fn test_failure_on_first_line_shows_no_context_lines() {
    let input = "a = ???\nb = 2\nc = 3\n";
    let err =
        ParseError::new("expected a value", Position::new(1, Span::new(4..7))).with_input(input);

    let report = err.extended();
    assert_eq!(report.matches(" | ").count(), 1);
    assert!(report.contains("      1 | a = ???\n"));
}

#[test]
fn test_escape_cause_supplies_message_and_usage() {
    let input = "x = \"a\\q\"\n";
    let err = ParseError::from_cause(
        LexError::Escape { ch: 'q' },
        Position::new(1, Span::new(6..8)),
    )
    .with_input(input);

    assert!(err.to_string().ends_with(r"invalid escape in string '\q'"));

    let report = err.extended_with_usage();
    assert!(report.contains("error: invalid escape in string '\\q'\n"));
    // The usage block follows the caret row after a blank line.
    assert!(report.contains("^^\n\nA '\\' inside"));
    assert!(report.contains("The following escape sequences are supported:"));
    assert!(report.ends_with("two backslashes to get a single backslash: \"\\\\\".\n"));
}

#[test]
fn test_extended_without_usage_has_no_appendix() {
    let input = "x = \"a\\q\"\n";
    let err = ParseError::from_cause(
        LexError::Escape { ch: 'q' },
        Position::new(1, Span::new(6..8)),
    )
    .with_input(input);

    let report = err.extended();
    assert!(!report.contains("escape sequences"));
    assert!(report.ends_with("^^\n"));
}

#[test]
fn test_zero_length_span_renders_one_caret() {
    let input = "x = \n";
    let err =
        ParseError::new("expected a value", Position::new(1, Span::new(4..4))).with_input(input);

    let report = err.extended();
    assert!(report.contains("At line 1, column 4-4:\n"));
    assert_eq!(report.matches('^').count(), 1);
}

#[test]
fn test_extended_without_input_equals_short_message() {
    let err = ParseError::new("expected a value", Position::new(2, Span::new(8..9)))
        .with_last_key("a");

    assert_eq!(err.extended(), err.to_string());
    assert_eq!(err.extended_with_usage(), err.to_string());
}

#[test]
fn test_extended_is_idempotent() {
    let input = "a = 1\nb = ???\n";
    let err = ParseError::new("expected a value", Position::new(2, Span::new(10..13)))
        .with_last_key("a")
        .with_input(input);

    assert_eq!(err.extended(), err.extended());
    assert_eq!(err.extended_with_usage(), err.extended_with_usage());
}

#[test]
fn test_caret_past_end_of_line_does_not_panic() {
    let input = "a = 1\nb = \"open";
    let err = ParseError::new("unterminated string", Position::new(2, Span::new(15..15)))
        .with_last_key("a")
        .with_input(input);

    let report = err.extended();
    assert!(report.contains("At line 2, column 9-9:\n"));
    assert!(report.contains("      2 | b = \"open\n"));
}

#[test]
fn test_line_beyond_input_clamps_to_last_line() {
    let input = "a = 1\nb = 2";
    let err = ParseError::new("unexpected end of input", Position::new(7, Span::new(11..11)))
        .with_input(input);

    let report = err.extended();
    assert!(report.contains("At line 2, column 5-5:\n"));
    assert!(report.contains("      2 | b = 2\n"));
}

#[test]
fn test_lexical_cause_is_error_source() {
    use std::error::Error as _;

    let err = ParseError::from_cause(
        LexError::InvalidNumber {
            literal: "0x_1".to_string(),
        },
        Position::new(1, Span::new(4..8)),
    );

    assert_eq!(err.to_string(), "toml: line 1: invalid number: \"0x_1\"");
    let source = err.source().expect("cause should be exposed as source");
    assert_eq!(source.to_string(), "invalid number: \"0x_1\"");
}
