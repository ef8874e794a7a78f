// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sample() -> SyntaxError {
    SyntaxError::new(
        "Expected \"fi\" but end of input found.".to_string(),
        "if a; then b\n",
        12,
        ErrorStyle::Context,
    )
}

#[test]
fn position_is_resolved_from_offset() {
    let err = sample();
    assert_eq!(err.line(), 1);
    assert_eq!(err.column(), 13);
    assert_eq!(err.offset(), 12);
    assert_eq!(err.input(), "if a; then b\n");
}

#[test]
fn context_style_renders_caret() {
    let err = sample();
    assert_eq!(
        err.to_string(),
        "Expected \"fi\" but end of input found.\nif a; then b\n            ^"
    );
}

#[test]
fn bare_style_renders_message_only() {
    let err = sample().bare();
    assert_eq!(err.style(), ErrorStyle::Bare);
    assert_eq!(err.to_string(), "Expected \"fi\" but end of input found.");
    // Explicit renderings ignore the style.
    assert!(err.context().ends_with('^'));
}

#[test]
fn diagnostic_has_location_header() {
    let diag = sample().diagnostic();
    assert!(diag.starts_with("error: Expected \"fi\""));
    assert!(diag.contains("--> line 1, column 13"));
}

#[test]
fn parse_error_wraps_syntax_error() {
    let err = ParseError::from(sample());
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((1, 13)));
    assert_eq!(err.to_string(), sample().to_string());

    let bare = err.with_style(ErrorStyle::Bare);
    assert_eq!(bare.to_string(), "Expected \"fi\" but end of input found.");
}

#[yare::parameterized(
    heredoc = { ParseError::HeredocUnsupported { line: 2, column: 5 }, Some((2, 5)), "here-documents are not supported (line 2, column 5)" },
    too_long = { ParseError::InputTooLong { len: 10, max: 4 }, None, "input is 10 bytes, exceeding the limit of 4" },
    too_deep = { ParseError::NestingTooDeep { max: 64 }, None, "nesting exceeds the limit of 64 levels" },
)]
fn non_syntax_errors(err: ParseError, position: Option<(usize, usize)>, message: &str) {
    assert!(!err.is_syntax());
    assert_eq!(err.position(), position);
    assert_eq!(err.to_string(), message);
    assert_eq!(err.clone().with_style(ErrorStyle::Bare), err);
}

#[test]
fn error_style_deserializes_snake_case() {
    let style: ErrorStyle = serde_json::from_str("\"bare\"").unwrap();
    assert_eq!(style, ErrorStyle::Bare);
    assert_eq!(ErrorStyle::default(), ErrorStyle::Context);
}
