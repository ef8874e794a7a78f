// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error positions, messages, and limits.

use super::*;
use crate::config::DEFAULT_MAX_INPUT_LEN;
use crate::parse_error::ErrorStyle;

#[test]
fn unterminated_double_quote_points_at_end_of_input() {
    let err = syntax_err("echo \"unterminated");
    assert_eq!((err.line(), err.column()), (1, 19));
    assert_eq!(err.offset(), 18);
    assert_eq!(
        err.message(),
        r#"Expected "\"", "$", "\\", "`" or [^"\\`$] but end of input found."#
    );
}

#[test]
fn unterminated_single_quote() {
    let err = syntax_err("echo 'x");
    assert_eq!(err.message(), r#"Expected "'" or [^'] but end of input found."#);
    assert_eq!(
        err.to_string(),
        "Expected \"'\" or [^'] but end of input found.\necho 'x\n       ^"
    );
}

#[test]
fn lone_dollar_explains_how_to_write_it() {
    let err = syntax_err(r#"echo "cost: $""#);
    assert_eq!(err.column(), 14);
    assert_eq!(
        err.message(),
        r#"Expected "(", "{", name or parameter (a literal "$" must be escaped as "\$" or single-quoted) but "\"" found."#
    );
}

#[test]
fn error_points_at_rightmost_failure() {
    // The `fi` is missing; every alternative gets as far as the end.
    let err = syntax_err("if true; then echo x");
    assert_eq!((err.line(), err.column()), (1, 21));
    assert!(err.message().contains(r#""fi""#), "{}", err.message());
}

#[yare::parameterized(
    stray_paren       = { "echo )", 1, 6 },
    second_line       = { "echo a\necho )", 2, 6 },
    double_semicolon  = { "a;;", 1, 2 },
    leading_pipe      = { "| a", 1, 1 },
    dangling_and      = { "a &&", 1, 5 },
)]
fn error_positions(input: &str, line: usize, column: usize) {
    let err = syntax_err(input);
    assert_eq!((err.line(), err.column()), (line, column), "{}", err.message());
}

#[test]
fn unexpected_character_is_reported() {
    let err = syntax_err("echo )");
    assert!(err.message().ends_with(r#"but ")" found."#), "{}", err.message());
    assert!(err.message().contains("end of input"));
}

#[test]
fn error_keeps_input() {
    let err = syntax_err("echo a\necho )");
    assert_eq!(err.input(), "echo a\necho )");
    assert_eq!(err.context(), format!("{}\necho )\n     ^", err.message()));
}

#[test]
fn bare_style_from_config() {
    let config = ParserConfig::default().error_style(ErrorStyle::Bare);
    let err = Parser::parse_with_config("echo )", &config).unwrap_err();
    let ParseError::Syntax(syntax) = &err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert_eq!(err.to_string(), syntax.message());
}

#[test]
fn input_limit_is_checked_first() {
    let config = ParserConfig::default().max_input_len(4);
    assert_eq!(
        Parser::parse_with_config("echo hello", &config),
        Err(ParseError::InputTooLong { len: 10, max: 4 })
    );
    assert!(Parser::parse_with_config("echo", &config).is_ok());
}

#[test]
fn default_input_limit() {
    let input = "a".repeat(DEFAULT_MAX_INPUT_LEN + 1);
    assert!(matches!(
        Parser::parse(&input),
        Err(ParseError::InputTooLong { .. })
    ));
}
