// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn single_expectation_at_end_of_input() {
    let msg = failure_message(&[Expected::Literal("fi")], "if true; then x", 15);
    assert_eq!(msg, r#"Expected "fi" but end of input found."#);
}

#[test]
fn expectations_sorted_and_deduplicated() {
    let msg = failure_message(
        &[
            Expected::Literal(")"),
            NEWLINE,
            Expected::Literal(";"),
            Expected::Literal(")"),
        ],
        "(a b",
        4,
    );
    assert_eq!(msg, r#"Expected ")", ";" or newline but end of input found."#);
}

#[test]
fn found_character_is_quoted() {
    let msg = failure_message(&[Expected::EndOfInput], "a ) b", 2);
    assert_eq!(msg, r#"Expected end of input but ")" found."#);
}

#[test]
fn literal_quotes_are_escaped() {
    let msg = failure_message(&[Expected::Literal("\"")], "\"x", 2);
    assert_eq!(msg, r#"Expected "\"" but end of input found."#);
}

#[test]
fn no_expectations() {
    let msg = failure_message(&[], "", 0);
    assert_eq!(msg, "Expected valid input but end of input found.");
}
