// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    start_of_input   = { "echo hi", 0, 1, 1, "echo hi" },
    mid_line         = { "echo hi", 5, 1, 6, "echo hi" },
    end_of_input     = { "echo hi", 7, 1, 8, "echo hi" },
    second_line      = { "a\nbcd", 3, 2, 2, "bcd" },
    at_newline       = { "ab\ncd", 2, 1, 3, "ab" },
    past_end_clamped = { "ab", 99, 1, 3, "ab" },
    trailing_newline = { "ab\n", 3, 2, 1, "" },
)]
fn locate_offsets(source: &str, offset: usize, line: usize, column: usize, content: &str) {
    let loc = locate(source, offset);
    assert_eq!(loc.line, line);
    assert_eq!(loc.column, column);
    assert_eq!(loc.line_content, content);
}

#[test]
fn locate_counts_characters_not_bytes() {
    // "é" is two bytes
    let loc = locate("é x", 3);
    assert_eq!(loc.column, 3);
}

#[test]
fn caret_context_points_at_column() {
    assert_eq!(caret_context("echo | | bad", 7), "echo | | bad\n       ^");
}

#[test]
fn caret_context_uses_failing_line_only() {
    assert_eq!(caret_context("ok\nfi oops", 3), "fi oops\n^");
}

#[test]
fn diagnostic_includes_line_and_column() {
    let diag = diagnostic_context("echo | | bad", 7, "unexpected '|'");
    assert!(diag.contains("error: unexpected '|'"));
    assert!(diag.contains("line 1, column 8"));
    assert!(diag.contains("  1 | echo | | bad"));
    assert!(diag.ends_with("   |        ^"));
}
