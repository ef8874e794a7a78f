// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lists, and-or chains, pipelines, and simple commands.

use super::*;

// =============================================================================
// Program
// =============================================================================

#[yare::parameterized(
    empty       = { "" },
    blanks      = { "   " },
    newlines    = { "\n\n" },
    comment     = { "# nothing here" },
    mixed       = { "  \n # note\n\t\n" },
)]
fn blank_input_yields_empty_program(input: &str) {
    assert_eq!(program(input).dump(), "<program></program>");
}

#[test]
fn single_command() {
    assert_eq!(
        program("echo hello").dump(),
        format!(
            "<program><complete_command>{}</complete_command></program>",
            simple(&["echo", "hello"])
        )
    );
}

#[test]
fn newline_separates_complete_commands() {
    let root = program("\na\n\nb\n");
    let kinds: Vec<NodeKind> = root.children().map(Node::kind).collect();
    assert_eq!(kinds, [NodeKind::CompleteCommand, NodeKind::CompleteCommand]);
}

#[test]
fn trailing_comment_is_skipped() {
    assert_eq!(dump("echo hi # a comment"), simple(&["echo", "hi"]));
}

#[test]
fn line_continuation_between_words() {
    assert_eq!(dump("echo \\\n hi"), simple(&["echo", "hi"]));
}

// =============================================================================
// Lists and background
// =============================================================================

#[test]
fn semicolon_list() {
    assert_eq!(
        dump("a; b"),
        format!("<list>{}{}</list>", simple(&["a"]), simple(&["b"]))
    );
}

#[test]
fn trailing_semicolon_is_not_a_list() {
    assert_eq!(dump("a;"), simple(&["a"]));
}

#[test]
fn trailing_ampersand_backgrounds_single_term() {
    assert_eq!(
        dump("sleep 1 &"),
        format!("<background>{}</background>", simple(&["sleep", "1"]))
    );
}

#[test]
fn ampersand_separator_backgrounds_preceding_term() {
    assert_eq!(
        dump("a & b"),
        format!(
            "<list><background>{}</background>{}</list>",
            simple(&["a"]),
            simple(&["b"])
        )
    );
}

// =============================================================================
// And-or chains
// =============================================================================

#[test]
fn and_or_is_left_associative() {
    assert_eq!(
        dump("a && b || c"),
        format!(
            "<or_if><and_if>{}{}</and_if>{}</or_if>",
            simple(&["a"]),
            simple(&["b"]),
            simple(&["c"])
        )
    );
}

#[test]
fn newline_allowed_after_and_if() {
    assert_eq!(
        dump("a &&\n  b"),
        format!("<and_if>{}{}</and_if>", simple(&["a"]), simple(&["b"]))
    );
}

// =============================================================================
// Pipelines
// =============================================================================

#[test]
fn single_stage_is_not_a_pipeline() {
    assert_eq!(command("ls").kind(), NodeKind::SimpleCommand);
}

#[test]
fn three_stage_pipeline() {
    assert_eq!(
        dump("a | b |\n c"),
        format!(
            "<pipeline>{}{}{}</pipeline>",
            simple(&["a"]),
            simple(&["b"]),
            simple(&["c"])
        )
    );
}

#[test]
fn bang_wraps_pipeline() {
    assert_eq!(
        dump("! a | b"),
        format!(
            "<bang><pipeline>{}{}</pipeline></bang>",
            simple(&["a"]),
            simple(&["b"])
        )
    );
}

#[test]
fn bang_must_be_delimited() {
    assert_eq!(dump("!a"), simple(&["!a"]));
}

// =============================================================================
// Simple commands
// =============================================================================

#[test]
fn assignment_only() {
    assert_eq!(
        dump("FOO=bar"),
        format!(
            "<simple_command><cmd_prefix><assignment>FOO{}</assignment></cmd_prefix></simple_command>",
            lit("bar")
        )
    );
}

#[test]
fn assignment_with_empty_value() {
    assert_eq!(
        dump("FOO= env"),
        format!(
            "<simple_command><cmd_prefix><assignment>FOO<word></word></assignment></cmd_prefix>{}</simple_command>",
            lit("env")
        )
    );
}

#[test]
fn assignment_prefix_before_command_word() {
    assert_eq!(
        dump("A=1 B=2 env"),
        format!(
            "<simple_command><cmd_prefix><assignment>A{}</assignment><assignment>B{}</assignment></cmd_prefix>{}</simple_command>",
            lit("1"),
            lit("2"),
            lit("env")
        )
    );
}

#[test]
fn assignment_after_command_word_is_an_argument() {
    assert_eq!(dump("env A=1"), simple(&["env", "A=1"]));
}

#[yare::parameterized(
    keyword_argument = { "echo if then fi", &["echo", "if", "then", "fi"] },
    keyword_prefix   = { "done_thing", &["done_thing"] },
    keyword_suffix   = { "iffy", &["iffy"] },
    braces_in_word   = { "echo {a,b}", &["echo", "{a,b}"] },
    closing_brace    = { "echo }", &["echo", "}"] },
)]
fn reserved_words_only_matter_in_command_position(input: &str, words: &[&str]) {
    assert_eq!(dump(input), simple(words));
}

#[yare::parameterized(
    then_alone = { "then" },
    fi_alone   = { "fi" },
    done_alone = { "done" },
    esac_alone = { "esac" },
)]
fn reserved_word_cannot_be_command_name(input: &str) {
    assert!(parse_err(input).is_syntax());
}

// =============================================================================
// Function definitions
// =============================================================================

#[test]
fn function_definition() {
    assert_eq!(
        dump("greet() { echo hi; }"),
        format!(
            "<function_definition><function_name>greet</function_name><brace_group>{}</brace_group></function_definition>",
            simple(&["echo", "hi"])
        )
    );
}

#[test]
fn function_body_on_next_line() {
    assert_eq!(
        dump("f ( )\n(ls)"),
        format!(
            "<function_definition><function_name>f</function_name><subshell>{}</subshell></function_definition>",
            simple(&["ls"])
        )
    );
}

#[test]
fn function_body_redirect() {
    assert_eq!(
        dump("f() { :; } > log"),
        format!(
            "<function_definition><function_name>f</function_name><brace_group>{}<io_redirect><output>{}</output></io_redirect></brace_group></function_definition>",
            simple(&[":"]),
            lit("log")
        )
    );
}

#[test]
fn function_body_must_be_compound() {
    assert!(parse_err("f() echo hi").is_syntax());
}

// =============================================================================
// Memoization and engine state
// =============================================================================

#[test]
fn repeated_parses_are_identical() {
    let input = "a && b | c; (d) & e > f";
    assert_eq!(program(input), program(input));
}

#[test]
fn memo_replays_results() {
    let mut engine = Engine::new("echo hi", 0);
    let first = engine.word();
    let after_first = engine.pos;
    engine.pos = 0;
    let second = engine.word();
    assert_eq!(first, second);
    assert_eq!(engine.pos, after_first);
    assert!(engine.memo.contains_key(&(Rule::Word, 0)));
}
