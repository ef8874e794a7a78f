// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compound commands.

use super::*;

// =============================================================================
// Groups
// =============================================================================

#[test]
fn subshell() {
    assert_eq!(
        dump("(cd /tmp && ls)"),
        format!(
            "<subshell><and_if>{}{}</and_if></subshell>",
            simple(&["cd", "/tmp"]),
            simple(&["ls"])
        )
    );
}

#[test]
fn brace_group_with_list() {
    assert_eq!(
        dump("{ a; b; }"),
        format!(
            "<brace_group><list>{}{}</list></brace_group>",
            simple(&["a"]),
            simple(&["b"])
        )
    );
}

#[test]
fn brace_group_across_lines() {
    assert_eq!(
        dump("{\n  a\n  b\n}"),
        format!(
            "<brace_group><list>{}{}</list></brace_group>",
            simple(&["a"]),
            simple(&["b"])
        )
    );
}

#[test]
fn brace_group_needs_separator_before_closing_brace() {
    assert!(parse_err("{ echo hi }").is_syntax());
}

#[test]
fn compound_redirects_are_trailing_children() {
    assert_eq!(
        dump("(ls) 2>/dev/null"),
        format!(
            "<subshell>{}<io_redirect><io_subject>2</io_subject><output>{}</output></io_redirect></subshell>",
            simple(&["ls"]),
            lit("/dev/null")
        )
    );
}

// =============================================================================
// for
// =============================================================================

#[test]
fn for_with_word_list() {
    assert_eq!(
        dump("for x in a b; do echo $x; done"),
        format!(
            "<for>x<in>{}{}</in><do><simple_command>{}<word><named_parameter>x</named_parameter></word></simple_command></do></for>",
            lit("a"),
            lit("b"),
            lit("echo")
        )
    );
}

#[test]
fn for_with_empty_word_list() {
    assert_eq!(
        dump("for x in; do :; done"),
        format!("<for>x<in></in><do>{}</do></for>", simple(&[":"]))
    );
}

#[yare::parameterized(
    bare      = { "for x do :; done" },
    semicolon = { "for x; do :; done" },
    newline   = { "for x\ndo :\ndone" },
)]
fn for_without_in_clause(input: &str) {
    assert_eq!(dump(input), format!("<for>x<do>{}</do></for>", simple(&[":"])));
}

#[test]
fn for_in_clause_on_next_line() {
    assert_eq!(
        dump("for x\nin a\ndo :\ndone"),
        format!("<for>x<in>{}</in><do>{}</do></for>", lit("a"), simple(&[":"]))
    );
}

// =============================================================================
// case
// =============================================================================

#[test]
fn case_with_alternatives() {
    assert_eq!(
        dump("case $x in a|b) echo ab;; *) echo other;; esac"),
        format!(
            "<case><word><named_parameter>x</named_parameter></word>\
             <case_item>[{}{}]{}</case_item>\
             <case_item>[{}]{}</case_item></case>",
            lit("a"),
            lit("b"),
            simple(&["echo", "ab"]),
            lit("*"),
            simple(&["echo", "other"])
        )
    );
}

#[test]
fn case_last_item_may_omit_terminator() {
    assert_eq!(
        dump("case x in\n(a) one;;\nb) two\nesac"),
        format!(
            "<case>{}<case_item>[{}]{}</case_item><case_item>[{}]{}</case_item></case>",
            lit("x"),
            lit("a"),
            simple(&["one"]),
            lit("b"),
            simple(&["two"])
        )
    );
}

#[test]
fn case_item_with_empty_body() {
    assert_eq!(
        dump("case x in a) ;; esac"),
        format!("<case>{}<case_item>[{}]</case_item></case>", lit("x"), lit("a"))
    );
}

#[test]
fn case_without_items() {
    assert_eq!(dump("case x in esac"), format!("<case>{}</case>", lit("x")));
}

// =============================================================================
// if
// =============================================================================

#[test]
fn if_then() {
    assert_eq!(
        dump("if true; then echo x; fi"),
        format!(
            "<if><condition>{}</condition><consequent>{}</consequent></if>",
            simple(&["true"]),
            simple(&["echo", "x"])
        )
    );
}

#[test]
fn elif_nests_an_if_inside_else() {
    assert_eq!(
        dump("if a; then b; elif c; then d; else e; fi"),
        format!(
            "<if><condition>{}</condition><consequent>{}</consequent>\
             <else><if><condition>{}</condition><consequent>{}</consequent>\
             <else>{}</else></if></else></if>",
            simple(&["a"]),
            simple(&["b"]),
            simple(&["c"]),
            simple(&["d"]),
            simple(&["e"])
        )
    );
}

#[test]
fn nested_if() {
    let node = command("if a; then if b; then c; fi; fi");
    let consequent = node.children().nth(1).unwrap();
    assert_eq!(consequent.kind(), NodeKind::Consequent);
    assert_eq!(consequent.children().next().unwrap().kind(), NodeKind::If);
}

#[test]
fn if_missing_fi() {
    assert!(parse_err("if a; then b").is_syntax());
}

// =============================================================================
// while / until
// =============================================================================

#[yare::parameterized(
    while_loop = { "while true; do :; done", "while" },
    until_loop = { "until false\ndo\n  :\ndone", "until" },
)]
fn loops(input: &str, tag: &str) {
    let condition = if tag == "while" { "true" } else { "false" };
    assert_eq!(
        dump(input),
        format!(
            "<{tag}><condition>{}</condition><do>{}</do></{tag}>",
            simple(&[condition]),
            simple(&[":"])
        )
    );
}

#[test]
fn loop_in_pipeline() {
    assert!(dump("while read l; do echo $l; done | sort").starts_with("<pipeline><while>"));
}

// =============================================================================
// Nesting limit
// =============================================================================

#[test]
fn nesting_limit_applies_to_compound_lists() {
    let config = ParserConfig::default().max_depth(2);
    assert!(Parser::parse_with_config("( ( a ) )", &config).is_ok());
    assert_eq!(
        Parser::parse_with_config("( ( ( a ) ) )", &config),
        Err(ParseError::NestingTooDeep { max: 2 })
    );
}

#[test]
fn zero_depth_is_unlimited() {
    let input = format!("{}a{}", "( ".repeat(100), " )".repeat(100));
    assert!(Parser::parse_with_config(&input, &ParserConfig::unlimited()).is_ok());
}
