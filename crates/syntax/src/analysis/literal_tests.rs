// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Parser;

fn argv(input: &str) -> Option<Vec<String>> {
    let tree = Parser::parse(input).unwrap();
    extract(tree.root())
}

#[yare::parameterized(
    plain              = { "echo hello", &["echo", "hello"] },
    single_quoted      = { "echo 'a || b'", &["echo", "a || b"] },
    double_quoted      = { "echo \"a  b\"", &["echo", "a  b"] },
    dquoted_escape     = { r#"echo "a\"b\$c""#, &["echo", "a\"b$c"] },
    kept_backslash     = { r#"echo "a\nb""#, &["echo", r"a\nb"] },
    bare_escape        = { r"echo a\ b \*", &["echo", "a b", "*"] },
    concatenated       = { r#"echo a'b'"c"\d"#, &["echo", "abcd"] },
    empty_quotes       = { "echo '' \"\"", &["echo", "", ""] },
    line_continuation  = { "echo a\\\nb", &["echo", "ab"] },
    glob_is_text       = { "ls *.rs", &["ls", "*.rs"] },
    trailing_separator = { "echo hi;", &["echo", "hi"] },
    comment            = { "echo hi # there", &["echo", "hi"] },
    redirect_skipped   = { "echo hi > out", &["echo", "hi"] },
    assignment_skipped = { "FOO=bar echo hi", &["echo", "hi"] },
    reserved_argument  = { "echo if fi", &["echo", "if", "fi"] },
)]
fn literal_commands(input: &str, expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
    assert_eq!(argv(input), Some(expected));
}

#[test]
fn assignment_only_command_has_empty_argv() {
    assert_eq!(argv("FOO=bar"), Some(vec![]));
}

#[yare::parameterized(
    empty               = { "" },
    parameter           = { "echo $FOO" },
    assignment_param    = { "FOO=bar echo $FOO" },
    dquoted_parameter   = { "echo \"hi $USER\"" },
    braced              = { "echo ${x}" },
    command_expansion   = { "echo $(date)" },
    dquoted_expansion   = { "echo \"$(date)\"" },
    backquote           = { "echo `date`" },
    arithmetic          = { "echo $((1))" },
    pipeline            = { "ls -la | grep foo" },
    trivial_pipeline    = { "a | b" },
    bang                = { "! true" },
    sequence            = { "a; b" },
    and_if              = { "a && b" },
    background          = { "a &" },
    two_lines           = { "a\nb" },
    subshell            = { "(echo hi)" },
    brace_group         = { "{ echo hi; }" },
    if_clause           = { "if true; then echo x; fi" },
    function            = { "f() { :; }" },
    expansion_in_arg    = { "echo ok $1" },
)]
fn not_literal(input: &str) {
    assert_eq!(argv(input), None);
}

#[test]
fn word_with_raw_text_part_is_not_literal() {
    let word = Node::new(NodeKind::Word, vec![Child::Text("x".into())]);
    assert_eq!(unquote_word(&word), None);
}

#[test]
fn literal_part_with_nested_node_is_not_literal() {
    let part = Node::wrap(
        NodeKind::UnquotedLiteral,
        Node::leaf(NodeKind::NamedParameter, "x"),
    );
    let word = Node::wrap(NodeKind::Word, part);
    assert_eq!(unquote_word(&word), None);
}

#[test]
fn program_must_have_one_complete_command() {
    let command = Node::from_nodes(
        NodeKind::SimpleCommand,
        vec![Node::wrap(
            NodeKind::Word,
            Node::leaf(NodeKind::UnquotedLiteral, "ls"),
        )],
    );
    let complete = Node::wrap(NodeKind::CompleteCommand, command);
    let one = Node::wrap(NodeKind::Program, complete.clone());
    let two = Node::from_nodes(NodeKind::Program, vec![complete.clone(), complete]);
    assert_eq!(extract(&one), Some(vec!["ls".to_string()]));
    assert_eq!(extract(&two), None);
}
