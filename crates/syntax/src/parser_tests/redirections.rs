// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirections and here-document rejection.

use super::*;

fn redirect(op_tag: &str, target: &str) -> String {
    format!("<io_redirect><{op_tag}>{}</{op_tag}></io_redirect>", lit(target))
}

#[yare::parameterized(
    input           = { "cat < in", "input", "in" },
    output          = { "cat > out", "output", "out" },
    append          = { "cat >> log", "append_output", "log" },
    clobber         = { "cat >| out", "clobber", "out" },
    dup_input       = { "cat <& 3", "duplicate_input", "3" },
    dup_output      = { "cat >&2", "duplicate_output", "2" },
    read_write      = { "cat <> file", "read_and_write", "file" },
    no_space_target = { "cat >out", "output", "out" },
)]
fn operators(input: &str, op_tag: &str, target: &str) {
    assert_eq!(
        dump(input),
        format!("<simple_command>{}{}</simple_command>", lit("cat"), redirect(op_tag, target))
    );
}

#[test]
fn redirect_keeps_source_order_among_arguments() {
    assert_eq!(
        dump("echo a > out b"),
        format!(
            "<simple_command>{}{}{}{}</simple_command>",
            lit("echo"),
            lit("a"),
            redirect("output", "out"),
            lit("b")
        )
    );
}

#[test]
fn file_descriptor_subject() {
    assert_eq!(
        dump("cmd 2>&1"),
        format!(
            "<simple_command>{}<io_redirect><io_subject>2</io_subject><duplicate_output>{}</duplicate_output></io_redirect></simple_command>",
            lit("cmd"),
            lit("1")
        )
    );
}

#[test]
fn separated_digit_is_an_argument() {
    assert_eq!(
        dump("echo 2 > x"),
        format!(
            "<simple_command>{}{}{}</simple_command>",
            lit("echo"),
            lit("2"),
            redirect("output", "x")
        )
    );
}

#[test]
fn redirect_only_command() {
    assert_eq!(
        dump("> out"),
        format!(
            "<simple_command><cmd_prefix>{}</cmd_prefix></simple_command>",
            redirect("output", "out")
        )
    );
}

#[test]
fn redirect_before_command_word() {
    assert_eq!(
        dump("<in sort"),
        format!(
            "<simple_command><cmd_prefix>{}</cmd_prefix>{}</simple_command>",
            redirect("input", "in"),
            lit("sort")
        )
    );
}

#[test]
fn missing_target_is_a_syntax_error() {
    assert!(parse_err("echo >").is_syntax());
}

#[yare::parameterized(
    heredoc       = { "cat <<EOF", 5 },
    heredoc_strip = { "cat <<-EOF", 5 },
    after_list    = { "true; cat << END", 11 },
    second_of_two = { "cat <<A; cat <<B", 5 },
    // `$((` is first tried as arithmetic, then reparsed as `$( (...) )`.
    reparsed      = { "echo $(( $(cat <<A) ) )", 16 },
)]
fn heredoc_is_rejected(input: &str, column: usize) {
    assert_eq!(
        parse_err(input),
        ParseError::HeredocUnsupported { line: 1, column }
    );
}

#[test]
fn heredoc_operator_inside_quotes_is_text() {
    assert_eq!(
        dump("echo '<<EOF'"),
        format!(
            "<simple_command>{}<word><single_quote>&lt;&lt;EOF</single_quote></word></simple_command>",
            lit("echo")
        )
    );
}

#[test]
fn heredoc_offset_comes_from_nodes_in_the_tree() {
    let here = |offset| {
        Node::from_nodes(
            NodeKind::IoRedirect,
            vec![Node::wrap(NodeKind::IoHere, Node::leaf(NodeKind::Word, "A")).at_offset(offset)],
        )
    };
    let tree = Node::from_nodes(NodeKind::SimpleCommand, vec![here(12), here(4)]);
    assert_eq!(crate::parser::heredoc_offset(&tree), Some(4));

    let plain = Node::leaf(NodeKind::UnquotedLiteral, "<<A");
    assert_eq!(crate::parser::heredoc_offset(&plain), None);
}
