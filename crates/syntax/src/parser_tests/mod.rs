// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod commands;
mod compound;
mod errors;
mod redirections;
mod words;

use super::*;
use crate::ast::Child;

/// Parse and return the root `program` node.
fn program(input: &str) -> Node {
    Parser::parse(input)
        .unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
        .into_root()
}

/// The node under the single `complete_command` of `input`.
fn command(input: &str) -> Node {
    let root = program(input);
    let [Child::Node(complete)] = root.contents() else {
        panic!("expected one complete_command in {input:?}: {root}");
    };
    assert_eq!(complete.kind(), NodeKind::CompleteCommand);
    let [Child::Node(inner)] = complete.contents() else {
        panic!("expected one child in {complete}");
    };
    inner.clone()
}

/// Dump of [`command`].
fn dump(input: &str) -> String {
    command(input).dump()
}

/// Parse the single word argument of `echo <word>`.
fn word(input: &str) -> String {
    let cmd = command(&format!("echo {input}"));
    let words: Vec<&Node> = cmd.children().collect();
    assert_eq!(words.len(), 2, "expected one argument in {cmd}");
    words[1].dump()
}

fn parse_err(input: &str) -> ParseError {
    match Parser::parse(input) {
        Ok(tree) => panic!("expected {input:?} to fail, got {}", tree.root()),
        Err(e) => e,
    }
}

fn syntax_err(input: &str) -> SyntaxError {
    match parse_err(input) {
        ParseError::Syntax(e) => e,
        other => panic!("expected a syntax error for {input:?}, got {other:?}"),
    }
}

/// `<word><unquoted_literal>text</unquoted_literal></word>`
fn lit(text: &str) -> String {
    format!("<word><unquoted_literal>{text}</unquoted_literal></word>")
}

/// A simple command made of plain words.
fn simple(words: &[&str]) -> String {
    let inner: String = words.iter().map(|w| lit(w)).collect();
    format!("<simple_command>{inner}</simple_command>")
}
