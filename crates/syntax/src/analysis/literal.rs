// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Literal argument vector extraction.
//!
//! A command line is literal when it is one simple command whose words are
//! made only of plain text, quotes, and escapes. Anything else yields
//! `None`, never a partial vector.

use crate::ast::{Child, Node, NodeKind};

pub(crate) fn extract(root: &Node) -> Option<Vec<String>> {
    let command = single_child(root, NodeKind::Program)?;
    let command = single_child(command, NodeKind::CompleteCommand)?;
    if command.kind() != NodeKind::SimpleCommand {
        tracing::trace!(kind = %command.kind(), "not a simple command");
        return None;
    }

    // Redirections and the assignment prefix are not arguments.
    command
        .contents()
        .iter()
        .filter_map(Child::as_node)
        .filter(|node| node.kind() == NodeKind::Word)
        .map(unquote_word)
        .collect()
}

/// The only child of `node`, which must be of `kind`.
fn single_child(node: &Node, kind: NodeKind) -> Option<&Node> {
    if node.kind() != kind {
        return None;
    }
    match node.contents() {
        [Child::Node(only)] => Some(only),
        contents => {
            tracing::trace!(%kind, children = contents.len(), "expected exactly one child");
            None
        }
    }
}

fn unquote_word(word: &Node) -> Option<String> {
    let mut out = String::new();
    for part in word.contents() {
        let Child::Node(part) = part else {
            return None;
        };
        match part.kind() {
            NodeKind::SingleQuote | NodeKind::UnquotedLiteral | NodeKind::BareEscape => {
                out.push_str(part.sole_text()?);
            }
            NodeKind::DoubleQuote => unquote_double(part, &mut out)?,
            kind => {
                tracing::trace!(%kind, "word is not literal");
                return None;
            }
        }
    }
    Some(out)
}

fn unquote_double(quoted: &Node, out: &mut String) -> Option<()> {
    for child in quoted.contents() {
        match child {
            Child::Text(text) => out.push_str(text),
            Child::Node(escape) if escape.kind() == NodeKind::DquotedEscape => {
                out.push_str(escape.sole_text()?);
            }
            Child::Node(node) => {
                tracing::trace!(kind = %node.kind(), "expansion inside double quotes");
                return None;
            }
            Child::List(_) => return None,
        }
    }
    Some(())
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
