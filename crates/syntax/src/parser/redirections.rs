// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection parsing.

use super::{expect, Engine, Rule};
use crate::ast::{Node, NodeKind};

/// Redirection operators, longest first so that `<<` is not read as `<`.
const OPERATORS: &[(&str, NodeKind)] = &[
    ("<<-", NodeKind::IoHereStrip),
    ("<<", NodeKind::IoHere),
    ("<&", NodeKind::DuplicateInput),
    ("<>", NodeKind::ReadAndWrite),
    ("<", NodeKind::Input),
    (">>", NodeKind::AppendOutput),
    (">&", NodeKind::DuplicateOutput),
    (">|", NodeKind::Clobber),
    (">", NodeKind::Output),
];

impl Engine<'_> {
    /// io_subject? (io_file | io_here)
    ///
    /// Produces `io_redirect` holding an optional `io_subject` and one
    /// operator node wrapping the target word.
    pub(super) fn io_redirect(&mut self) -> Option<Node> {
        self.memo(Rule::IoRedirect, |p| {
            let mut contents = Vec::new();
            if let Some(subject) = p.io_subject() {
                contents.push(subject);
            }

            let op_start = p.pos;
            let kind = OPERATORS
                .iter()
                .find_map(|&(text, kind)| p.lit(text).then_some(kind))?;
            p.skip_blanks();
            let target = p.word()?;

            let mut operator = Node::wrap(kind, target);
            if matches!(kind, NodeKind::IoHere | NodeKind::IoHereStrip) {
                // The body that follows is never parsed; the caller rejects
                // any tree that keeps this node.
                operator = operator.at_offset(op_start);
            }
            contents.push(operator);
            Some(Node::from_nodes(NodeKind::IoRedirect, contents))
        })
    }

    /// A file descriptor number immediately followed by `<` or `>`.
    fn io_subject(&mut self) -> Option<Node> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            self.fail(expect::DIGIT);
            return None;
        }
        if !matches!(self.peek(), Some(b'<' | b'>')) {
            self.pos = start;
            return None;
        }
        Some(Node::leaf(NodeKind::IoSubject, &self.src[start..self.pos]))
    }
}
