// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing the AST.

use super::{Child, Node};

/// Visitor trait for traversing the AST.
///
/// The default implementations walk the entire tree in pre-order: a node is
/// visited before its children, and children are visited left to right.
/// Override `visit_node` to act on nodes; call [`NodeVisitor::walk_node`] to
/// descend, or skip the call to prune the subtree.
///
/// # Example: Count Words
///
/// ```ignore
/// use shgate_syntax::{Node, NodeKind, NodeVisitor, Parser};
///
/// struct WordCounter(usize);
///
/// impl NodeVisitor for WordCounter {
///     fn visit_node(&mut self, node: &Node) {
///         if node.kind() == NodeKind::Word {
///             self.0 += 1;
///         }
///         self.walk_node(node);
///     }
/// }
///
/// let tree = Parser::parse("echo one two")?;
/// let mut counter = WordCounter(0);
/// tree.root().traverse(&mut counter);
/// assert_eq!(counter.0, 3);
/// # Ok::<(), shgate_syntax::ParseError>(())
/// ```
pub trait NodeVisitor {
    /// Visit a node.
    fn visit_node(&mut self, node: &Node) {
        self.walk_node(node);
    }

    /// Visit a text fragment.
    fn visit_text(&mut self, _text: &str) {}

    /// Walk a node's children.
    fn walk_node(&mut self, node: &Node) {
        for child in node.contents() {
            self.walk_child(child);
        }
    }

    /// Dispatch a single child, flattening list children.
    fn walk_child(&mut self, child: &Child) {
        match child {
            Child::Node(node) => self.visit_node(node),
            Child::Text(text) => self.visit_text(text),
            Child::List(list) => {
                for item in list {
                    self.walk_child(item);
                }
            }
        }
    }
}
