// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract Syntax Tree for parsed shell command lines.
//!
//! Every production of the grammar yields a [`Node`]: a [`NodeKind`] tag plus
//! an ordered list of [`Child`] values in source order. The tree is built once
//! by the parser and never mutated afterwards.

mod visitor;

pub use visitor::NodeVisitor;

use serde::Serialize;
use std::fmt;

/// The grammar production a [`Node`] was built from.
///
/// Serializes (and displays) as the production tag, e.g. `simple_command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    // Command structure
    Program,
    CompleteCommand,
    List,
    AndIf,
    OrIf,
    Background,
    Pipeline,
    Bang,
    SimpleCommand,
    CmdPrefix,
    Word,
    Assignment,

    // Compound commands
    BraceGroup,
    Subshell,
    For,
    In,
    Case,
    CaseItem,
    If,
    Condition,
    Consequent,
    Else,
    While,
    Until,
    Do,
    FunctionDefinition,
    FunctionName,

    // Redirections
    IoRedirect,
    IoSubject,
    Input,
    Output,
    AppendOutput,
    Clobber,
    DuplicateInput,
    DuplicateOutput,
    ReadAndWrite,
    IoHere,
    IoHereStrip,

    // Quoting
    SingleQuote,
    DoubleQuote,
    BareEscape,
    UnquotedLiteral,
    Backquote,
    DoubleBackquote,
    DquotedEscape,
    BackquotedEscape,

    // Parameters and expansions
    SpecialParameter,
    PositionalParameter,
    NamedParameter,
    BracedParameterExpansion,
    StringLength,
    UseDefault,
    UseDefaultUnset,
    AssignDefault,
    AssignDefaultUnset,
    IndicateError,
    IndicateErrorUnset,
    UseAlternative,
    UseAlternativeUnset,
    RemoveSmallestSuffix,
    RemoveLargestSuffix,
    RemoveSmallestPrefix,
    RemoveLargestPrefix,
    ArithmeticExpansion,
    CommandExpansion,
}

impl NodeKind {
    /// The grammar production tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::CompleteCommand => "complete_command",
            NodeKind::List => "list",
            NodeKind::AndIf => "and_if",
            NodeKind::OrIf => "or_if",
            NodeKind::Background => "background",
            NodeKind::Pipeline => "pipeline",
            NodeKind::Bang => "bang",
            NodeKind::SimpleCommand => "simple_command",
            NodeKind::CmdPrefix => "cmd_prefix",
            NodeKind::Word => "word",
            NodeKind::Assignment => "assignment",
            NodeKind::BraceGroup => "brace_group",
            NodeKind::Subshell => "subshell",
            NodeKind::For => "for",
            NodeKind::In => "in",
            NodeKind::Case => "case",
            NodeKind::CaseItem => "case_item",
            NodeKind::If => "if",
            NodeKind::Condition => "condition",
            NodeKind::Consequent => "consequent",
            NodeKind::Else => "else",
            NodeKind::While => "while",
            NodeKind::Until => "until",
            NodeKind::Do => "do",
            NodeKind::FunctionDefinition => "function_definition",
            NodeKind::FunctionName => "function_name",
            NodeKind::IoRedirect => "io_redirect",
            NodeKind::IoSubject => "io_subject",
            NodeKind::Input => "input",
            NodeKind::Output => "output",
            NodeKind::AppendOutput => "append_output",
            NodeKind::Clobber => "clobber",
            NodeKind::DuplicateInput => "duplicate_input",
            NodeKind::DuplicateOutput => "duplicate_output",
            NodeKind::ReadAndWrite => "read_and_write",
            NodeKind::IoHere => "io_here",
            NodeKind::IoHereStrip => "io_here_strip",
            NodeKind::SingleQuote => "single_quote",
            NodeKind::DoubleQuote => "double_quote",
            NodeKind::BareEscape => "bare_escape",
            NodeKind::UnquotedLiteral => "unquoted_literal",
            NodeKind::Backquote => "backquote",
            NodeKind::DoubleBackquote => "double_backquote",
            NodeKind::DquotedEscape => "dquoted_escape",
            NodeKind::BackquotedEscape => "backquoted_escape",
            NodeKind::SpecialParameter => "special_parameter",
            NodeKind::PositionalParameter => "positional_parameter",
            NodeKind::NamedParameter => "named_parameter",
            NodeKind::BracedParameterExpansion => "braced_parameter_expansion",
            NodeKind::StringLength => "string_length",
            NodeKind::UseDefault => "use_default",
            NodeKind::UseDefaultUnset => "use_default_unset",
            NodeKind::AssignDefault => "assign_default",
            NodeKind::AssignDefaultUnset => "assign_default_unset",
            NodeKind::IndicateError => "indicate_error",
            NodeKind::IndicateErrorUnset => "indicate_error_unset",
            NodeKind::UseAlternative => "use_alternative",
            NodeKind::UseAlternativeUnset => "use_alternative_unset",
            NodeKind::RemoveSmallestSuffix => "remove_smallest_suffix",
            NodeKind::RemoveLargestSuffix => "remove_largest_suffix",
            NodeKind::RemoveSmallestPrefix => "remove_smallest_prefix",
            NodeKind::RemoveLargestPrefix => "remove_largest_prefix",
            NodeKind::ArithmeticExpansion => "arithmetic_expansion",
            NodeKind::CommandExpansion => "command_expansion",
        }
    }

    /// Returns true for the twelve operator forms of `${name<op>word}`.
    pub fn is_parameter_operator(self) -> bool {
        matches!(
            self,
            NodeKind::UseDefault
                | NodeKind::UseDefaultUnset
                | NodeKind::AssignDefault
                | NodeKind::AssignDefaultUnset
                | NodeKind::IndicateError
                | NodeKind::IndicateErrorUnset
                | NodeKind::UseAlternative
                | NodeKind::UseAlternativeUnset
                | NodeKind::RemoveSmallestSuffix
                | NodeKind::RemoveLargestSuffix
                | NodeKind::RemoveSmallestPrefix
                | NodeKind::RemoveLargestPrefix
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a node's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Child {
    /// A nested production.
    Node(Node),
    /// A literal text fragment taken from the source.
    Text(String),
    /// A list-valued production, such as the alternatives of a case
    /// pattern.
    List(Vec<Child>),
}

impl Child {
    /// Returns the nested node, if this child is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the text fragment, if this child is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<Vec<Child>> for Child {
    fn from(list: Vec<Child>) -> Self {
        Child::List(list)
    }
}

/// A node of the syntax tree.
///
/// Nodes are immutable once built: there is no way to reach a node's parent
/// or to change its contents, so every analysis is a plain structural
/// recursion.
///
/// # Examples
///
/// ```ignore
/// use shgate_syntax::{Node, NodeKind};
///
/// let word = Node::new(NodeKind::Word, vec![Node::leaf(NodeKind::UnquotedLiteral, "echo").into()]);
/// assert_eq!(word.dump(), "<word><unquoted_literal>echo</unquoted_literal></word>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "type")]
    kind: NodeKind,
    contents: Vec<Child>,
    /// Source offset, kept only where a later check reports a location.
    #[serde(skip)]
    offset: Option<usize>,
}

impl Node {
    /// Create a node from a kind and its children in source order.
    pub fn new(kind: NodeKind, contents: Vec<Child>) -> Self {
        Self {
            kind,
            contents,
            offset: None,
        }
    }

    /// Create a node holding a single text fragment.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            contents: vec![Child::Text(text.into())],
            offset: None,
        }
    }

    /// Create a node with a single nested node.
    pub fn wrap(kind: NodeKind, inner: Node) -> Self {
        Self {
            kind,
            contents: vec![Child::Node(inner)],
            offset: None,
        }
    }

    /// Create a node whose children are all nodes.
    pub fn from_nodes(kind: NodeKind, nodes: Vec<Node>) -> Self {
        Self {
            kind,
            contents: nodes.into_iter().map(Child::Node).collect(),
            offset: None,
        }
    }

    /// Append further children, keeping the kind.
    pub(crate) fn extended(mut self, extra: impl IntoIterator<Item = Child>) -> Self {
        self.contents.extend(extra);
        self
    }

    /// Record the byte offset the node starts at.
    pub(crate) fn at_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Byte offset recorded by the parser, if any.
    pub(crate) fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// The production this node was built from.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The node's children in source order.
    #[inline]
    pub fn contents(&self) -> &[Child] {
        &self.contents
    }

    /// Iterate over the nested nodes, descending into list children.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        fn flatten<'a>(children: &'a [Child], out: &mut Vec<&'a Node>) {
            for child in children {
                match child {
                    Child::Node(node) => out.push(node),
                    Child::List(list) => flatten(list, out),
                    Child::Text(_) => {}
                }
            }
        }
        let mut out = Vec::new();
        flatten(&self.contents, &mut out);
        out.into_iter()
    }

    /// Concatenate the direct text children.
    pub fn text(&self) -> String {
        self.contents.iter().filter_map(Child::as_text).collect()
    }

    /// Returns the single text child, if that is all this node holds.
    pub fn sole_text(&self) -> Option<&str> {
        match self.contents.as_slice() {
            [Child::Text(text)] => Some(text),
            _ => None,
        }
    }

    /// Render the tree as `<kind>children</kind>` for debugging.
    ///
    /// Text is escaped so that the markup stays unambiguous; list children
    /// are wrapped in brackets. The rendering is lossy and not meant to be
    /// parsed back.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    fn dump_into(&self, out: &mut String) {
        let tag = self.kind.as_str();
        out.push('<');
        out.push_str(tag);
        out.push('>');
        dump_children(&self.contents, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    /// Walk the tree in pre-order, calling the visitor on every node and
    /// every text fragment.
    ///
    /// Context the visitor needs is carried in the visitor itself.
    pub fn traverse<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_node(self);
    }
}

fn dump_children(children: &[Child], out: &mut String) {
    for child in children {
        match child {
            Child::Node(node) => node.dump_into(out),
            Child::Text(text) => escape_into(text, out),
            Child::List(list) => {
                out.push('[');
                dump_children(list, out);
                out.push(']');
            }
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '[' => out.push_str("&#91;"),
            ']' => out.push_str("&#93;"),
            _ => out.push(c),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
