// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed command line handle.

use crate::analysis::SyntaxInfo;
use crate::ast::Node;
use crate::parse_error::ParseError;
use crate::parser::Parser;

/// The result of a successful parse: one `program` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: Node,
}

impl SyntaxTree {
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }

    /// Parse a command line with the default configuration.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Parser::parse(input)
    }

    /// The `program` node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consume the tree, returning the `program` node.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Build an analyzer over this tree.
    ///
    /// Each analyzer computes its results lazily, once.
    pub fn info(&self) -> SyntaxInfo<'_> {
        SyntaxInfo::new(&self.root)
    }
}
