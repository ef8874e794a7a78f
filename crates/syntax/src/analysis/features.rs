// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Feature extraction.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::ast::{Node, NodeKind, NodeVisitor};

/// A shell capability a command line relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Sequencing with `;`, `&&`, or `||`.
    List,
    /// A command run with a trailing `&`.
    Background,
    /// `|`, or `!` negation of a pipeline.
    Pipeline,
    /// Subshells, groups, control flow, and function definitions.
    Compound,
    /// Any I/O redirection.
    Redirect,
    /// Backquotes or `$(...)`.
    CommandExpansion,
    /// `$name`, `$1`, or a special parameter.
    Parameter,
    /// Braced parameter forms and arithmetic expansion.
    ExoticExpansion,
    /// `NAME=value` before a command.
    Assignment,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::List => "list",
            Feature::Background => "background",
            Feature::Pipeline => "pipeline",
            Feature::Compound => "compound",
            Feature::Redirect => "redirect",
            Feature::CommandExpansion => "command_expansion",
            Feature::Parameter => "parameter",
            Feature::ExoticExpansion => "exotic_expansion",
            Feature::Assignment => "assignment",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The features a single node implies.
pub(crate) fn features_of(kind: NodeKind) -> &'static [Feature] {
    use NodeKind::*;
    match kind {
        Program | CompleteCommand | SimpleCommand | CmdPrefix | Word => &[],

        List | AndIf | OrIf => &[Feature::List],
        Background => &[Feature::Background],
        Pipeline | Bang => &[Feature::Pipeline],
        Assignment => &[Feature::Assignment],

        BraceGroup | Subshell | For | In | Case | CaseItem | If | Condition | Consequent
        | Else | While | Until | Do | FunctionDefinition | FunctionName => &[Feature::Compound],

        IoRedirect | IoSubject | Input | Output | AppendOutput | Clobber | DuplicateInput
        | DuplicateOutput | ReadAndWrite | IoHere | IoHereStrip => &[Feature::Redirect],

        SingleQuote | DoubleQuote | BareEscape | UnquotedLiteral | DquotedEscape
        | BackquotedEscape => &[],

        Backquote | DoubleBackquote | CommandExpansion => &[Feature::CommandExpansion],

        SpecialParameter | PositionalParameter | NamedParameter => &[Feature::Parameter],

        BracedParameterExpansion | StringLength | UseDefault | UseDefaultUnset | AssignDefault
        | AssignDefaultUnset | IndicateError | IndicateErrorUnset | UseAlternative
        | UseAlternativeUnset | RemoveSmallestSuffix | RemoveLargestSuffix
        | RemoveSmallestPrefix | RemoveLargestPrefix | ArithmeticExpansion => {
            &[Feature::ExoticExpansion]
        }
    }
}

struct FeatureCollector(BTreeSet<Feature>);

impl NodeVisitor for FeatureCollector {
    fn visit_node(&mut self, node: &Node) {
        self.0.extend(features_of(node.kind()));
        self.walk_node(node);
    }
}

/// Collect the features of every node in the tree.
pub(crate) fn collect(root: &Node) -> Vec<Feature> {
    let mut collector = FeatureCollector(BTreeSet::new());
    root.traverse(&mut collector);
    tracing::trace!(count = collector.0.len(), "collected features");
    collector.0.into_iter().collect()
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
