// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only analyses over a parsed command line.
//!
//! [`SyntaxInfo`] answers two questions about a tree: which shell features it
//! uses, and whether it is a single literal command whose argument vector
//! can be run without a shell.

mod features;
mod literal;

pub use features::Feature;

use std::cell::OnceCell;

use serde::Serialize;

use crate::ast::Node;

/// Analyzer bound to one tree.
///
/// Results are computed on first use and cached for the lifetime of the
/// analyzer.
#[derive(Debug)]
pub struct SyntaxInfo<'t> {
    root: &'t Node,
    features: OnceCell<Vec<Feature>>,
    literal_argv: OnceCell<Option<Vec<String>>>,
}

impl<'t> SyntaxInfo<'t> {
    pub(crate) fn new(root: &'t Node) -> Self {
        Self {
            root,
            features: OnceCell::new(),
            literal_argv: OnceCell::new(),
        }
    }

    /// Every feature used anywhere in the tree, sorted and de-duplicated.
    pub fn feature_list(&self) -> &[Feature] {
        self.features
            .get_or_init(|| {
                let features = features::collect(self.root);
                tracing::debug!(?features, "computed feature list");
                features
            })
            .as_slice()
    }

    /// Whether the tree uses `feature`.
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.feature_list().contains(&feature)
    }

    /// The fully unquoted argument vector, command name first.
    ///
    /// `None` means the command line needs a shell to run faithfully; it
    /// never means an empty command.
    pub fn literal_argv(&self) -> Option<&[String]> {
        self.literal_argv
            .get_or_init(|| {
                let argv = literal::extract(self.root);
                tracing::debug!(literal = argv.is_some(), "computed literal argv");
                argv
            })
            .as_deref()
    }

    /// Both analyses in one serializable value.
    pub fn describe(&self) -> AnalysisReport {
        AnalysisReport {
            features: self.feature_list().to_vec(),
            literal_argv: self.literal_argv().map(<[String]>::to_vec),
        }
    }
}

/// Snapshot of a [`SyntaxInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub features: Vec<Feature>,
    pub literal_argv: Option<Vec<String>>,
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
