// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! POSIX shell command-line parser and syntax analyzer.
//!
//! Parses the kind of string handed to `sh -c` into a tagged syntax tree,
//! then answers two questions about it: which shell features it uses, and
//! whether it is nothing more than a single literal command whose argument
//! vector can be executed without a shell.
//!
//! # Quick Start
//!
//! ```ignore
//! use shgate_syntax::{Feature, Parser};
//!
//! let tree = Parser::parse("ls -la | grep foo")?;
//! let info = tree.info();
//! assert!(info.has_feature(Feature::Pipeline));
//! assert_eq!(info.literal_argv(), None);
//! # Ok::<(), shgate_syntax::ParseError>(())
//! ```
//!
//! # Tree Structure
//!
//! ```text
//! program
//! └── complete_command
//!     └── list | and_if | or_if | background | pipeline | bang | command
//!         └── simple_command
//!             ├── cmd_prefix (assignments, redirections)
//!             ├── word (command name)
//!             └── word | io_redirect ...
//! ```
//!
//! Here-document operators are recognized but their bodies are not: a
//! command line that needs one fails with
//! [`ParseError::HeredocUnsupported`].

mod analysis;
mod ast;
mod config;
mod location;
mod parse_error;
mod parser;
mod tree;

pub use analysis::{AnalysisReport, Feature, SyntaxInfo};
pub use ast::{Child, Node, NodeKind, NodeVisitor};
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN};
pub use location::{caret_context, diagnostic_context, locate, Location};
pub use parse_error::{ErrorStyle, ParseError, SyntaxError};
pub use parser::Parser;
pub use tree::SyntaxTree;
