// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser configuration.

use serde::Deserialize;

use crate::parse_error::ErrorStyle;

/// Default input size limit (64 KiB).
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Default nesting limit for recursive constructs.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for a parse.
///
/// Limits use `0` to mean unlimited.
///
/// # Example
///
/// ```ignore
/// use shgate_syntax::{ErrorStyle, Parser, ParserConfig};
///
/// let config = ParserConfig::default()
///     .max_input_len(4096)
///     .error_style(ErrorStyle::Bare);
/// let tree = Parser::parse_with_config("echo hello", &config)?;
/// # Ok::<(), shgate_syntax::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum input length in bytes (0 = unlimited).
    pub max_input_len: usize,
    /// Maximum nesting of compound lists, substitutions and braced
    /// parameter operands (0 = unlimited).
    pub max_depth: usize,
    /// How syntax errors render by default.
    pub error_style: ErrorStyle,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
            error_style: ErrorStyle::Context,
        }
    }
}

impl ParserConfig {
    /// Configuration with every limit disabled.
    pub fn unlimited() -> Self {
        Self {
            max_input_len: 0,
            max_depth: 0,
            error_style: ErrorStyle::Context,
        }
    }

    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn error_style(mut self, style: ErrorStyle) -> Self {
        self.error_style = style;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
