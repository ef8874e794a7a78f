// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::location::{caret_context, diagnostic_context, locate};

/// How a [`SyntaxError`] renders through `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStyle {
    /// Message, offending source line, and a caret under the failing column.
    #[default]
    Context,
    /// Message only, for log aggregation.
    Bare,
}

/// The input does not conform to the grammar.
///
/// The position is the rightmost point any alternative reached before
/// failing, so it points at the most specific breakdown.
///
/// # Example
///
/// ```text
/// Expected "\"", "$", "\\", "`" or [^"\\`$] but end of input found.
/// echo "unterminated
///                   ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    message: String,
    line: usize,
    column: usize,
    offset: usize,
    input: String,
    style: ErrorStyle,
}

impl SyntaxError {
    pub(crate) fn new(message: String, input: &str, offset: usize, style: ErrorStyle) -> Self {
        let loc = locate(input, offset);
        Self {
            message,
            line: loc.line,
            column: loc.column,
            offset,
            input: input.to_string(),
            style,
        }
    }

    /// The bare error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line of the failure point.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the failure point, in characters.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset of the failure point.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The complete input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The active rendering style.
    pub fn style(&self) -> ErrorStyle {
        self.style
    }

    /// Switch the rendering style.
    pub fn with_style(mut self, style: ErrorStyle) -> Self {
        self.style = style;
        self
    }

    /// Switch to bare rendering.
    pub fn bare(self) -> Self {
        self.with_style(ErrorStyle::Bare)
    }

    /// Message plus the source line and a caret under the failing column.
    pub fn context(&self) -> String {
        format!(
            "{}\n{}",
            self.message,
            caret_context(&self.input, self.offset)
        )
    }

    /// Rich diagnostic with a line/column header.
    pub fn diagnostic(&self) -> String {
        diagnostic_context(&self.input, self.offset, &self.message)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            ErrorStyle::Bare => f.write_str(&self.message),
            ErrorStyle::Context => f.write_str(&self.context()),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Parser errors.
///
/// Only [`ParseError::Syntax`] reflects bad user input. The other variants
/// are either configured resource limits or constructs the parser refuses
/// by design; callers must not treat them as "not literal".
///
/// # Examples
///
/// ```ignore
/// use shgate_syntax::{Parser, ParseError};
///
/// let err = Parser::parse("echo \"unterminated").unwrap_err();
/// assert!(err.is_syntax());
/// assert_eq!(err.position(), Some((1, 19)));
///
/// let err = Parser::parse("cat <<EOF").unwrap_err();
/// assert!(matches!(err, ParseError::HeredocUnsupported { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not conform to the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A here-document operator is part of an otherwise complete parse.
    ///
    /// Here-document bodies are not parsed, so the rest of the input cannot
    /// be interpreted correctly.
    #[error("here-documents are not supported (line {line}, column {column})")]
    HeredocUnsupported {
        /// 1-based line of the operator.
        line: usize,
        /// 1-based column of the operator.
        column: usize,
    },

    /// The input exceeds the configured size limit.
    #[error("input is {len} bytes, exceeding the limit of {max}")]
    InputTooLong {
        /// Input length in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// The input nests deeper than the configured limit.
    #[error("nesting exceeds the limit of {max} levels")]
    NestingTooDeep {
        /// Configured limit.
        max: usize,
    },
}

impl ParseError {
    /// Returns true for grammar failures caused by the input.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }

    /// The 1-based `(line, column)` of the error, if it has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax(e) => Some((e.line, e.column)),
            ParseError::HeredocUnsupported { line, column } => Some((*line, *column)),
            ParseError::InputTooLong { .. } | ParseError::NestingTooDeep { .. } => None,
        }
    }

    /// Switch the rendering style of a syntax error; other variants are
    /// returned unchanged.
    pub fn with_style(self, style: ErrorStyle) -> Self {
        match self {
            ParseError::Syntax(e) => ParseError::Syntax(e.with_style(style)),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "parse_error_tests.rs"]
mod tests;
