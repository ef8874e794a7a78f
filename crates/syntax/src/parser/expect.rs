// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expectation tracking for syntax error messages.

use std::fmt;

/// Something the grammar would have accepted at the failure point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Expected {
    /// An exact piece of text, such as an operator or reserved word.
    Literal(&'static str),
    /// A class of characters or a named token.
    Class(&'static str),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(text) => write!(f, "{text:?}"),
            Expected::Class(desc) => f.write_str(desc),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

// Character classes reported when a run of text cannot start.
pub(crate) const UNQUOTED_CHAR: Expected = Expected::Class("unquoted character");
pub(crate) const DQUOTED_CHAR: Expected = Expected::Class(r#"[^"\\`$]"#);
pub(crate) const BACKQUOTED_CHAR: Expected = Expected::Class(r"[^`\\]");
pub(crate) const SQUOTED_CHAR: Expected = Expected::Class("[^']");
pub(crate) const NAME: Expected = Expected::Class("name");
pub(crate) const DIGIT: Expected = Expected::Class("[0-9]");
pub(crate) const NEWLINE: Expected = Expected::Class("newline");
pub(crate) const ANY_CHAR: Expected = Expected::Class("any character");
pub(crate) const COMMAND_NAME: Expected = Expected::Class("command name");
pub(crate) const PARAMETER: Expected = Expected::Class("parameter");
pub(crate) const DOLLAR_PARAMETER: Expected =
    Expected::Class(r#"parameter (a literal "$" must be escaped as "\$" or single-quoted)"#);

/// Build the `Expected ... but ... found.` message.
///
/// Expectations are sorted and de-duplicated so the message does not depend
/// on the order alternatives were tried.
pub(crate) fn failure_message(expected: &[Expected], input: &str, offset: usize) -> String {
    let mut expected = expected.to_vec();
    expected.sort();
    expected.dedup();

    let described: Vec<String> = expected.iter().map(ToString::to_string).collect();
    let expected_desc = match described.as_slice() {
        [] => "valid input".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    };

    let found_desc = match input.get(offset..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("{:?}", c.to_string()),
        None => "end of input".to_string(),
    };

    format!("Expected {expected_desc} but {found_desc} found.")
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
