// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for parse diagnostics.

/// A resolved position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column, counted in characters from the start of the line.
    pub column: usize,
    /// The full line containing the position, without its newline.
    pub line_content: &'a str,
}

/// Locate a byte offset in source.
///
/// Offsets past the end of the source resolve to the position just after the
/// last character, which is where "end of input" errors point.
///
/// # Example
///
/// ```ignore
/// use shgate_syntax::locate;
///
/// let source = "echo hello\necho world";
/// let loc = locate(source, 11); // "echo" on line 2
/// assert_eq!((loc.line, loc.column), (2, 1));
/// assert_eq!(loc.line_content, "echo world");
/// ```
pub fn locate(source: &str, offset: usize) -> Location<'_> {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    // Column counts characters; a non-boundary offset rounds down.
    let column = source
        .get(line_start..offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| {
            source[line_start..]
                .char_indices()
                .take_while(|(i, _)| line_start + i < offset)
                .count()
        })
        + 1;

    Location {
        line,
        column,
        line_content: &source[line_start..line_end],
    }
}

/// Render the source line containing `offset` with a caret underneath.
///
/// ```text
/// echo "unterminated
///                   ^
/// ```
pub fn caret_context(source: &str, offset: usize) -> String {
    let loc = locate(source, offset);
    format!(
        "{}\n{}^",
        loc.line_content,
        " ".repeat(loc.column.saturating_sub(1))
    )
}

/// Render a rustc-style diagnostic block for `offset`.
///
/// ```text
/// error: Expected "fi" but end of input found.
///   --> line 1, column 21
///    |
///  1 | if true; then echo x
///    |                     ^
/// ```
pub fn diagnostic_context(source: &str, offset: usize, message: &str) -> String {
    let loc = locate(source, offset);
    format!(
        "error: {message}\n  --> line {line}, column {column}\n   |\n{line:>3} | {content}\n   | {pad}^",
        line = loc.line,
        column = loc.column,
        content = loc.line_content,
        pad = " ".repeat(loc.column.saturating_sub(1)),
    )
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
