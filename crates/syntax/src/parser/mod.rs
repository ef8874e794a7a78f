// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell grammar engine.
//!
//! A backtracking recursive-descent parser working directly on the input
//! text. Every rule is a method returning `Option<Node>`: on success the
//! cursor sits after the match, on failure the cursor is restored and the
//! failure is recorded. Alternatives are tried in order, and the results of
//! rules reached repeatedly from different alternatives are memoized by
//! `(rule, offset)` for the duration of one parse.
//!
//! Only when the whole input cannot be consumed does the parse fail, and it
//! reports the rightmost offset any alternative reached together with
//! everything that would have been accepted there.

mod commands;
mod compound;
mod expect;
mod redirections;
mod words;

use std::collections::HashMap;

use crate::ast::{Node, NodeKind, NodeVisitor};
use crate::config::ParserConfig;
use crate::location::locate;
use crate::parse_error::{ParseError, SyntaxError};
use crate::tree::SyntaxTree;
use expect::Expected;

/// Reserved words that may not be used as a command name.
const RESERVED_WORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "while", "until", "do", "done", "case", "esac", "for",
    "in", "{", "}", "!",
];

/// Shell command-line parser.
///
/// # Examples
///
/// ```ignore
/// use shgate_syntax::Parser;
///
/// let tree = Parser::parse("echo hello")?;
/// let info = tree.info();
/// assert_eq!(info.literal_argv(), Some(&["echo".to_string(), "hello".to_string()][..]));
///
/// let err = Parser::parse("echo \"unterminated").unwrap_err();
/// assert_eq!(err.position(), Some((1, 19)));
/// # Ok::<(), shgate_syntax::ParseError>(())
/// ```
pub struct Parser;

impl Parser {
    /// Parse a command line with the default configuration.
    pub fn parse(input: &str) -> Result<SyntaxTree, ParseError> {
        Self::parse_with_config(input, &ParserConfig::default())
    }

    /// Parse a command line with a custom configuration.
    ///
    /// Every call builds its own engine and memo table, so concurrent parses
    /// share no state.
    pub fn parse_with_config(input: &str, config: &ParserConfig) -> Result<SyntaxTree, ParseError> {
        if config.max_input_len > 0 && input.len() > config.max_input_len {
            tracing::debug!(len = input.len(), max = config.max_input_len, "input too long");
            return Err(ParseError::InputTooLong {
                len: input.len(),
                max: config.max_input_len,
            });
        }

        let mut engine = Engine::new(input, config.max_depth);
        let root = engine.program();

        if engine.too_deep {
            tracing::debug!(max = config.max_depth, "nesting limit exceeded");
            return Err(ParseError::NestingTooDeep {
                max: config.max_depth,
            });
        }

        if engine.pos < input.len() {
            engine.fail(Expected::EndOfInput);
            let message = expect::failure_message(&engine.expected, input, engine.fail_pos);
            let err = SyntaxError::new(message, input, engine.fail_pos, config.error_style);
            tracing::debug!(
                line = err.line(),
                column = err.column(),
                memo_entries = engine.memo.len(),
                "parse failed"
            );
            return Err(err.into());
        }

        if let Some(offset) = heredoc_offset(&root) {
            let loc = locate(input, offset);
            tracing::debug!(line = loc.line, column = loc.column, "heredoc reached");
            return Err(ParseError::HeredocUnsupported {
                line: loc.line,
                column: loc.column,
            });
        }

        tracing::debug!(
            len = input.len(),
            complete_commands = root.contents().len(),
            memo_entries = engine.memo.len(),
            "parsed command line"
        );
        Ok(SyntaxTree::new(root))
    }
}

/// Rules whose results are memoized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Rule {
    AndOr,
    Command,
    IoRedirect,
    Word,
}

/// Parse state for a single input.
struct Engine<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    memo: HashMap<(Rule, usize), Option<(Node, usize)>>,
    /// Rightmost offset at which a match failed.
    fail_pos: usize,
    /// What would have been accepted at `fail_pos`.
    expected: Vec<Expected>,
    depth: usize,
    max_depth: usize,
    too_deep: bool,
}

impl<'a> Engine<'a> {
    fn new(src: &'a str, max_depth: usize) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            memo: HashMap::new(),
            fail_pos: 0,
            expected: Vec::new(),
            depth: 0,
            max_depth,
            too_deep: false,
        }
    }

    // ---------------------------------------------------------------------
    // Cursor primitives
    // ---------------------------------------------------------------------

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Record a failure at the current offset.
    fn fail(&mut self, expected: Expected) {
        if self.pos < self.fail_pos {
            return;
        }
        if self.pos > self.fail_pos {
            self.fail_pos = self.pos;
            self.expected.clear();
        }
        self.expected.push(expected);
    }

    /// Match exact text.
    fn lit(&mut self, text: &'static str) -> bool {
        if self.rest().starts_with(text) {
            self.pos += text.len();
            true
        } else {
            self.fail(Expected::Literal(text));
            false
        }
    }

    /// Match an operator that must not be followed by `next`, then skip
    /// trailing blanks.
    fn op_not_followed_by(&mut self, text: &'static str, next: u8) -> bool {
        let start = self.pos;
        if !self.lit(text) {
            return false;
        }
        if self.peek() == Some(next) {
            self.pos = start;
            self.fail(Expected::Literal(text));
            return false;
        }
        self.skip_blanks();
        true
    }

    /// Match an operator, then skip trailing blanks.
    fn op(&mut self, text: &'static str) -> bool {
        if !self.lit(text) {
            return false;
        }
        self.skip_blanks();
        true
    }

    /// Match a reserved word.
    ///
    /// The word must end at a delimiter so that `done` does not match the
    /// start of `doner`.
    fn keyword(&mut self, word: &'static str) -> bool {
        if self.keyword_at(self.pos, word) {
            self.pos += word.len();
            self.skip_blanks();
            true
        } else {
            self.fail(Expected::Literal(word));
            false
        }
    }

    fn keyword_at(&self, pos: usize, word: &str) -> bool {
        self.src[pos..].starts_with(word)
            && self
                .bytes
                .get(pos + word.len())
                .map_or(true, |&b| is_delimiter(b))
    }

    /// Lookahead: does a reserved word start here?
    fn reserved_word_ahead(&self) -> bool {
        RESERVED_WORDS.iter().any(|w| self.keyword_at(self.pos, w))
    }

    /// Skip blanks, line continuations, and a trailing comment.
    fn skip_blanks(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t') => self.pos += 1,
                Some(b'\\') if self.peek_at(1) == Some(b'\n') => self.pos += 2,
                Some(b'#') => {
                    while self.peek().is_some_and(|b| b != b'\n') {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// One or more newlines, each followed by blanks.
    fn newline_list(&mut self) -> bool {
        if self.peek() != Some(b'\n') {
            self.fail(expect::NEWLINE);
            return false;
        }
        while self.peek() == Some(b'\n') {
            self.pos += 1;
            self.skip_blanks();
        }
        true
    }

    /// Optional newlines.
    fn linebreak(&mut self) {
        self.newline_list();
    }

    /// A shell name: `[A-Za-z_][A-Za-z0-9_]*`.
    fn name(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.pos += 1,
            _ => {
                self.fail(expect::NAME);
                return None;
            }
        }
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.pos += 1;
        }
        Some(&self.src[start..self.pos])
    }

    // ---------------------------------------------------------------------
    // Memoization and nesting
    // ---------------------------------------------------------------------

    /// Run `f` once per `(rule, offset)`, replaying the stored outcome on
    /// later calls.
    fn memo(&mut self, rule: Rule, f: impl FnOnce(&mut Self) -> Option<Node>) -> Option<Node> {
        let key = (rule, self.pos);
        if let Some(entry) = self.memo.get(&key) {
            return match entry {
                Some((node, end)) => {
                    self.pos = *end;
                    Some(node.clone())
                }
                None => None,
            };
        }

        let start = self.pos;
        let result = f(self);
        if result.is_none() {
            self.pos = start;
        }
        let entry = result.as_ref().map(|node| (node.clone(), self.pos));
        self.memo.insert(key, entry);
        result
    }

    /// Run `f` one nesting level deeper, failing once the limit is reached.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.max_depth > 0 && self.depth >= self.max_depth {
            self.too_deep = true;
            return None;
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Restore the cursor when `f` fails.
    fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let result = f(self);
        if result.is_none() {
            self.pos = start;
        }
        result
    }
}

/// Offset of the leftmost here-document operator left in the tree.
fn heredoc_offset(root: &Node) -> Option<usize> {
    struct HeredocFinder(Option<usize>);
    impl NodeVisitor for HeredocFinder {
        fn visit_node(&mut self, node: &Node) {
            if matches!(node.kind(), NodeKind::IoHere | NodeKind::IoHereStrip) {
                let offset = node.offset().unwrap_or(0);
                self.0 = Some(self.0.map_or(offset, |seen| seen.min(offset)));
            }
            self.walk_node(node);
        }
    }

    let mut finder = HeredocFinder(None);
    root.traverse(&mut finder);
    finder.0
}

/// Bytes that end a word and delimit a reserved word.
#[inline]
fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t' | b'\n' | b';' | b'&' | b'|' | b'<' | b'>' | b'(' | b')'
    )
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
