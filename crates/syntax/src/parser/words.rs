// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Words: quoting, escapes, and `$` / backquote expansions.

use super::{expect, Engine, Rule};
use crate::ast::{Child, Node, NodeKind};
use expect::Expected;

/// Braced parameter operators, longest first so that `%%` is not read as `%`.
const PARAMETER_OPERATORS: &[(&str, NodeKind)] = &[
    (":-", NodeKind::UseDefault),
    (":=", NodeKind::AssignDefault),
    (":?", NodeKind::IndicateError),
    (":+", NodeKind::UseAlternative),
    ("%%", NodeKind::RemoveLargestSuffix),
    ("%", NodeKind::RemoveSmallestSuffix),
    ("##", NodeKind::RemoveLargestPrefix),
    ("#", NodeKind::RemoveSmallestPrefix),
    ("-", NodeKind::UseDefaultUnset),
    ("=", NodeKind::AssignDefaultUnset),
    ("?", NodeKind::IndicateErrorUnset),
    ("+", NodeKind::UseAlternativeUnset),
];

/// Special parameters: `$@`, `$*`, `$#`, `$?`, `$-`, `$$`, `$!`, `$0`.
fn is_special_parameter(b: u8) -> bool {
    matches!(b, b'@' | b'*' | b'#' | b'?' | b'-' | b'$' | b'!' | b'0')
}

/// Bytes that end an unquoted run of text.
fn is_word_break(b: u8, braced: bool) -> bool {
    matches!(
        b,
        b' ' | b'\t'
            | b'\n'
            | b'|'
            | b'&'
            | b';'
            | b'<'
            | b'>'
            | b'('
            | b')'
            | b'$'
            | b'`'
            | b'\\'
            | b'"'
            | b'\''
    ) || (braced && b == b'}')
}

/// Collects quoted text, merging adjacent runs into one text child.
#[derive(Default)]
struct QuotedContents {
    contents: Vec<Child>,
    text: String,
}

impl QuotedContents {
    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn push_node(&mut self, node: Node) {
        self.flush();
        self.contents.push(Child::Node(node));
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            self.contents.push(Child::Text(std::mem::take(&mut self.text)));
        }
    }

    fn finish(mut self, kind: NodeKind) -> Node {
        self.flush();
        Node::new(kind, self.contents)
    }
}

impl<'a> Engine<'a> {
    /// word_part+ followed by blanks.
    pub(super) fn word(&mut self) -> Option<Node> {
        self.memo(Rule::Word, |p| {
            let parts = p.word_parts(false);
            if parts.is_empty() {
                return None;
            }
            p.skip_blanks();
            Some(Node::from_nodes(NodeKind::Word, parts))
        })
    }

    /// Zero or more word parts. Inside `${...}` operands, `braced` stops
    /// unquoted text at `}`.
    pub(super) fn word_parts(&mut self, braced: bool) -> Vec<Node> {
        let mut parts = Vec::new();
        while let Some(part) = self.word_part(braced) {
            parts.push(part);
        }
        parts
    }

    fn word_part(&mut self, braced: bool) -> Option<Node> {
        match self.peek() {
            Some(b'\'') => self.single_quote(),
            Some(b'"') => self.double_quote(),
            Some(b'`') => self.backquote(false),
            Some(b'$') => self.dollar(),
            Some(b'\\') => self.bare_escape(),
            _ => self.unquoted_literal(braced),
        }
    }

    fn unquoted_literal(&mut self, braced: bool) -> Option<Node> {
        let start = self.pos;
        while self.peek().is_some_and(|b| !is_word_break(b, braced)) {
            self.pos += 1;
        }
        if self.pos == start {
            self.fail(expect::UNQUOTED_CHAR);
            return None;
        }
        Some(Node::leaf(
            NodeKind::UnquotedLiteral,
            &self.src[start..self.pos],
        ))
    }

    /// `'...'`: no escapes are recognized inside.
    fn single_quote(&mut self) -> Option<Node> {
        let start = self.pos;
        self.pos += 1;
        match self.rest().find('\'') {
            Some(len) => {
                let text = &self.src[self.pos..self.pos + len];
                self.pos += len + 1;
                Some(Node::leaf(NodeKind::SingleQuote, text))
            }
            None => {
                self.pos = self.bytes.len();
                self.fail(Expected::Literal("'"));
                self.fail(expect::SQUOTED_CHAR);
                self.pos = start;
                None
            }
        }
    }

    /// `\` followed by any character. An escaped newline is a line
    /// continuation and contributes no text.
    fn bare_escape(&mut self) -> Option<Node> {
        let start = self.pos;
        self.pos += 1;
        let Some(c) = self.rest().chars().next() else {
            self.fail(expect::ANY_CHAR);
            self.pos = start;
            return None;
        };
        self.pos += c.len_utf8();
        let text = if c == '\n' { String::new() } else { c.to_string() };
        Some(Node::leaf(NodeKind::BareEscape, text))
    }

    /// `"..."` holding text, escapes, and expansions.
    fn double_quote(&mut self) -> Option<Node> {
        let start = self.pos;
        self.pos += 1;
        let mut quoted = QuotedContents::default();

        loop {
            match self.peek() {
                None => {
                    for expected in [
                        Expected::Literal("\""),
                        Expected::Literal("\\"),
                        Expected::Literal("`"),
                        Expected::Literal("$"),
                        expect::DQUOTED_CHAR,
                    ] {
                        self.fail(expected);
                    }
                    self.pos = start;
                    return None;
                }
                Some(b'"') => {
                    self.pos += 1;
                    return Some(quoted.finish(NodeKind::DoubleQuote));
                }
                Some(b'\\') => match self.peek_at(1) {
                    Some(c @ (b'$' | b'`' | b'"' | b'\\')) => {
                        quoted.push_node(Node::leaf(
                            NodeKind::DquotedEscape,
                            char::from(c).to_string(),
                        ));
                        self.pos += 2;
                    }
                    Some(b'\n') => {
                        quoted.push_node(Node::leaf(NodeKind::DquotedEscape, ""));
                        self.pos += 2;
                    }
                    // Any other backslash is kept as-is.
                    _ => {
                        quoted.push_text("\\");
                        self.pos += 1;
                    }
                },
                Some(b'`') => {
                    let Some(node) = self.backquote(true) else {
                        self.pos = start;
                        return None;
                    };
                    quoted.push_node(node);
                }
                Some(b'$') => {
                    let Some(node) = self.dollar() else {
                        self.pos = start;
                        return None;
                    };
                    quoted.push_node(node);
                }
                Some(_) => {
                    let run_start = self.pos;
                    while self
                        .peek()
                        .is_some_and(|b| !matches!(b, b'"' | b'\\' | b'`' | b'$'))
                    {
                        self.pos += 1;
                    }
                    quoted.push_text(&self.src[run_start..self.pos]);
                }
            }
        }
    }

    /// `` `...` `` command substitution.
    ///
    /// The body is kept as text; only `` \` ``, `\$`, `\\`, and inside
    /// double quotes `\"`, are recognized as escapes.
    fn backquote(&mut self, in_dquote: bool) -> Option<Node> {
        let start = self.pos;
        self.pos += 1;
        let mut quoted = QuotedContents::default();

        loop {
            match self.peek() {
                None => {
                    self.fail(Expected::Literal("`"));
                    self.fail(Expected::Literal("\\"));
                    self.fail(expect::BACKQUOTED_CHAR);
                    self.pos = start;
                    return None;
                }
                Some(b'`') => {
                    self.pos += 1;
                    let kind = if in_dquote {
                        NodeKind::DoubleBackquote
                    } else {
                        NodeKind::Backquote
                    };
                    return Some(quoted.finish(kind));
                }
                Some(b'\\') => match self.peek_at(1) {
                    Some(c @ (b'`' | b'$' | b'\\')) => {
                        quoted.push_node(Node::leaf(
                            NodeKind::BackquotedEscape,
                            char::from(c).to_string(),
                        ));
                        self.pos += 2;
                    }
                    Some(b'"') if in_dquote => {
                        quoted.push_node(Node::leaf(NodeKind::BackquotedEscape, "\""));
                        self.pos += 2;
                    }
                    _ => {
                        quoted.push_text("\\");
                        self.pos += 1;
                    }
                },
                Some(_) => {
                    let run_start = self.pos;
                    while self.peek().is_some_and(|b| !matches!(b, b'`' | b'\\')) {
                        self.pos += 1;
                    }
                    quoted.push_text(&self.src[run_start..self.pos]);
                }
            }
        }
    }

    /// `$` expansions: arithmetic, command, braced, and plain parameters.
    fn dollar(&mut self) -> Option<Node> {
        if self.rest().starts_with("$((") {
            // `$((` may also open a command expansion of a subshell.
            if let Some(node) = self.arithmetic_expansion() {
                return Some(node);
            }
        }
        if self.rest().starts_with("$(") {
            return self.command_expansion();
        }
        if self.rest().starts_with("${") {
            return self.braced_expansion();
        }

        let start = self.pos;
        self.pos += 1;
        let node = match self.peek() {
            Some(b) if is_special_parameter(b) => {
                self.pos += 1;
                Node::leaf(NodeKind::SpecialParameter, char::from(b).to_string())
            }
            Some(b @ b'1'..=b'9') => {
                self.pos += 1;
                Node::leaf(NodeKind::PositionalParameter, char::from(b).to_string())
            }
            _ => match self.name() {
                Some(name) => Node::leaf(NodeKind::NamedParameter, name),
                None => {
                    self.fail(Expected::Literal("("));
                    self.fail(Expected::Literal("{"));
                    // A bare `$` is never taken as literal text.
                    self.fail(expect::DOLLAR_PARAMETER);
                    self.pos = start;
                    return None;
                }
            },
        };
        Some(node)
    }

    /// `$((` word* `))`
    fn arithmetic_expansion(&mut self) -> Option<Node> {
        self.nested(|p| {
            p.attempt(|p| {
                p.pos += 3;
                p.skip_blanks();
                let mut words = Vec::new();
                while let Some(word) = p.word() {
                    words.push(word);
                }
                if !p.lit("))") {
                    return None;
                }
                Some(Node::from_nodes(NodeKind::ArithmeticExpansion, words))
            })
        })
    }

    /// `$(` complete_commands `)`
    fn command_expansion(&mut self) -> Option<Node> {
        self.nested(|p| {
            p.attempt(|p| {
                p.pos += 2;
                p.skip_blanks();
                p.linebreak();
                let commands = p.complete_commands();
                p.linebreak();
                if !p.lit(")") {
                    return None;
                }
                Some(Node::from_nodes(NodeKind::CommandExpansion, commands))
            })
        })
    }

    /// `${#param}`, `${param op word}`, or `${param}`.
    fn braced_expansion(&mut self) -> Option<Node> {
        if let Some(node) = self.attempt(|p| {
            p.pos += 2;
            if !p.lit("#") {
                return None;
            }
            let param = p.braced_parameter()?;
            if !p.lit("}") {
                return None;
            }
            Some(Node::leaf(NodeKind::StringLength, param))
        }) {
            return Some(node);
        }

        if let Some(node) = self.attempt(|p| {
            p.pos += 2;
            let param = p.braced_parameter()?;
            let kind = PARAMETER_OPERATORS
                .iter()
                .find_map(|&(text, kind)| p.lit(text).then_some(kind))?;
            let operand = p.nested(|p| Some(p.word_parts(true)))?;
            if !p.lit("}") {
                return None;
            }
            Some(Node::new(
                kind,
                vec![
                    Child::Text(param.to_string()),
                    Node::from_nodes(NodeKind::Word, operand).into(),
                ],
            ))
        }) {
            return Some(node);
        }

        self.attempt(|p| {
            p.pos += 2;
            let param = p.braced_parameter()?;
            if !p.lit("}") {
                return None;
            }
            Some(Node::leaf(NodeKind::BracedParameterExpansion, param))
        })
    }

    /// A name, a run of digits, or one special parameter character.
    fn braced_parameter(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek() {
            Some(b) if b.is_ascii_digit() => {
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
                Some(&self.src[start..self.pos])
            }
            Some(b) if is_special_parameter(b) => {
                self.pos += 1;
                Some(&self.src[start..self.pos])
            }
            _ => {
                let name = self.name();
                if name.is_none() {
                    self.fail(expect::PARAMETER);
                }
                name
            }
        }
    }
}
