// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compound commands: brace groups, subshells, and the control-flow clauses.

use super::Engine;
use crate::ast::{Child, Node, NodeKind};

impl Engine<'_> {
    /// brace_group | subshell | for | case | if | while | until
    pub(super) fn compound_command(&mut self) -> Option<Node> {
        match self.peek()? {
            b'{' => self.brace_group(),
            b'(' => self.subshell(),
            b'f' => self.for_clause(),
            b'c' => self.case_clause(),
            b'i' => self.if_clause(),
            b'w' => self.loop_clause("while", NodeKind::While),
            b'u' => self.loop_clause("until", NodeKind::Until),
            _ => None,
        }
    }

    /// Attach a trailing redirect list to a compound command.
    pub(super) fn with_redirects(&mut self, compound: Node) -> Node {
        let mut redirects = Vec::new();
        while let Some(redirect) = self.io_redirect() {
            redirects.push(Child::Node(redirect));
        }
        if redirects.is_empty() {
            compound
        } else {
            compound.extended(redirects)
        }
    }

    /// linebreak term separator?
    ///
    /// Like a complete command, but newlines also separate terms.
    pub(super) fn compound_list(&mut self) -> Option<Node> {
        self.nested(|p| {
            p.attempt(|p| {
                p.linebreak();
                p.term_list(true)
            })
        })
    }

    /// '{' compound_list '}'
    fn brace_group(&mut self) -> Option<Node> {
        self.attempt(|p| {
            if !p.keyword("{") {
                return None;
            }
            let body = p.compound_list()?;
            if !p.keyword("}") {
                return None;
            }
            Some(Node::wrap(NodeKind::BraceGroup, body))
        })
    }

    /// '(' compound_list ')'
    fn subshell(&mut self) -> Option<Node> {
        self.attempt(|p| {
            if !p.op("(") {
                return None;
            }
            let body = p.compound_list()?;
            if !p.op(")") {
                return None;
            }
            Some(Node::wrap(NodeKind::Subshell, body))
        })
    }

    /// 'do' compound_list 'done'
    fn do_group(&mut self) -> Option<Node> {
        self.attempt(|p| {
            if !p.keyword("do") {
                return None;
            }
            let body = p.compound_list()?;
            if !p.keyword("done") {
                return None;
            }
            Some(Node::wrap(NodeKind::Do, body))
        })
    }

    /// ';' linebreak | newline_list
    fn sequential_sep(&mut self) -> bool {
        if self.op_not_followed_by(";", b';') {
            self.linebreak();
            true
        } else {
            self.newline_list()
        }
    }

    /// 'for' NAME (linebreak 'in' wordlist? sequential_sep | sequential_sep)? do_group
    ///
    /// Without an `in` clause the loop iterates over the positional
    /// parameters, and no `in` node is produced.
    fn for_clause(&mut self) -> Option<Node> {
        self.attempt(|p| {
            if !p.keyword("for") {
                return None;
            }
            let name = p.name()?;
            p.skip_blanks();

            let mut contents = vec![Child::Text(name.to_string())];

            let in_clause = p.attempt(|p| {
                p.linebreak();
                if !p.keyword("in") {
                    return None;
                }
                let mut words = Vec::new();
                while let Some(word) = p.word() {
                    words.push(word);
                }
                if !p.sequential_sep() {
                    return None;
                }
                Some(Node::from_nodes(NodeKind::In, words))
            });
            match in_clause {
                Some(clause) => contents.push(clause.into()),
                None => {
                    p.sequential_sep();
                }
            }

            let body = p.do_group()?;
            contents.push(body.into());
            Some(Node::new(NodeKind::For, contents))
        })
    }

    /// 'case' WORD linebreak 'in' linebreak case_item* 'esac'
    fn case_clause(&mut self) -> Option<Node> {
        self.attempt(|p| {
            if !p.keyword("case") {
                return None;
            }
            let subject = p.word()?;
            p.linebreak();
            if !p.keyword("in") {
                return None;
            }
            p.linebreak();

            let mut contents = vec![subject];
            while let Some((item, terminated)) = p.case_item() {
                contents.push(item);
                if !terminated {
                    break;
                }
            }

            if !p.keyword("esac") {
                return None;
            }
            Some(Node::from_nodes(NodeKind::Case, contents))
        })
    }

    /// '('? pattern ')' (compound_list | linebreak) (';;' linebreak)?
    ///
    /// Returns whether the item was terminated by `;;`; only the last item
    /// may omit it.
    fn case_item(&mut self) -> Option<(Node, bool)> {
        self.attempt(|p| {
            p.op("(");
            let mut patterns = vec![Child::Node(p.word()?)];
            while let Some(alternative) = p.attempt(|p| {
                if !p.op_not_followed_by("|", b'|') {
                    return None;
                }
                p.word()
            }) {
                patterns.push(Child::Node(alternative));
            }
            if !p.op(")") {
                return None;
            }

            let mut contents = vec![Child::List(patterns)];
            match p.compound_list() {
                Some(body) => contents.push(body.into()),
                None => p.linebreak(),
            }

            let terminated = p.op(";;");
            if terminated {
                p.linebreak();
            }
            Some((Node::new(NodeKind::CaseItem, contents), terminated))
        })
    }

    /// 'if' compound_list 'then' compound_list else_part? 'fi'
    fn if_clause(&mut self) -> Option<Node> {
        self.attempt(|p| {
            if !p.keyword("if") {
                return None;
            }
            let node = p.conditional_tail()?;
            if !p.keyword("fi") {
                return None;
            }
            Some(node)
        })
    }

    /// compound_list 'then' compound_list else_part?
    ///
    /// Shared by `if` and `elif`.
    fn conditional_tail(&mut self) -> Option<Node> {
        let condition = self.compound_list()?;
        if !self.keyword("then") {
            return None;
        }
        let consequent = self.compound_list()?;

        let mut contents = vec![
            Node::wrap(NodeKind::Condition, condition),
            Node::wrap(NodeKind::Consequent, consequent),
        ];
        if let Some(else_part) = self.else_part() {
            contents.push(else_part);
        }
        Some(Node::from_nodes(NodeKind::If, contents))
    }

    /// 'elif' compound_list 'then' compound_list else_part? | 'else' compound_list
    ///
    /// An `elif` becomes an `else` holding a nested `if`.
    fn else_part(&mut self) -> Option<Node> {
        self.attempt(|p| {
            if p.keyword("elif") {
                let nested = p.conditional_tail()?;
                return Some(Node::wrap(NodeKind::Else, nested));
            }
            if p.keyword("else") {
                let body = p.compound_list()?;
                return Some(Node::wrap(NodeKind::Else, body));
            }
            None
        })
    }

    /// ('while' | 'until') compound_list do_group
    fn loop_clause(&mut self, keyword: &'static str, kind: NodeKind) -> Option<Node> {
        self.attempt(|p| {
            if !p.keyword(keyword) {
                return None;
            }
            let condition = p.compound_list()?;
            let body = p.do_group()?;
            Some(Node::from_nodes(
                kind,
                vec![Node::wrap(NodeKind::Condition, condition), body],
            ))
        })
    }
}
