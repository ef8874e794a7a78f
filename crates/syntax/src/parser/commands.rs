// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program structure: command lists, and-or chains, pipelines, and simple
//! commands.

use super::{expect, Engine, Rule};
use crate::ast::{Child, Node, NodeKind};

/// Separator that ended a term of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// `&`: the preceding term runs in the background.
    Amp,
    /// `;` or newline.
    Sequential,
}

impl Engine<'_> {
    /// Parse the whole input.
    ///
    /// Grammar: linebreak complete_commands? linebreak
    ///
    /// Always succeeds; the caller checks that the input was consumed.
    pub(super) fn program(&mut self) -> Node {
        self.skip_blanks();
        self.linebreak();
        let commands = self.complete_commands();
        self.linebreak();
        Node::from_nodes(NodeKind::Program, commands)
    }

    /// complete_command (newline_list complete_command)*
    pub(super) fn complete_commands(&mut self) -> Vec<Node> {
        let mut commands = Vec::new();
        let Some(first) = self.complete_command() else {
            return commands;
        };
        commands.push(first);

        while let Some(next) = self.attempt(|p| {
            if !p.newline_list() {
                return None;
            }
            p.complete_command()
        }) {
            commands.push(next);
        }
        commands
    }

    /// and_or ((';' | '&') and_or)* (';' | '&')?
    fn complete_command(&mut self) -> Option<Node> {
        let list = self.term_list(false)?;
        Some(Node::wrap(NodeKind::CompleteCommand, list))
    }

    /// A list of and-or terms joined by separators.
    ///
    /// A term followed by `&` is wrapped in a `background` node. More than
    /// one term yields a `list` node; a single term is returned unwrapped.
    /// When `newlines` is set (inside compound commands), newlines separate
    /// terms as well.
    pub(super) fn term_list(&mut self, newlines: bool) -> Option<Node> {
        let mut current = self.and_or()?;
        let mut terms = Vec::new();

        loop {
            let Some(sep) = self.separator(newlines) else {
                terms.push(current);
                break;
            };
            let finished = match sep {
                Separator::Amp => Node::wrap(NodeKind::Background, current),
                Separator::Sequential => current,
            };
            terms.push(finished);
            match self.and_or() {
                Some(next) => current = next,
                // The separator was trailing.
                None => break,
            }
        }

        if terms.len() == 1 {
            terms.pop()
        } else {
            Some(Node::from_nodes(NodeKind::List, terms))
        }
    }

    /// '&' | ';', followed by newlines when `newlines` is set; or, when
    /// `newlines` is set, a bare newline list.
    fn separator(&mut self, newlines: bool) -> Option<Separator> {
        let sep = if self.op_not_followed_by("&", b'&') {
            Separator::Amp
        } else if self.op_not_followed_by(";", b';') {
            Separator::Sequential
        } else if newlines && self.newline_list() {
            return Some(Separator::Sequential);
        } else {
            return None;
        };
        if newlines {
            self.linebreak();
        }
        Some(sep)
    }

    /// pipeline (('&&' | '||') linebreak pipeline)*
    ///
    /// Both operators have equal precedence and associate to the left.
    fn and_or(&mut self) -> Option<Node> {
        self.memo(Rule::AndOr, |p| {
            let mut left = p.pipeline()?;
            loop {
                let next = p.attempt(|p| {
                    let kind = if p.op("&&") {
                        NodeKind::AndIf
                    } else if p.op("||") {
                        NodeKind::OrIf
                    } else {
                        return None;
                    };
                    p.linebreak();
                    let right = p.pipeline()?;
                    Some((kind, right))
                });
                match next {
                    Some((kind, right)) => left = Node::from_nodes(kind, vec![left, right]),
                    None => break,
                }
            }
            Some(left)
        })
    }

    /// '!'? pipe_sequence
    fn pipeline(&mut self) -> Option<Node> {
        self.attempt(|p| {
            let bang = p.keyword("!");
            let sequence = p.pipe_sequence()?;
            Some(if bang {
                Node::wrap(NodeKind::Bang, sequence)
            } else {
                sequence
            })
        })
    }

    /// command ('|' linebreak command)*
    fn pipe_sequence(&mut self) -> Option<Node> {
        let first = self.command()?;
        let mut stages = vec![first];

        while let Some(next) = self.attempt(|p| {
            if !p.op_not_followed_by("|", b'|') {
                return None;
            }
            p.linebreak();
            p.command()
        }) {
            stages.push(next);
        }

        if stages.len() == 1 {
            stages.pop()
        } else {
            Some(Node::from_nodes(NodeKind::Pipeline, stages))
        }
    }

    /// function_definition | compound_command redirect_list? | simple_command
    pub(super) fn command(&mut self) -> Option<Node> {
        self.memo(Rule::Command, |p| {
            if let Some(function) = p.function_definition() {
                return Some(function);
            }
            if let Some(compound) = p.compound_command() {
                return Some(p.with_redirects(compound));
            }
            p.simple_command()
        })
    }

    /// NAME '(' ')' linebreak function_body
    fn function_definition(&mut self) -> Option<Node> {
        if self.reserved_word_ahead() {
            return None;
        }
        self.attempt(|p| {
            let name = p.name()?;
            p.skip_blanks();
            if !p.op("(") || !p.op(")") {
                return None;
            }
            p.linebreak();
            let body = p.compound_command()?;
            let body = p.with_redirects(body);
            Some(Node::from_nodes(
                NodeKind::FunctionDefinition,
                vec![Node::leaf(NodeKind::FunctionName, name), body],
            ))
        })
    }

    /// cmd_prefix? (cmd_word cmd_suffix?)?
    ///
    /// At least one of the prefix or the command word must be present. The
    /// prefix is kept as a `cmd_prefix` node; the command word and every
    /// suffix item become direct children so that the argument words sit
    /// next to each other in source order.
    fn simple_command(&mut self) -> Option<Node> {
        let prefix = self.cmd_prefix();
        let mut contents: Vec<Child> = Vec::new();
        let has_prefix = !prefix.is_empty();
        if has_prefix {
            contents.push(Node::from_nodes(NodeKind::CmdPrefix, prefix).into());
        }

        match self.cmd_word() {
            Some(name) => {
                contents.push(name.into());
                contents.extend(self.cmd_suffix().into_iter().map(Child::from));
            }
            None if !has_prefix => return None,
            None => {}
        }
        Some(Node::new(NodeKind::SimpleCommand, contents))
    }

    /// (io_redirect | ASSIGNMENT_WORD)*
    fn cmd_prefix(&mut self) -> Vec<Node> {
        let mut items = Vec::new();
        loop {
            if let Some(redirect) = self.io_redirect() {
                items.push(redirect);
            } else if let Some(assignment) = self.assignment() {
                items.push(assignment);
            } else {
                break;
            }
        }
        items
    }

    /// A word that is not a reserved word.
    fn cmd_word(&mut self) -> Option<Node> {
        if self.reserved_word_ahead() {
            self.fail(expect::COMMAND_NAME);
            return None;
        }
        self.word()
    }

    /// (io_redirect | WORD)*
    fn cmd_suffix(&mut self) -> Vec<Node> {
        let mut items = Vec::new();
        loop {
            if let Some(redirect) = self.io_redirect() {
                items.push(redirect);
            } else if let Some(word) = self.word() {
                items.push(word);
            } else {
                break;
            }
        }
        items
    }

    /// NAME '=' word_part*
    ///
    /// Produces `assignment` with the name as text followed by a `word`
    /// node for the value, which may have no parts.
    fn assignment(&mut self) -> Option<Node> {
        self.attempt(|p| {
            let name = p.name()?;
            if !p.lit("=") {
                return None;
            }
            let value = p.word_parts(false);
            p.skip_blanks();
            Some(Node::new(
                NodeKind::Assignment,
                vec![
                    Child::Text(name.to_string()),
                    Node::from_nodes(NodeKind::Word, value).into(),
                ],
            ))
        })
    }
}
