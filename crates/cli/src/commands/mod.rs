// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommands and the input handling they share.

pub mod check;
pub mod dump;

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;
use shgate_syntax::{ErrorStyle, ParseError, Parser, SyntaxTree};

use crate::exit_error::ExitError;

/// Exit code for input that is not valid shell syntax.
pub const EXIT_SYNTAX: i32 = 2;

/// Where the command line comes from and how errors render.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// The shell command line to analyze
    #[arg(value_name = "COMMAND", conflicts_with = "stdin")]
    pub command: Option<String>,

    /// Read the command line from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Print syntax errors without the source line and caret
    #[arg(long)]
    pub bare: bool,
}

impl InputArgs {
    /// Return the command line to parse.
    pub fn read(&self) -> Result<String> {
        if let Some(command) = &self.command {
            return Ok(command.clone());
        }
        if !self.stdin {
            bail!("no command line given; pass COMMAND or --stdin");
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read command line from stdin")?;
        Ok(buf)
    }

    /// Parse `source` with the environment's limits.
    ///
    /// Syntax errors exit with [`EXIT_SYNTAX`]; every other parse failure
    /// is a plain error.
    pub fn parse(&self, source: &str) -> Result<SyntaxTree> {
        let mut config = crate::env::parser_config();
        if self.bare {
            config = config.error_style(ErrorStyle::Bare);
        }
        Parser::parse_with_config(source, &config).map_err(|e| match e {
            ParseError::Syntax(syntax) => ExitError::new(EXIT_SYNTAX, syntax.to_string()).into(),
            other => anyhow::Error::new(other),
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
