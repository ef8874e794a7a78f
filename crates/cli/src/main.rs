// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! shgate - decide whether a shell command line needs a shell

mod commands;
mod env;
mod exit_error;
mod logging;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{check, dump};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "shgate",
    version,
    about = "Parse shell command lines and report whether they need a shell"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Log parser decisions to stderr (overrides SHGATE_LOG)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the shell features a command line uses and its literal argv
    Check(check::CheckArgs),
    /// Print the syntax tree of a command line
    Dump(dump::DumpArgs),
}

fn main() {
    if let Err(e) = run() {
        let code = e.downcast_ref::<ExitError>().map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Check(args) => check::handle(args, format),
        Commands::Dump(args) => dump::handle(args, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
