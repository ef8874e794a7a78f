// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches};

use super::{format_error, Cli, Commands, ExitError, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    let matches = Cli::command().try_get_matches_from(args).unwrap();
    Cli::from_arg_matches(&matches).unwrap()
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn check_with_command_argument() {
    let cli = parse(&["shgate", "check", "echo hi"]);
    let Some(Commands::Check(args)) = cli.command else {
        panic!("expected check");
    };
    assert_eq!(args.input.command.as_deref(), Some("echo hi"));
    assert!(!args.input.stdin);
    assert_eq!(cli.output, OutputFormat::Text);
}

#[test]
fn output_flag_is_global() {
    let cli = parse(&["shgate", "dump", "ls", "-o", "json"]);
    assert_eq!(cli.output, OutputFormat::Json);
    assert!(matches!(cli.command, Some(Commands::Dump(_))));
}

#[test]
fn verbose_flag() {
    let cli = parse(&["shgate", "-v", "check", "--stdin"]);
    assert!(cli.verbose);
}

#[test]
fn stdin_conflicts_with_command_argument() {
    let err = Cli::command()
        .try_get_matches_from(["shgate", "check", "--stdin", "ls"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn version_flag() {
    let err = Cli::command()
        .try_get_matches_from(["shgate", "--version"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn format_error_skips_redundant_chain() {
    let err = anyhow::Error::new(ExitError::new(2, "bad input".into()));
    assert_eq!(format_error(&err), "bad input");
}

#[test]
fn format_error_renders_context_chain() {
    let err = anyhow::anyhow!("disk on fire").context("failed to read command line");
    assert_eq!(
        format_error(&err),
        "failed to read command line\n\nCaused by:\n    0: disk on fire"
    );
}
