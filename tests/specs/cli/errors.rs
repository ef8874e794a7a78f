//! CLI error handling specs
//!
//! Syntax errors exit 2; everything else that goes wrong exits 1.

use crate::prelude::*;

#[test]
fn syntax_error_shows_caret() {
    cli()
        .args(&["check", "echo 'oops"])
        .fails()
        .code(2)
        .stderr_has("but end of input found.")
        .stderr_has("echo 'oops\n          ^");
}

#[test]
fn bare_syntax_error_is_one_line() {
    cli()
        .args(&["check", "--bare", "if true; then"])
        .fails()
        .code(2)
        .stderr_has("Expected")
        .stderr_has("but end of input found.\n");
}

#[test]
fn heredoc_is_refused() {
    cli()
        .args(&["check", "cat <<EOF"])
        .fails()
        .code(1)
        .stderr_eq("Error: here-documents are not supported (line 1, column 5)\n");
}

#[test]
fn input_limit_from_environment() {
    cli()
        .args(&["dump", "echo a long command line"])
        .env("SHGATE_MAX_INPUT", "8")
        .fails()
        .code(1)
        .stderr_has("exceeding the limit of 8");
}

#[test]
fn missing_command_line() {
    cli()
        .args(&["check"])
        .fails()
        .code(1)
        .stderr_has("pass COMMAND or --stdin");
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cli().args(&["frobnicate"]).fails().code(2);
}
