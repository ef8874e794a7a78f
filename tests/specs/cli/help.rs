//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("check")
        .stdout_has("dump");
}

#[test]
fn check_help_shows_input_flags() {
    cli()
        .args(&["check", "--help"])
        .passes()
        .stdout_has("--stdin")
        .stdout_has("--bare");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
