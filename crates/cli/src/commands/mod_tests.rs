// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn input(command: &str) -> InputArgs {
    InputArgs {
        command: Some(command.to_string()),
        ..InputArgs::default()
    }
}

#[test]
fn read_prefers_command_argument() {
    assert_eq!(input("ls -l").read().unwrap(), "ls -l");
}

#[test]
fn read_without_source_fails() {
    let err = InputArgs::default().read().unwrap_err();
    assert!(err.to_string().contains("--stdin"));
}

#[test]
fn syntax_error_exits_with_syntax_code() {
    let args = input("echo 'x");
    let err = args.parse("echo 'x").unwrap_err();
    let exit = err.downcast_ref::<ExitError>().unwrap();
    assert_eq!(exit.code, EXIT_SYNTAX);
    assert!(exit.message.ends_with('^'), "{}", exit.message);
}

#[test]
fn bare_syntax_error_has_no_caret() {
    let args = InputArgs {
        bare: true,
        ..input("echo )")
    };
    let err = args.parse("echo )").unwrap_err();
    let exit = err.downcast_ref::<ExitError>().unwrap();
    assert!(!exit.message.contains('\n'));
    assert!(exit.message.starts_with("Expected"));
}

#[test]
fn heredoc_is_a_plain_error() {
    let err = input("cat <<EOF").parse("cat <<EOF").unwrap_err();
    assert!(err.downcast_ref::<ExitError>().is_none());
    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::HeredocUnsupported { .. })
    ));
}
