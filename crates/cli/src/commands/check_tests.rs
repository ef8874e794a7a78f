// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use shgate_syntax::{Feature, Parser};

use super::*;

fn report(input: &str) -> String {
    format_report(&Parser::parse(input).unwrap().info().describe())
}

#[test]
fn literal_command() {
    assert_eq!(
        report("echo hello"),
        "features: none\nargv: [\"echo\", \"hello\"]\n"
    );
}

#[test]
fn shell_command() {
    assert_eq!(
        report("FOO=bar echo $FOO | wc"),
        "features: pipeline, parameter, assignment\nargv: not literal\n"
    );
}

#[test]
fn quotes_in_argv_are_escaped() {
    let report = AnalysisReport {
        features: vec![Feature::Redirect],
        literal_argv: Some(vec!["say".into(), "\"hi\"".into()]),
    };
    assert_eq!(
        format_report(&report),
        "features: redirect\nargv: [\"say\", \"\\\"hi\\\"\"]\n"
    );
}
