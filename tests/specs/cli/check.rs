//! `shgate check` specs
//!
//! Features are reported in a fixed order; argv only for literal commands.

use crate::prelude::*;

#[test]
fn literal_command_reports_argv() {
    cli()
        .args(&["check", "echo 'hello world'"])
        .passes()
        .stdout_eq("features: none\nargv: [\"echo\", \"hello world\"]\n");
}

#[test]
fn shell_command_reports_features() {
    cli()
        .args(&["check", "ls $HOME > out && cat out &"])
        .passes()
        .stdout_eq("features: list, background, redirect, parameter\nargv: not literal\n");
}

#[test]
fn reads_from_stdin() {
    cli()
        .args(&["check", "--stdin"])
        .stdin("git commit -m \"fix \\\"it\\\"\"\n")
        .passes()
        .stdout_eq("features: none\nargv: [\"git\", \"commit\", \"-m\", \"fix \\\"it\\\"\"]\n");
}

#[test]
fn json_report() {
    let run = cli()
        .args(&["check", "-o", "json", "for f in *; do rm $f; done"])
        .passes();
    let json = run.json();
    assert_eq!(
        json["features"],
        serde_json::json!(["compound", "parameter"])
    );
    assert!(json["literal_argv"].is_null());
}

#[test]
fn json_report_for_literal_command() {
    let json = cli().args(&["check", "--output", "json", "ls -la"]).passes().json();
    assert_eq!(json["features"], serde_json::json!([]));
    assert_eq!(json["literal_argv"], serde_json::json!(["ls", "-la"]));
}

#[test]
fn empty_input_is_literal_with_no_argv() {
    cli()
        .args(&["check", "--stdin"])
        .stdin("   \n")
        .passes()
        .stdout_eq("features: none\nargv: not literal\n");
}
