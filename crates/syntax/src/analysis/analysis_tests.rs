// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Parser;

#[test]
fn results_are_cached() {
    let tree = Parser::parse("ls | wc -l").unwrap();
    let info = tree.info();
    let first = info.feature_list();
    let second = info.feature_list();
    assert!(std::ptr::eq(first, second));
    assert!(info.literal_argv().is_none());
}

#[test]
fn has_feature() {
    let tree = Parser::parse("FOO=1 cmd > out").unwrap();
    let info = tree.info();
    assert!(info.has_feature(Feature::Assignment));
    assert!(info.has_feature(Feature::Redirect));
    assert!(!info.has_feature(Feature::Pipeline));
}

#[test]
fn describe_literal_command() {
    let tree = Parser::parse("echo 'a b'").unwrap();
    let report = tree.info().describe();
    assert_eq!(
        report,
        AnalysisReport {
            features: vec![],
            literal_argv: Some(vec!["echo".to_string(), "a b".to_string()]),
        }
    );
}

#[test]
fn describe_serializes() {
    let tree = Parser::parse("cat $1 | sort &").unwrap();
    let json = serde_json::to_value(tree.info().describe()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "features": ["background", "pipeline", "parameter"],
            "literal_argv": null,
        })
    );
}

#[test]
fn analyzers_are_independent() {
    let tree = Parser::parse("echo hi").unwrap();
    let a = tree.info();
    let b = tree.info();
    assert_eq!(a.literal_argv(), b.literal_argv());
}
