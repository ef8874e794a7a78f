// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults() {
    let config = ParserConfig::default();
    assert_eq!(config.max_input_len, DEFAULT_MAX_INPUT_LEN);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.error_style, ErrorStyle::Context);
}

#[test]
fn builder_setters() {
    let config = ParserConfig::default()
        .max_input_len(10)
        .max_depth(3)
        .error_style(ErrorStyle::Bare);
    assert_eq!(config.max_input_len, 10);
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.error_style, ErrorStyle::Bare);
}

#[test]
fn unlimited_disables_limits() {
    let config = ParserConfig::unlimited();
    assert_eq!(config.max_input_len, 0);
    assert_eq!(config.max_depth, 0);
}

#[test]
fn deserializes_partial_config() {
    let config: ParserConfig =
        serde_json::from_str(r#"{ "max_depth": 8, "error_style": "bare" }"#).unwrap();
    assert_eq!(config.max_depth, 8);
    assert_eq!(config.max_input_len, DEFAULT_MAX_INPUT_LEN);
    assert_eq!(config.error_style, ErrorStyle::Bare);
}
