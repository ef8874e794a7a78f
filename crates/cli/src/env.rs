// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use shgate_syntax::ParserConfig;

fn parse_usize(var: &str) -> Option<usize> {
    std::env::var(var).ok().and_then(|s| s.trim().parse().ok())
}

// --- Logging ---

/// Log filter directives from SHGATE_LOG.
pub fn log_filter() -> Option<String> {
    std::env::var("SHGATE_LOG").ok().filter(|s| !s.is_empty())
}

// --- Parser limits ---

pub fn max_input() -> Option<usize> {
    parse_usize("SHGATE_MAX_INPUT")
}

pub fn max_depth() -> Option<usize> {
    parse_usize("SHGATE_MAX_DEPTH")
}

/// Parser configuration: defaults overridden by SHGATE_MAX_INPUT and
/// SHGATE_MAX_DEPTH. Unparsable values are ignored.
pub fn parser_config() -> ParserConfig {
    let mut config = ParserConfig::default();
    if let Some(len) = max_input() {
        config = config.max_input_len(len);
    }
    if let Some(depth) = max_depth() {
        config = config.max_depth(depth);
    }
    config
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
