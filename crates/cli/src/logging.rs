// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `--verbose` nor `SHGATE_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// `--verbose` wins over `SHGATE_LOG`; an unparsable `SHGATE_LOG` falls
/// back to the default.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose, crate::env::log_filter().as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
