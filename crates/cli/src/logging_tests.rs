// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    default         = { false, None, "warn" },
    from_env        = { false, Some("shgate_syntax=trace"), "shgate_syntax=trace" },
    verbose_wins    = { true, Some("error"), "debug" },
    invalid_env     = { false, Some("shgate=loudest"), "warn" },
)]
fn filter_selection(verbose: bool, directives: Option<&str>, expected: &str) {
    assert_eq!(filter(verbose, directives).to_string(), expected);
}
