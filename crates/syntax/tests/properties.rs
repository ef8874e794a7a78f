// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests for determinism and literal-argv soundness.

use proptest::prelude::*;
use shgate_syntax::{Feature, Parser};

/// Features that mean the command line cannot run without a shell.
const SHELL_ONLY: &[Feature] = &[
    Feature::List,
    Feature::Background,
    Feature::Pipeline,
    Feature::Compound,
    Feature::CommandExpansion,
    Feature::Parameter,
    Feature::ExoticExpansion,
];

proptest! {
    #[test]
    fn parsing_is_deterministic(input in "[ -~\n]{0,80}") {
        prop_assert_eq!(Parser::parse(&input), Parser::parse(&input));
    }

    #[test]
    fn literal_argv_never_hides_expansions(input in r#"[a-z$`'"\\ |;&(){}#=<>]{0,40}"#) {
        if let Ok(tree) = Parser::parse(&input) {
            let info = tree.info();
            // Prefix assignments and redirect targets are not argv words.
            let argv_only = !info.has_feature(Feature::Assignment)
                && !info.has_feature(Feature::Redirect);
            if argv_only && info.literal_argv().is_some() {
                for feature in SHELL_ONLY {
                    prop_assert!(!info.has_feature(*feature), "{:?} in {:?}", feature, input);
                }
            }
        }
    }

    #[test]
    fn single_quoted_text_is_verbatim(text in "[^']{0,30}") {
        let input = format!("printf '{text}'");
        let tree = Parser::parse(&input).unwrap();
        let expected = vec!["printf".to_string(), text];
        let info = tree.info();
        prop_assert_eq!(info.literal_argv(), Some(expected.as_slice()));
    }

    #[test]
    fn pipes_always_report_pipeline(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let tree = Parser::parse(&format!("{a} x | {b}"));
        // Reserved words such as `if` are not commands.
        if let Ok(tree) = tree {
            let info = tree.info();
            prop_assert!(info.has_feature(Feature::Pipeline));
            prop_assert!(info.literal_argv().is_none());
        }
    }
}
