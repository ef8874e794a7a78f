// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shgate check`

use anyhow::Result;
use clap::Args;
use shgate_syntax::AnalysisReport;

use super::InputArgs;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn handle(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let source = args.input.read()?;
    let tree = args.input.parse(&source)?;
    let report = tree.info().describe();
    tracing::debug!(
        features = report.features.len(),
        literal = report.literal_argv.is_some(),
        "analyzed command line"
    );

    match format {
        OutputFormat::Text => print!("{}", format_report(&report)),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

/// Two lines: the features used, then the literal argv.
pub(crate) fn format_report(report: &AnalysisReport) -> String {
    let features = if report.features.is_empty() {
        "none".to_string()
    } else {
        report
            .features
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let argv = match &report.literal_argv {
        Some(argv) => format!("{:?}", argv),
        None => "not literal".to_string(),
    };
    format!("features: {}\nargv: {}\n", features, argv)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
