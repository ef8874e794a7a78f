// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shgate dump`

use anyhow::Result;
use clap::Args;

use super::InputArgs;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn handle(args: DumpArgs, format: OutputFormat) -> Result<()> {
    let source = args.input.read()?;
    let tree = args.input.parse(&source)?;
    match format {
        OutputFormat::Text => println!("{}", tree.root().dump()),
        OutputFormat::Json => print_json(tree.root())?,
    }
    Ok(())
}
