/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GlobalArgs, LoadArgs};
use crate::distances::diameter::{naive_diameter, Diameter};
use crate::stats::OrUndefined;
use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "diameter", about = "Computes the diameter of a graph, pruning pendant trees before running breadth-first visits (the diameter is printed on stdout).", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub load: LoadArgs,

    #[arg(long)]
    /// Computes the diameter with a breadth-first visit from every node.
    pub naive: bool,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = args.load.load()?;

    let mut pl = ProgressLogger::default();
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let diameter = if args.naive {
        naive_diameter(&graph, &mut pl)
    } else {
        Diameter::run(&graph, &mut pl).map(|report| report.diameter)
    };

    println!("Diameter: {}", OrUndefined(diameter));
    Ok(())
}
