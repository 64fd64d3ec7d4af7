/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GlobalArgs, LoadArgs};
use crate::stats::GraphStats;
use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "stats", about = "Prints the number of nodes and edges, the degrees, and the diameter of a graph.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub load: LoadArgs,

    #[arg(long)]
    /// Computes the diameter with a breadth-first visit from every node.
    pub naive: bool,

    #[arg(long)]
    /// Prints the statistics as JSON.
    pub json: bool,

    #[arg(long)]
    /// Prints the degree distribution, one "degree count" pair per line.
    pub histogram: bool,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = args.load.load()?;

    let mut pl = ProgressLogger::default();
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let stats = GraphStats::compute(&graph, args.naive, &mut pl);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", stats);
    if args.histogram {
        println!("Degree distribution:");
        for (degree, &count) in stats.degree_histogram.iter().enumerate() {
            if count != 0 {
                println!("{} {}", degree, count);
            }
        }
    }
    Ok(())
}
