/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::cli::{save_graph, GlobalArgs};
use crate::graphs::random::Gilbert;
use crate::traits::RandomAccessGraph;
use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gilbert", about = "Generates a Gilbert G(n, p) random graph and saves it as an edge list.", long_about = None)]
pub struct CliArgs {
    /// The destination edge list (.csv or .txt).
    pub dst: PathBuf,

    #[arg(short = 'n', long)]
    /// The number of nodes.
    pub nodes: usize,

    #[arg(short, long, default_value_t = 0.5)]
    /// The probability of an edge between two nodes.
    pub prob: f64,

    #[arg(short, long, default_value_t = 0)]
    /// The seed of the pseudorandom number generator.
    pub seed: u64,
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.prob),
        "The probability must be in [0..1], got {}",
        args.prob
    );
    let graph = Gilbert::new(args.nodes, args.prob, args.seed).generate();
    log::info!(
        "Generated a Gilbert graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );
    save_graph(&graph, &args.dst)
}
