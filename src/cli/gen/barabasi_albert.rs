/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::cli::{save_graph, GlobalArgs};
use crate::graphs::random::BarabasiAlbert;
use crate::traits::RandomAccessGraph;
use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "barabasi-albert", about = "Generates a Barabási–Albert preferential-attachment graph and saves it as an edge list.", long_about = None)]
pub struct CliArgs {
    /// The destination edge list (.csv or .txt).
    pub dst: PathBuf,

    #[arg(short = 'n', long)]
    /// The number of nodes (at least 3).
    pub nodes: usize,

    #[arg(short = 'm', long, default_value_t = BarabasiAlbert::DEFAULT_EDGES_PER_NODE)]
    /// The number of edges added with each new node.
    pub edges_per_node: usize,

    #[arg(short, long, default_value_t = 0)]
    /// The seed of the pseudorandom number generator.
    pub seed: u64,
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(
        args.nodes >= 3,
        "A Barabási–Albert graph needs at least 3 nodes, got {}",
        args.nodes
    );
    let graph = BarabasiAlbert::new(args.nodes, args.edges_per_node, args.seed).generate();
    log::info!(
        "Generated a Barabási–Albert graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );
    save_graph(&graph, &args.dst)
}
