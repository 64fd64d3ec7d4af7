/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::UndirectedGraph;
use crate::traits::RandomAccessGraph;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Generates Barabási–Albert preferential-attachment graphs.
///
/// Generation starts from a clique on nodes 0, 1 and 2. Then nodes are added
/// one at a time: node `i` scans the existing nodes `j` in increasing order
/// and connects to `j` with probability proportional to its current degree
/// (precisely, if a number drawn uniformly at random below twice the current
/// number of edges is at most the degree of `j`), until it has `m` edges or
/// no node is left to scan.
#[derive(Debug, Clone)]
pub struct BarabasiAlbert {
    n: usize,
    m: usize,
    seed: u64,
}

impl BarabasiAlbert {
    /// The default number of edges added with each new node.
    pub const DEFAULT_EDGES_PER_NODE: usize = 2;

    /// Creates a new Barabási–Albert random graph generator, given the number
    /// of nodes, the number of edges added with each new node, and a seed for
    /// the [pseudorandom number generator](SmallRng).
    ///
    /// # Panics
    ///
    /// If `n` is smaller than three, as the initial clique would not fit.
    pub fn new(n: usize, m: usize, seed: u64) -> Self {
        assert!(n >= 3, "A Barabási–Albert graph needs at least 3 nodes");
        Self { n, m, seed }
    }

    /// Generates the graph.
    pub fn generate(&self) -> UndirectedGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = UndirectedGraph::empty(self.n);
        graph.add_edge_bounded(0, 1);
        graph.add_edge_bounded(0, 2);
        graph.add_edge_bounded(1, 2);

        for i in 3..self.n {
            let mut added = 0;
            for j in 0..i {
                if added == self.m {
                    break;
                }
                if rng.random_range(0..2 * graph.num_edges()) <= graph.degree(j) {
                    graph.add_edge_bounded(i, j);
                    added += 1;
                }
            }
        }
        graph
    }
}
