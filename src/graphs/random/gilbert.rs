/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::UndirectedGraph;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Generates Gilbert random graphs.
///
/// The Gilbert random graph model (also known as the *G(n, p)* model, often
/// attributed to Erdös and Rényi) is parameterized by the number of nodes `n`
/// and the probability `p` of an edge between any two distinct nodes. Each of
/// the `n(n − 1)/2` unordered pairs is considered exactly once, so the
/// generated graphs have neither loops nor parallel edges.
///
/// The time required to generate a graph is quadratic in `n`.
#[derive(Debug, Clone)]
pub struct Gilbert {
    n: usize,
    p: f64,
    seed: u64,
}

impl Gilbert {
    /// Creates a new Gilbert random graph generator, given the number of
    /// nodes, the probability of an edge between any two nodes, and a seed for
    /// the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Generates the graph.
    pub fn generate(&self) -> UndirectedGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = UndirectedGraph::empty(self.n);
        for x in 0..self.n {
            for y in x + 1..self.n {
                if rng.random_bool(self.p) {
                    graph.add_edge_bounded(x, y);
                }
            }
        }
        graph
    }
}
