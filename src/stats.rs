/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Structural statistics of a graph.

use crate::distances::diameter::{calc_distance, naive_diameter};
use crate::graphs::UndirectedGraph;
use crate::traits::RandomAccessGraph;
use dsi_progress_logger::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

/// Statistics about an undirected graph.
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// The number of nodes.
    pub num_nodes: usize,
    /// The number of edges.
    pub num_edges: usize,
    /// The maximum degree, or `None` if the graph has no nodes.
    pub max_degree: Option<usize>,
    /// The average degree, or `None` if the graph has no nodes.
    pub avg_degree: Option<f64>,
    /// The number of nodes of each degree.
    pub degree_histogram: Vec<usize>,
    /// The diameter, or `None` if the graph has no nodes.
    pub diameter: Option<usize>,
    /// The time spent computing the statistics.
    pub duration: Duration,
}

impl GraphStats {
    /// Computes the statistics of `graph`.
    ///
    /// If `naive` is true, the diameter is computed with a visit from every
    /// node using [`naive_diameter`]; otherwise, [`calc_distance`] is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphstat::graphs::UndirectedGraph;
    /// use graphstat::stats::GraphStats;
    /// use dsi_progress_logger::no_logging;
    ///
    /// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (1, 3)]);
    /// let stats = GraphStats::compute(&graph, false, no_logging![]);
    /// assert_eq!(stats.num_edges, 3);
    /// assert_eq!(stats.max_degree, Some(3));
    /// assert_eq!(stats.avg_degree, Some(1.5));
    /// assert_eq!(stats.degree_histogram, vec![0, 3, 0, 1]);
    /// assert_eq!(stats.diameter, Some(2));
    /// ```
    pub fn compute(graph: &UndirectedGraph, naive: bool, pl: &mut impl ProgressLog) -> Self {
        let start = Instant::now();
        let num_nodes = graph.num_nodes();
        let num_edges = graph.num_edges();
        let avg_degree = (num_nodes != 0).then(|| 2.0 * num_edges as f64 / num_nodes as f64);
        let diameter = if naive {
            naive_diameter(graph, pl)
        } else {
            calc_distance(graph, pl)
        };
        Self {
            num_nodes,
            num_edges,
            max_degree: graph.max_degree(),
            avg_degree,
            degree_histogram: graph.degree_histogram(),
            diameter,
            duration: start.elapsed(),
        }
    }
}

/// Formats an optional value, using `undefined` for `None`.
pub(crate) struct OrUndefined<T>(pub(crate) Option<T>);

impl<T: fmt::Display> fmt::Display for OrUndefined<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("undefined"),
        }
    }
}

/// Displays the statistics one per line, excluding the degree histogram.
impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes: {}", self.num_nodes)?;
        writeln!(f, "Edges: {}", self.num_edges)?;
        writeln!(f, "Max degree: {}", OrUndefined(self.max_degree))?;
        writeln!(
            f,
            "Average degree: {}",
            OrUndefined(self.avg_degree.map(|d| format!("{:.3}", d)))
        )?;
        writeln!(f, "Diameter: {}", OrUndefined(self.diameter))?;
        write!(f, "Duration: {:.3}s", self.duration.as_secs_f64())
    }
}
