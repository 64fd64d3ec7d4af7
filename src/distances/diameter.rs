/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Exact computation of the diameter of an undirected graph.
//!
//! The diameter is the maximum distance between two nodes connected by a
//! path. A naive computation requires a breadth-first visit from every node
//! ([`naive_diameter`]); [`calc_distance`] instead proceeds as follows:
//!
//! 1. pendant trees are [pruned](super::pendant::mark_tree), leaving a core
//!    whose nodes carry the depth of the trees collapsed into them;
//! 2. each connected component of the core is visited from its smallest node;
//! 3. a node with no collapsed tree having a neighbor farther from the
//!    component root is discarded as a candidate origin, as any path starting
//!    from it can be extended;
//! 4. the remaining candidates are used as origins of visits of the core, in
//!    which the distance between two nodes is stretched by the depth of the
//!    trees collapsed into them;
//! 5. every visit from an origin `o` provides, for each node `v` it reaches,
//!    the upper bound `w(v) + d(o, v) + max_x (d(o, x) + w(x))` on the length
//!    of the paths starting in the trees of `v`, where `w` is the depth of the
//!    collapsed trees: all nodes whose bound still exceeds the longest path
//!    found are used as origins, too.
//!
//! The last step makes the result exact: the local rule of step 3 alone might
//! miss the origins of some longest paths.
//!
//! On a forest, pruning alone yields the diameter and no visit is performed;
//! on graphs with no pendant trees the worst case is a visit from every node.
//!
//! # Examples
//!
//! ```
//! use graphstat::graphs::UndirectedGraph;
//! use graphstat::distances::diameter::*;
//! use dsi_progress_logger::no_logging;
//!
//! let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
//! assert_eq!(calc_distance(&graph, no_logging![]), Some(3));
//! assert_eq!(naive_diameter(&graph, no_logging![]), Some(3));
//!
//! let report = Diameter::run(&graph, no_logging![]).unwrap();
//! assert_eq!(report.diameter, 3);
//! assert_eq!(report.num_active, 3);
//!
//! assert_eq!(calc_distance(UndirectedGraph::new(), no_logging![]), None);
//! ```

use super::pendant::{mark_tree, PendantPruning};
use crate::traits::{active_neighbors, RandomAccessGraph};
use crate::visits::{
    breadth_first::{self, EventPred, FilterArgsPred},
    Sequential,
};
use dsi_progress_logger::prelude::*;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;
use sux::prelude::*;

/// The outcome of a diameter computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiameterReport {
    /// The diameter of the graph.
    pub diameter: usize,
    /// The longest path found while pruning pendant trees.
    pub pruned_longest: usize,
    /// The number of nodes that survived pruning.
    pub num_active: usize,
    /// The number of visits used to find the connected components of the
    /// active nodes.
    pub component_visits: usize,
    /// The number of visits from the candidates selected by the local rule.
    pub candidate_visits: usize,
    /// The number of visits from nodes whose upper bound exceeded the longest
    /// path found by the previous visits.
    pub verification_visits: usize,
}

impl DiameterReport {
    /// Returns the total number of breadth-first visits performed.
    pub fn num_visits(&self) -> usize {
        self.component_visits + self.candidate_visits + self.verification_visits
    }
}

/// Computes the diameter using pendant-tree pruning.
///
/// See the [module documentation](self) for a description of the algorithm.
pub struct Diameter;

impl Diameter {
    /// Computes the diameter of `graph`, returning a report about the
    /// computation, or `None` if the graph has no nodes.
    pub fn run(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Option<DiameterReport> {
        let num_nodes = graph.num_nodes();
        if num_nodes == 0 {
            log::info!("The graph is empty: the diameter is undefined");
            return None;
        }

        let PendantPruning {
            active,
            subtree_weight,
            longest,
        } = mark_tree(&graph, pl);

        let mut state = CoreVisits::new(&graph, &active, &subtree_weight, longest);

        pl.item_name("visit");
        pl.expected_updates(None);
        pl.start("Visiting the connected components of the core...");
        // Distances from the root of the component, valid for active nodes
        let mut root_dist = vec![0; num_nodes];
        let mut in_component = BitVec::new(num_nodes);
        for root in 0..num_nodes {
            if !active[root] || in_component[root] {
                continue;
            }
            for &(node, distance) in state.visit_from(root) {
                root_dist[node] = distance;
                in_component.set(node, true);
            }
            pl.update();
        }
        pl.done();
        let component_visits = state.num_visits;

        pl.info(format_args!("Selecting candidates..."));
        let mut candidate = active.clone();
        for node in 0..num_nodes {
            if !active[node] {
                continue;
            }
            for succ in active_neighbors(&graph, node, &active) {
                if subtree_weight[node] == 0 && root_dist[succ] > root_dist[node] {
                    candidate.set(node, false);
                }
                if subtree_weight[succ] == 0 && root_dist[node] > root_dist[succ] {
                    candidate.set(succ, false);
                }
            }
        }
        let num_candidates = candidate.count_ones();
        pl.info(format_args!(
            "{} candidates out of {} active nodes",
            num_candidates,
            active.count_ones()
        ));

        pl.expected_updates(Some(num_candidates));
        pl.start("Visiting from candidates...");
        for origin in 0..num_nodes {
            if !candidate[origin] {
                continue;
            }
            // Component roots have already been visited
            if !state.used[origin] {
                state.visit_from(origin);
            }
            pl.update();
        }
        pl.done();
        let candidate_visits = state.num_visits - component_visits;

        pl.expected_updates(None);
        pl.start("Verifying upper bounds...");
        for origin in 0..num_nodes {
            if active[origin] && !state.used[origin] && state.upper_bound[origin] > state.longest
            {
                state.visit_from(origin);
                pl.update();
            }
        }
        pl.done();
        let verification_visits = state.num_visits - component_visits - candidate_visits;

        let report = DiameterReport {
            diameter: state.longest,
            pruned_longest: longest,
            num_active: active.count_ones(),
            component_visits,
            candidate_visits,
            verification_visits,
        };
        log::info!(
            "Diameter: {} ({} visits for {} nodes, {} after pruning)",
            report.diameter,
            report.num_visits(),
            num_nodes,
            report.num_active
        );
        log::debug!(
            "Visits: {} components, {} candidates, {} verifications",
            report.component_visits,
            report.candidate_visits,
            report.verification_visits
        );
        Some(report)
    }
}

/// Breadth-first visits of the active nodes, keeping track of the longest
/// path found and of an upper bound on the length of the paths starting from
/// each active node.
struct CoreVisits<'a, G: RandomAccessGraph> {
    visit: breadth_first::Seq<'a, G>,
    active: &'a BitVec,
    subtree_weight: &'a [usize],
    /// The nodes reached by the last visit, with their distance.
    reached: Vec<(usize, usize)>,
    /// The nodes that have been used as origins.
    used: BitVec,
    upper_bound: Vec<usize>,
    longest: usize,
    num_visits: usize,
}

impl<'a, G: RandomAccessGraph> CoreVisits<'a, G> {
    fn new(graph: &'a G, active: &'a BitVec, subtree_weight: &'a [usize], longest: usize) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            visit: breadth_first::Seq::new(graph),
            active,
            subtree_weight,
            reached: Vec::new(),
            used: BitVec::new(num_nodes),
            upper_bound: vec![usize::MAX; num_nodes],
            longest,
            num_visits: 0,
        }
    }

    /// Visits the active nodes from `origin`, updates the longest path and
    /// the upper bounds, and returns the nodes reached with their distance.
    fn visit_from(&mut self, origin: usize) -> &[(usize, usize)] {
        let active = self.active;
        let reached = &mut self.reached;
        reached.clear();
        self.visit.reset();
        self.visit
            .visit_filtered(
                [origin],
                |event| {
                    if let EventPred::Visit { node, distance, .. } = event {
                        reached.push((node, distance));
                    }
                    Continue(())
                },
                |FilterArgsPred { node, .. }| active[node],
            )
            .continue_value_no_break();

        let weight = self.subtree_weight;
        let mut eccentricity = 0;
        for &(node, distance) in self.reached.iter() {
            let stretched = distance + weight[node];
            eccentricity = eccentricity.max(stretched);
            if node != origin {
                self.longest = self.longest.max(weight[origin] + stretched);
            }
        }
        for &(node, distance) in self.reached.iter() {
            let bound = weight[node] + distance + eccentricity;
            self.upper_bound[node] = self.upper_bound[node].min(bound);
        }

        self.used.set(origin, true);
        self.num_visits += 1;
        &self.reached
    }
}

/// Returns the diameter of `graph`, or `None` if the graph has no nodes.
///
/// This is a convenience wrapper around [`Diameter::run`].
pub fn calc_distance(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Option<usize> {
    Diameter::run(graph, pl).map(|report| report.diameter)
}

/// Returns the diameter of `graph`, or `None` if the graph has no nodes,
/// using a breadth-first visit from every node.
///
/// This function is quadratic, and it is meant for comparison and testing.
pub fn naive_diameter(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Option<usize> {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return None;
    }
    pl.item_name("visit");
    pl.expected_updates(Some(num_nodes));
    pl.start("Visiting from every node...");

    let mut visit = breadth_first::Seq::new(&graph);
    let mut diameter = 0;
    for origin in 0..num_nodes {
        visit.reset();
        visit
            .visit([origin], |event| {
                if let EventPred::Visit { distance, .. } = event {
                    diameter = diameter.max(distance);
                }
                Continue(())
            })
            .continue_value_no_break();
        pl.light_update();
    }

    pl.done();
    Some(diameter)
}
