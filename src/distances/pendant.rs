/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Pruning of pendant trees.
//!
//! A node is *pendant* if it has at most one (distinct) neighbor among the
//! nodes that are still active. Pendant chains and trees contribute to the
//! diameter only through their depth, so they can be collapsed into the node
//! they hang from before running any visit: [`mark_tree`] removes them from
//! the active set, records for each surviving node the depth of the deepest
//! chain collapsed into it, and keeps track of the longest path found entirely
//! within pruned material.
//!
//! After pruning, every active node has at least two distinct active
//! neighbors. On a forest, no node survives, and the longest path found is the
//! diameter.

use crate::traits::{active_neighbors, RandomAccessGraph};
use dsi_progress_logger::prelude::*;
use sux::prelude::*;

/// The result of [`mark_tree`].
#[derive(Debug, Clone)]
pub struct PendantPruning {
    /// The active set: nodes that have not been pruned.
    pub active: BitVec,
    /// For each node, the depth of the deepest pendant chain collapsed
    /// into it.
    pub subtree_weight: Box<[usize]>,
    /// The length of the longest path found within pruned material, which is
    /// a lower bound on the diameter.
    pub longest: usize,
}

impl PendantPruning {
    /// Returns the number of active nodes.
    pub fn num_active(&self) -> usize {
        self.active.count_ones()
    }
}

/// What a node looks like in the active graph.
enum Branching {
    Isolated,
    Pendant(usize),
    Inner,
}

/// Classifies `node` by its distinct active neighbors, stopping as soon as two
/// are found. Loops are ignored.
fn branching(graph: &impl RandomAccessGraph, node: usize, active: &BitVec) -> Branching {
    let mut first = None;
    for succ in active_neighbors(graph, node, active) {
        if succ == node {
            continue;
        }
        match first {
            None => first = Some(succ),
            Some(f) if f != succ => return Branching::Inner,
            _ => {}
        }
    }
    match first {
        None => Branching::Isolated,
        Some(f) => Branching::Pendant(f),
    }
}

/// Prunes the pendant trees of a graph.
///
/// Each node still active is used in turn as the start of a walk along a
/// pendant chain: as long as the current node has exactly one active
/// neighbor, the node is pruned and the walk moves to the neighbor, carrying
/// the depth of the chain. A node with no active neighbors ends the walk and
/// is pruned, too. A node with two or more active neighbors ends the walk but
/// stays active, absorbing the depth of the chain in its subtree weight.
///
/// Each time two chains meet, their combined length is a path in the graph,
/// and it is used to update the longest path found.
///
/// The neighbors of a node are evaluated on the current active set, so chains
/// consumed by earlier walks are not traversed again, and each node is pruned
/// at most once, making the running time linear in the size of the graph.
///
/// # Examples
///
/// ```
/// use graphstat::graphs::UndirectedGraph;
/// use graphstat::distances::pendant::mark_tree;
/// use dsi_progress_logger::no_logging;
///
/// // A triangle with a tail
/// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
/// let pruning = mark_tree(&graph, no_logging![]);
/// assert_eq!(pruning.num_active(), 3);
/// assert_eq!(pruning.subtree_weight[2], 2);
/// assert_eq!(pruning.longest, 2);
/// ```
pub fn mark_tree(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> PendantPruning {
    let num_nodes = graph.num_nodes();
    let mut active = BitVec::new(num_nodes);
    active.fill(true);
    let mut subtree_weight = vec![0_usize; num_nodes].into_boxed_slice();
    let mut longest = 0;

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Pruning pendant trees...");

    for node in 0..num_nodes {
        pl.light_update();
        if !active[node] {
            continue;
        }
        let mut parent = node;
        let mut deep = 0;
        loop {
            let weight = subtree_weight[parent];
            longest = longest.max(deep + weight);
            match branching(&graph, parent, &active) {
                Branching::Pendant(succ) => {
                    active.set(parent, false);
                    deep = 1 + deep.max(weight);
                    parent = succ;
                }
                Branching::Isolated => {
                    active.set(parent, false);
                    break;
                }
                Branching::Inner => {
                    subtree_weight[parent] = weight.max(deep);
                    break;
                }
            }
        }
    }

    pl.done();

    let pruning = PendantPruning {
        active,
        subtree_weight,
        longest,
    };
    log::debug!(
        "Pruning left {} active nodes out of {}; longest pruned path: {}",
        pruning.num_active(),
        num_nodes,
        longest
    );
    pruning
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphs::UndirectedGraph;
    use dsi_progress_logger::no_logging;

    fn active_nodes(pruning: &PendantPruning, n: usize) -> Vec<usize> {
        (0..n).filter(|&v| pruning.active[v]).collect()
    }

    #[test]
    fn test_triangle_with_trees() {
        let g = UndirectedGraph::from_edges_bounded(
            15,
            [
                (0, 1),
                (0, 2),
                (1, 2),
                (0, 3),
                (1, 4),
                (4, 5),
                (4, 6),
                (6, 7),
                (4, 8),
                (8, 10),
                (8, 9),
                (9, 11),
                (12, 13),
            ],
        );
        let pruning = mark_tree(&g, no_logging![]);
        assert_eq!(active_nodes(&pruning, 15), vec![0, 1, 2]);
        assert_eq!(&pruning.subtree_weight[..3], &[1, 4, 0]);
        assert_eq!(pruning.longest, 5);
    }

    #[test]
    fn test_path() {
        let g = UndirectedGraph::from_edges([(3, 1), (1, 0), (0, 4), (4, 2), (2, 5)]);
        let pruning = mark_tree(&g, no_logging![]);
        assert_eq!(pruning.num_active(), 0);
        assert_eq!(pruning.longest, 5);
    }

    #[test]
    fn test_forest() {
        // a star with four leaves, a spider and an isolated node
        let g = UndirectedGraph::from_edges([
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (5, 6),
            (6, 7),
            (5, 8),
            (8, 9),
            (9, 10),
            (5, 11),
            (12, 12),
        ]);
        let pruning = mark_tree(&g, no_logging![]);
        assert_eq!(pruning.num_active(), 0);
        // 7 - 6 - 5 - 8 - 9 - 10
        assert_eq!(pruning.longest, 5);
    }

    #[test]
    fn test_cycle() {
        let g = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let pruning = mark_tree(&g, no_logging![]);
        assert_eq!(pruning.num_active(), 4);
        assert!(pruning.subtree_weight.iter().all(|&w| w == 0));
        assert_eq!(pruning.longest, 0);
    }

    #[test]
    fn test_parallel_edges() {
        // parallel edges and loops do not make a node branch
        let g = UndirectedGraph::from_edges([(0, 1), (0, 1), (1, 2), (2, 2), (1, 2)]);
        let pruning = mark_tree(&g, no_logging![]);
        assert_eq!(pruning.num_active(), 0);
        assert_eq!(pruning.longest, 2);
    }

    #[test]
    fn test_empty() {
        let g = UndirectedGraph::new();
        let pruning = mark_tree(&g, no_logging![]);
        assert_eq!(pruning.num_active(), 0);
        assert_eq!(pruning.longest, 0);
    }
}
