/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::{
    breadth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use no_break::NoBreak;
use nonmax::NonMaxUsize;
use std::{collections::VecDeque, ops::ControlFlow, ops::ControlFlow::Continue};
use sux::prelude::*;

/// A sequential breadth-first visit.
///
/// This implementation uses an algorithm that is slightly different from the
/// classical textbook algorithm, as we do not store parents or distances of the
/// nodes from the root: Parents and distances are computed on the fly and
/// passed to the callback function by visiting nodes when they are discovered,
/// rather than when they are extracted from the queue.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// Nodes are discovered in FIFO order, scanning neighbors in insertion order,
/// so visits are deterministic.
///
/// # Examples
///
/// Let's compute the distances from 0:
///
/// ```
/// use graphstat::visits::*;
/// use graphstat::graphs::UndirectedGraph;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (1, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     [0],
///     |event| {
///          // Set distance from 0
///          if let breadth_first::EventPred::Visit { node, distance, .. } = event {
///              d[node] = distance;
///          }
///          Continue(())
///     },
/// ).continue_value_no_break();
///
/// assert_eq!(d, [0, 1, 2, 2]);
/// ```
///
/// Here instead we compute the size of the ball of radius one around node 0,
/// counting nodes in the filter function: in this way, nodes at distance two
/// are never enqueued.
///
/// ```
/// use graphstat::visits::*;
/// use graphstat::graphs::UndirectedGraph;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = UndirectedGraph::from_edges([(0, 1), (0, 2), (2, 3), (3, 4)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut count = 0;
/// visit.visit_filtered(
///     [0],
///     |_| Continue(()),
///     |breadth_first::FilterArgsPred { distance, .. }| {
///         if distance > 1 {
///             false
///         } else {
///             count += 1;
///             true
///         }
///     },
/// ).continue_value_no_break();
/// assert_eq!(count, 3);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid
    /// storage for the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        assert_ne!(
            num_nodes,
            usize::MAX,
            "The BFS Seq visit cannot be used on graphs with usize::MAX nodes."
        );
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    /// Returns the distances from `origin` of the nodes reachable from it
    /// through nodes set in `active`, and stores them in `dist`.
    ///
    /// Entries of nodes that are not reached are left untouched. The origin is
    /// always visited, even if it is not set in `active`. If `active` is
    /// `None`, all nodes are active.
    ///
    /// The visit is reset before starting, so it can be reused for
    /// visits from different origins.
    ///
    /// # Panics
    ///
    /// If `origin` is not a node of the graph.
    pub fn distances_into(
        &mut self,
        origin: usize,
        active: Option<&BitVec>,
        dist: &mut [Option<usize>],
    ) {
        assert!(
            origin < self.graph.num_nodes(),
            "Origin {} is not a node of a graph with {} nodes",
            origin,
            self.graph.num_nodes()
        );
        self.reset();
        self.visit_filtered(
            [origin],
            |event| {
                if let EventPred::Visit { node, distance, .. } = event {
                    dist[node] = Some(distance);
                }
                Continue(())
            },
            |FilterArgsPred { node, distance, .. }| {
                distance == 0 || active.map_or(true, |mask| mask[node])
            },
        )
        .continue_value_no_break();
    }
}

impl<'a, G: RandomAccessGraph> Sequential<EventPred> for Seq<'a, G> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.queue.clear();

        for root in roots {
            if self.visited[root]
                || !filter(
                    &mut init,
                    FilterArgsPred {
                        node: root,
                        pred: root,
                        distance: 0,
                    },
                )
            {
                continue;
            }

            // We call the init event only if there are some non-filtered roots
            if self.queue.is_empty() {
                callback(&mut init, EventPred::Init {})?;
            }

            self.visited.set(root, true);
            self.queue.push_back(Some(
                NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
            ));

            callback(
                &mut init,
                EventPred::Visit {
                    node: root,
                    pred: root,
                    distance: 0,
                },
            )?;
        }

        if self.queue.is_empty() {
            return Continue(());
        }

        callback(
            &mut init,
            EventPred::FrontierSize {
                distance: 0,
                size: self.queue.len(),
            },
        )?;

        // Insert marker
        self.queue.push_back(None);
        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.into();
                    for succ in self.graph.neighbors(node) {
                        let (node, pred) = (succ, node);
                        if !self.visited[succ] {
                            if filter(
                                &mut init,
                                FilterArgsPred {
                                    node,
                                    pred,
                                    distance,
                                },
                            ) {
                                self.visited.set(succ, true);
                                callback(
                                    &mut init,
                                    EventPred::Visit {
                                        node,
                                        pred,
                                        distance,
                                    },
                                )?;
                                self.queue.push_back(Some(
                                    NonMaxUsize::new(succ)
                                        .expect("node index should never be usize::MAX"),
                                ))
                            }
                        } else {
                            callback(&mut init, EventPred::Revisit { node, pred })?;
                        }
                    }
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        callback(
                            &mut init,
                            EventPred::FrontierSize {
                                distance,
                                size: self.queue.len(),
                            },
                        )?;
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        callback(&mut init, EventPred::Done {})
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}

/// Returns the distances from `origin`, restricted to the nodes set in
/// `active` (all nodes if `active` is `None`).
///
/// The element of index `v` of the result is `Some(d)` if `v` can be reached
/// from `origin` at distance `d` through active nodes, and `None` otherwise.
/// The origin is always visited, and it has distance zero. Edges are
/// unweighted, and parallel edges and loops have no effect.
///
/// For repeated visits on the same graph, use [`Seq::distances_into`], which
/// reuses its allocations.
///
/// # Panics
///
/// If `origin` is not a node of the graph.
///
/// # Examples
///
/// ```
/// use graphstat::graphs::UndirectedGraph;
/// use graphstat::visits::breadth_first::bfs;
///
/// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (3, 4)]);
/// assert_eq!(
///     bfs(&graph, 1, None),
///     vec![Some(1), Some(0), Some(1), None, None]
/// );
/// ```
pub fn bfs<G: RandomAccessGraph>(
    graph: &G,
    origin: usize,
    active: Option<&BitVec>,
) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.num_nodes()];
    Seq::new(graph).distances_into(origin, active, &mut dist);
    dist
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphs::UndirectedGraph;
    use crate::visits::Interrupted;

    fn scenario() -> UndirectedGraph {
        UndirectedGraph::from_edges_bounded(
            8,
            [
                (0, 1),
                (0, 4),
                (1, 6),
                (3, 6),
                (3, 2),
                (5, 0),
                (5, 1),
                (5, 2),
                (7, 6),
            ],
        )
    }

    #[test]
    fn test_bfs() {
        let g = scenario();
        let dist = bfs(&g, 5, None);
        let expected: Vec<Option<usize>> =
            [1, 1, 1, 2, 2, 0, 2, 3].into_iter().map(Some).collect();
        assert_eq!(dist, expected);
        assert_eq!(bfs(&g, 0, None)[0], Some(0));
    }

    #[test]
    fn test_bfs_mask() {
        let g = scenario();
        let mut mask = BitVec::new(8);
        for v in [0, 1, 5, 6, 7] {
            mask.set(v, true);
        }
        let dist = bfs(&g, 5, Some(&mask));
        assert_eq!(
            dist,
            vec![
                Some(1),
                Some(1),
                None,
                None,
                None,
                Some(0),
                Some(2),
                Some(3)
            ]
        );
        // the origin is visited even if it is not active
        mask.set(5, false);
        let dist = bfs(&g, 5, Some(&mask));
        assert_eq!(dist[5], Some(0));
        assert_eq!(dist[0], Some(1));
        assert_eq!(dist[2], None);
        // an inactive origin does not make its neighbors active
        let mut mask = BitVec::new(8);
        mask.set(0, true);
        let dist = bfs(&g, 4, Some(&mask));
        assert_eq!(dist[4], Some(0));
        assert_eq!(dist[0], Some(1));
        assert_eq!(dist.iter().flatten().count(), 2);
    }

    #[test]
    fn test_parallel_edges_and_loops() {
        let g = UndirectedGraph::from_edges([(0, 1), (0, 1), (1, 1), (1, 2)]);
        assert_eq!(bfs(&g, 0, None), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_events() {
        let g = UndirectedGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut visit = Seq::new(&g);
        let mut frontier = vec![];
        let mut revisits = 0;
        let mut done = false;
        visit
            .visit([0], |event| {
                match event {
                    EventPred::FrontierSize { distance, size } => {
                        frontier.push((distance, size))
                    }
                    EventPred::Revisit { .. } => revisits += 1,
                    EventPred::Done {} => done = true,
                    _ => {}
                }
                Continue(())
            })
            .continue_value_no_break();
        assert_eq!(frontier, vec![(0, 1), (1, 2), (2, 1)]);
        // every edge is scanned twice, and three of the scans discover a node
        assert_eq!(revisits, 2 * g.num_edges() - 3);
        assert!(done);
    }

    #[test]
    fn test_interrupted() {
        let g = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let mut visit = Seq::new(&g);
        let result = visit.visit([0], |event| match event {
            EventPred::Visit { node: 2, .. } => ControlFlow::Break(Interrupted),
            _ => Continue(()),
        });
        assert!(result.is_break());
    }

    #[test]
    fn test_reuse() {
        let g = scenario();
        let mut visit = Seq::new(&g);
        let mut dist = vec![None; 8];
        visit.distances_into(5, None, &mut dist);
        let mut other = vec![None; 8];
        visit.distances_into(7, None, &mut other);
        assert_eq!(other, bfs(&g, 7, None));
        assert_eq!(dist, bfs(&g, 5, None));
    }

    #[test]
    #[should_panic]
    fn test_bad_origin() {
        let g = UndirectedGraph::empty(3);
        bfs(&g, 3, None);
    }
}
