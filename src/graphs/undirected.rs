/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use core::fmt;
use std::collections::TryReserveError;

/// A mutable undirected graph based on a vector of adjacency lists.
///
/// The graph is append-only: nodes and edges can be added, but never removed.
/// Parallel edges are allowed, and each of them is stored separately, so the
/// adjacency list of a node may contain repetitions. Adjacency lists keep the
/// insertion order, which in turn determines the visiting order of
/// [breadth-first visits](crate::visits::breadth_first).
///
/// There are two insertion policies for edges whose endpoints are not nodes
/// of the graph:
///
/// - [`add_edge_bounded`](UndirectedGraph::add_edge_bounded) silently drops
///   them;
/// - [`add_edge_growing`](UndirectedGraph::add_edge_growing) adds the missing
///   nodes first.
///
/// In both cases the graph stays symmetric: an edge `(a, b)` appends `b` to
/// the adjacency list of `a` and `a` to the adjacency list of `b`, so the sum
/// of the degrees is always twice the number of edges.
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde).
///
/// # Examples
///
/// ```
/// use graphstat::graphs::UndirectedGraph;
/// use graphstat::traits::RandomAccessGraph;
///
/// let mut graph = UndirectedGraph::empty(3);
/// assert!(graph.add_edge_bounded(0, 1));
/// // Dropped, as node 5 does not exist
/// assert!(!graph.add_edge_bounded(1, 5));
/// assert_eq!(graph.num_edges(), 1);
///
/// // This one makes the graph grow
/// graph.add_edge_growing(1, 5);
/// assert_eq!(graph.num_nodes(), 6);
/// assert_eq!(graph.degree(1), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    /// The number of edges in the graph.
    num_edges: usize,
    /// For each node, its list of neighbors.
    adj: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_edges: 0,
            adj: vec![],
        }
    }

    /// Creates a new graph with `n` isolated nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_edges: 0,
            adj: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds isolated nodes so that `node` belongs to the graph, and returns
    /// true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.adj.len();
        self.adj.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an edge to the graph if both endpoints are nodes of the graph.
    ///
    /// Returns true if the edge has been added. If one of the endpoints is
    /// greater than or equal to the number of nodes, the edge is silently
    /// dropped and false is returned: callers needing strict validation must
    /// check the return value or the bounds themselves.
    pub fn add_edge_bounded(&mut self, a: usize, b: usize) -> bool {
        let n = self.adj.len();
        if a >= n || b >= n {
            log::trace!(
                "Dropping edge ({}, {}): the graph has {} nodes",
                a,
                b,
                n
            );
            return false;
        }
        self.push_edge(a, b);
        true
    }

    /// Adds an edge to the graph, adding nodes as needed so that both
    /// endpoints belong to the graph.
    ///
    /// # Panics
    ///
    /// If the nodes needed cannot be allocated: use
    /// [`try_add_edge_growing`](Self::try_add_edge_growing) on untrusted
    /// input.
    pub fn add_edge_growing(&mut self, a: usize, b: usize) {
        self.add_node(a.max(b));
        self.push_edge(a, b);
    }

    /// Like [`add_edge_growing`](Self::add_edge_growing), but returns an
    /// error, leaving the graph unchanged, if the nodes needed cannot be
    /// allocated.
    pub fn try_add_edge_growing(&mut self, a: usize, b: usize) -> Result<(), TryReserveError> {
        let node = a.max(b);
        let len = self.adj.len();
        if node >= len {
            self.adj.try_reserve((node - len).saturating_add(1))?;
        }
        self.add_edge_growing(a, b);
        Ok(())
    }

    #[inline(always)]
    fn push_edge(&mut self, a: usize, b: usize) {
        self.adj[a].push(b);
        self.adj[b].push(a);
        self.num_edges += 1;
    }

    /// Adds edges from an [`IntoIterator`] using
    /// [`add_edge_growing`](Self::add_edge_growing).
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        for (a, b) in edges {
            self.add_edge_growing(a, b);
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of edges, adding nodes as
    /// needed.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_edges(edges);
        g
    }

    /// Creates a new graph with `n` nodes from an [`IntoIterator`] of edges,
    /// dropping the edges with an endpoint outside `0..n`.
    pub fn from_edges_bounded(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::empty(n);
        for (a, b) in edges {
            g.add_edge_bounded(a, b);
        }
        g
    }

    /// Returns an iterator over the edges of the graph.
    ///
    /// Each undirected edge is returned once as a pair `(a, b)` with
    /// `a <= b`, so parallel edges are returned as many times as they have
    /// been inserted. Pairs are sorted by their first component.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj.iter().enumerate().flat_map(|(a, neighbors)| {
            // a loop appears twice in the adjacency list of its node
            let mut loops = 0_usize;
            neighbors.iter().filter_map(move |&b| {
                if b == a {
                    loops += 1;
                    (loops % 2 == 1).then_some((a, a))
                } else {
                    (a < b).then_some((a, b))
                }
            })
        })
    }

    /// Returns the maximum degree, or `None` if the graph has no nodes.
    pub fn max_degree(&self) -> Option<usize> {
        self.adj.iter().map(Vec::len).max()
    }

    /// Returns the degree distribution of the graph: the element of index
    /// `d` is the number of nodes of degree `d`.
    ///
    /// The result is empty if the graph has no nodes, and its last
    /// element is nonzero otherwise.
    pub fn degree_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![0; self.max_degree().map_or(0, |d| d + 1)];
        for neighbors in &self.adj {
            histogram[neighbors.len()] += 1;
        }
        histogram
    }

    /// Shrinks the capacity of the graph to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.adj.shrink_to_fit();
        for s in self.adj.iter_mut() {
            s.shrink_to_fit();
        }
    }
}

impl RandomAccessGraph for UndirectedGraph {
    type Neighbors<'a>
        = core::iter::Copied<core::slice::Iter<'a, usize>>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    #[inline(always)]
    fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        self.adj[node].iter().copied()
    }
}

/// Displays the adjacency matrix of the graph.
///
/// Each row contains, for each column, the number of edges between the two
/// nodes, `.` if there are none, and `*` on the diagonal if there are no
/// loops. The output is quadratic in the number of nodes, so this is meant
/// for small graphs only.
impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.adj.len();
        let mut counts = vec![0_usize; n];
        for (row, neighbors) in self.adj.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            counts.fill(0);
            for &b in neighbors {
                counts[b] += 1;
            }
            // loops are stored twice
            counts[row] /= 2;
            for (col, &count) in counts.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match count {
                    0 if col == row => f.write_str("*")?,
                    0 => f.write_str(".")?,
                    _ => write!(f, "{}", count)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_symmetry() {
        let edges = [(0, 1), (1, 2), (2, 0), (1, 2), (3, 3), (4, 1)];
        let g = UndirectedGraph::from_edges(edges);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), edges.len());
        for (a, b) in edges {
            assert!(g.neighbors(a).any(|x| x == b));
            assert!(g.neighbors(b).any(|x| x == a));
        }
        let degree_sum: usize = (0..g.num_nodes()).map(|v| g.degree(v)).sum();
        assert_eq!(degree_sum, 2 * g.num_edges());
        // parallel edges are kept
        assert_eq!(g.neighbors(1).filter(|&x| x == 2).count(), 2);
    }

    #[test]
    fn test_bounded_drops_out_of_range() {
        let mut g = UndirectedGraph::empty(3);
        assert!(g.add_edge_bounded(0, 2));
        assert!(!g.add_edge_bounded(0, 3));
        assert!(!g.add_edge_bounded(7, 1));
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 0);
        assert_eq!(g.degree(2), 1);

        let g = UndirectedGraph::from_edges_bounded(2, [(0, 1), (1, 2), (5, 0)]);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_growing() {
        let mut g = UndirectedGraph::new();
        assert_eq!(g.num_nodes(), 0);
        g.add_edge_growing(2, 1);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.degree(0), 0);
        g.add_edge_bounded(0, 2);
        assert_eq!(g.num_edges(), 2);
        assert!(!g.add_node(1));
        assert!(g.add_node(4));
        assert_eq!(g.num_nodes(), 5);
    }

    #[test]
    fn test_try_growing() {
        let mut g = UndirectedGraph::empty(2);
        assert!(g.try_add_edge_growing(0, 3).is_ok());
        assert_eq!(g.num_nodes(), 4);
        assert!(g.try_add_edge_growing(1, usize::MAX).is_err());
        assert!(g.try_add_edge_growing(usize::MAX / 2, 0).is_err());
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_edges() {
        let g = UndirectedGraph::from_edges([(2, 0), (0, 1), (1, 1), (0, 2), (3, 1)]);
        let edges = g.edges().collect::<Vec<_>>();
        assert_eq!(edges, vec![(0, 2), (0, 1), (0, 2), (1, 1), (1, 3)]);
    }

    #[test]
    fn test_degrees() {
        let g = UndirectedGraph::from_edges([(0, 1), (0, 2), (0, 3), (2, 3)]);
        assert_eq!(g.max_degree(), Some(3));
        assert_eq!(g.degree_histogram(), vec![0, 1, 2, 1]);
        let g = UndirectedGraph::new();
        assert_eq!(g.max_degree(), None);
        assert!(g.degree_histogram().is_empty());
    }

    #[test]
    fn test_display() {
        let g = UndirectedGraph::from_edges_bounded(
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
                (7, 6),
            ],
        );
        assert_eq!(
            g.to_string(),
            "* 1 . . 1 1 . .\n\
             1 * . . . 1 1 .\n\
             . . * 1 . 1 . .\n\
             . . 1 * . . 1 .\n\
             1 . . . * . . .\n\
             1 1 1 . . * . .\n\
             . 1 . 1 . . * 2\n\
             . . . . . . 2 *"
        );
    }
}
