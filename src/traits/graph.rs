/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use impl_tools::autoimpl;
use sux::prelude::*;

/// An undirected graph providing random access to the neighbors of its nodes.
///
/// Nodes are identified by the integers in `0..num_nodes()`. Neighbors are
/// returned in insertion order and may contain repetitions, as parallel edges
/// are allowed; a loop on a node makes the node appear twice among its own
/// neighbors. Since every edge contributes to the degree of both of its
/// endpoints, the sum of the degrees is always twice
/// [`num_edges`](RandomAccessGraph::num_edges).
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait RandomAccessGraph {
    /// The type of the iterator over the neighbors of a node
    /// returned by [`neighbors`](RandomAccessGraph::neighbors).
    type Neighbors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of (undirected) edges in the graph.
    fn num_edges(&self) -> usize;

    /// Returns the degree of a node, that is, the length of its
    /// neighbor list.
    fn degree(&self, node: usize) -> usize;

    /// Returns the neighbors of a node, in insertion order.
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_>;
}

/// Returns the neighbors of `node` that are set in `mask`.
///
/// The result is a lazy iterator borrowing the graph and the mask, so no
/// state is captured: calling this function again restarts the enumeration
/// from the beginning.
pub fn active_neighbors<'a, G: RandomAccessGraph>(
    graph: &'a G,
    node: usize,
    mask: &'a BitVec,
) -> impl Iterator<Item = usize> + 'a {
    graph.neighbors(node).into_iter().filter(move |&succ| mask[succ])
}
