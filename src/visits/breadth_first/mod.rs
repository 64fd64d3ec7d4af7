/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Visits accept a callback function with argument [`EventPred`]; the
//! associated filter argument type is [`FilterArgsPred`].
//!
//! Note that since [`EventPred`] contains the predecessor of the visited node,
//! all post-initialization visit events can be interpreted as edge events. The
//! only exception is the [`Visit`](EventPred::Visit) event at the root.
//!
//! The function [`bfs`] is the entry point used by the
//! [diameter computation](crate::distances::diameter): it returns the
//! distances from an origin, possibly restricted to an active set.

mod seq;
pub use seq::*;

/// Types of callback events generated during breadth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// This event should be used to set up state at the start of the visit.
    ///
    /// Note that this event will not happen if the visit is empty, that
    /// is, all of the roots are already visited or filtered.
    Init {},
    /// The node has been encountered for the first time: we are traversing a
    /// new tree edge, unless all node fields are equal to the root.
    Visit {
        /// The current node.
        node: usize,
        /// The parent of [node](`EventPred::Visit::node`) in the visit tree,
        /// or [`node`](`EventPred::Visit::node`) if
        /// [`node`](`EventPred::Visit::node`) is one of the roots.
        pred: usize,
        /// The distance of the current node from the roots.
        distance: usize,
    },
    /// The node has been encountered before: we are traversing a non-tree
    /// edge (including the reverse of a tree edge, a parallel edge or a loop).
    Revisit {
        /// The current node.
        node: usize,
        /// The predecessor of [node](`EventPred::Revisit::node`).
        pred: usize,
    },
    /// The size of the frontier at a given distance.
    ///
    /// This event will happen with increasing value of
    /// [`distance`](`EventPred::FrontierSize::distance`), starting at 0,
    /// just before starting to scan the nodes at that distance.
    ///
    /// If the root is formed by a single node, this is the size of the sphere
    /// with center at the root and radius
    /// [`distance`](`EventPred::FrontierSize::distance`).
    FrontierSize {
        /// A distance.
        distance: usize,
        /// The number of nodes at
        /// [`distance`](`EventPred::FrontierSize::distance`) from the roots.
        size: usize,
    },
    /// The visit has been completed.
    ///
    /// Note that this event will not happen if the visit is empty or if the
    /// visit is stopped by a callback returning a break.
    Done {},
}

/// Filter arguments for breadth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The current node.
    pub node: usize,
    /// The predecessor of [node](`Self::node`).
    pub pred: usize,
    /// The distance of the current node from the roots.
    pub distance: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
