/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Traits to access undirected graphs.
//!
//! All algorithms in this crate are generic over [`RandomAccessGraph`], so
//! they can be applied to any structure able to enumerate the neighbors of a
//! node; [`active_neighbors`] restricts such an enumeration to the nodes
//! selected by a mask.

mod graph;
pub use graph::*;
