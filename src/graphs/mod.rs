/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.

pub mod random;

mod undirected;
pub use undirected::UndirectedGraph;

pub mod prelude {
    pub use super::random::{BarabasiAlbert, Gilbert};
    pub use super::undirected::UndirectedGraph;
}
