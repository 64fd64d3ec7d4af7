/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random graph generators.
//!
//! Generators use a seeded [`SmallRng`](rand::rngs::SmallRng), so the same
//! parameters always yield the same graph, and they build their result using
//! only the public insertion methods of [`UndirectedGraph`](super::UndirectedGraph).

mod barabasi_albert;
pub use barabasi_albert::BarabasiAlbert;

mod gilbert;
pub use gilbert::Gilbert;
