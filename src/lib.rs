/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod distances;
pub mod graphs;
pub mod io;
pub mod stats;
pub mod traits;
pub mod visits;

pub mod prelude {
    pub use crate::distances::diameter::{calc_distance, naive_diameter, Diameter, DiameterReport};
    pub use crate::distances::pendant::{mark_tree, PendantPruning};
    pub use crate::graphs::prelude::*;
    pub use crate::io::{EdgeListError, EdgeListFormat, LoadPolicy};
    pub use crate::stats::GraphStats;
    pub use crate::traits::*;
    pub use crate::visits::breadth_first;
    pub use crate::visits::Sequential;
}
