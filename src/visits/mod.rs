/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Visits depend on a type parameter `A` implementing the trait [`Event`];
//! they provide visit methods accepting a callback function with argument `A`
//! and returning a `ControlFlow<E, ()>`, where `E` is a type parameter of the
//! visit method: for example, `E` might be [`Interrupted`] when the visit can
//! be stopped, or [`Infallible`](std::convert::Infallible) if the visit cannot
//! be interrupted.
//!
//! If a callback returns a [`Break`](ControlFlow::Break), the visit will be
//! interrupted, and the [`Break`](ControlFlow::Break) value will be the return
//! value of the visit method; for uninterruptible visits we suggest to use the
//! [`no-break`](https://crates.io/crates/no-break) crate and its
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! method on the result to let type inference run smoothly.
//!
//! Additionally, visits accept a filter function accepting an
//! [`Event::FilterArgs`] that will be called when a new node is discovered. If
//! the filter returns false, the node will be ignored, that is, not even marked
//! as known. Filters are the way [active sets](crate::distances::pendant) are
//! enforced.
//!
//! Visits must provide a `reset` method that makes it possible to reuse them.

pub mod breadth_first;

use std::ops::ControlFlow;
use thiserror::Error;

#[derive(Error, Debug)]
/// The visit was interrupted.
#[error("The visit was interrupted")]
pub struct Interrupted;

/// Types usable as arguments for the callbacks in visits.
///
/// Arguments are usually enums in which variants represent visit events. Each
/// variant then contains additional data related to the specific event.
///
/// The associated type [`Event::FilterArgs`] is the type of the arguments
/// passed to the filter associated with the visit.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// A sequential visit.
///
/// Implementation of this trait must provide the
/// [`visit_filtered_with`](Sequential::visit_filtered_with) method, which
/// should perform a visit of a graph starting from a given set of nodes. A
/// [breadth-first visit](breadth_first) interprets the set of nodes as the
/// initial queue.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified nodes with an initialization value
    /// and a filter function.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `init`: a value the will be passed to the callback function.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified nodes with a filter function.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, (), |(), a| callback(a), |(), a| filter(a))
    }

    /// Visits the graph from the specified nodes.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
