//! Edge storage for graphs.
//!
//! [`EdgeStore`] is the contract a [`Graph`](super::Graph) relies on. Stores hold directed edges as
//! ordered `(start, end)` pairs without duplicates, but know nothing about which nodes exist. The
//! graph checks node membership before it asks a store to add or remove an edge.

pub mod adjacency;
pub mod indexed;


#[doc(inline)]
pub use adjacency::AdjacencyEdges;
#[doc(inline)]
pub use indexed::IndexedEdges;

use super::error::{DuplicateEdge, EdgeNotFound};
use crate::collections::traits::{Clear, Count};
use crate::step::{Continuing, Signal, Visit, VisitBreak, VisitEdge, VisitEdgeBreak};

/// Storage for the directed edges of a graph.
///
/// [`Count::len`] is the number of edges and [`Clear::clear`] removes all of them.
pub trait EdgeStore<T>: Count + Clear {
    /// Adds the edge from `start` to `end`, failing if it is already present.
    fn add(&mut self, start: T, end: T) -> Result<(), DuplicateEdge>;

    /// Removes the edge from `start` to `end`, failing if it isn't present.
    fn remove(&mut self, start: &T, end: &T) -> Result<(), EdgeNotFound>;

    /// Removes every edge which starts or ends at `node`, returning how many were removed.
    fn remove_incident(&mut self, node: &T) -> usize;

    /// Returns true if the edge from `start` to `end` is present.
    fn exists(&self, start: &T, end: &T) -> bool;

    /// Steps through the end of every edge which starts at `node`, until `step` returns
    /// [`Signal::Break`].
    fn neighbors_break<S: VisitBreak<T>>(&self, node: &T, step: S) -> Signal;

    /// Steps through the end of every edge which starts at `node`.
    fn neighbors<S: Visit<T>>(&self, node: &T, step: S) {
        self.neighbors_break(node, Continuing(step));
    }

    /// Returns the number of edges which start at `node`.
    fn out_degree(&self, node: &T) -> usize {
        let mut degree = 0;
        self.neighbors(node, |_: &T| degree += 1);
        degree
    }

    /// Steps through every edge as a `(start, end)` pair, until `step` returns [`Signal::Break`].
    fn step_edges_break<S: VisitEdgeBreak<T>>(&self, step: S) -> Signal;

    /// Steps through every edge as a `(start, end)` pair.
    fn step_edges<S: VisitEdge<T>>(&self, step: S) {
        self.step_edges_break(Continuing(step));
    }
}
