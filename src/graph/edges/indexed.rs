use std::fmt::{self, Debug, Formatter};

use super::EdgeStore;
use crate::collections::point_tree::{PointTree, Span};
use crate::collections::traits::{Clear, Compare, Count, Natural};
use crate::graph::error::{DuplicateEdge, EdgeNotFound};
use crate::step::{Signal, VisitBreak, VisitEdgeBreak};

/// An [`EdgeStore`] which keeps every edge as a point in a two-dimensional [`PointTree`].
///
/// Because the tree can be queried on either coordinate, outgoing edges (fixed start) and incoming
/// edges (fixed end) are both found with a range query rather than a scan, which keeps
/// [`remove_incident`](EdgeStore::remove_incident) proportional to the number of edges removed.
/// Nodes only need to be comparable with `C`, in addition to the hashing the node set requires.
pub struct IndexedEdges<T, C = Natural<T>> {
    pub(crate) tree: PointTree<T, C>,
}

impl<T, C: Compare<T> + Default> IndexedEdges<T, C> {
    pub fn new() -> IndexedEdges<T, C> {
        IndexedEdges::with_compare(C::default())
    }
}

impl<T, C: Compare<T>> IndexedEdges<T, C> {
    /// Creates an empty store which orders nodes with `compare`.
    pub const fn with_compare(compare: C) -> IndexedEdges<T, C> {
        IndexedEdges {
            tree: PointTree::with_compare(compare),
        }
    }

    /// Steps through the start of every edge which ends at `node`, until `step` returns
    /// [`Signal::Break`].
    pub fn incoming_break<S: VisitBreak<T>>(&self, node: &T, mut step: S) -> Signal {
        self.tree.step_within_break(Span::Any, Span::exactly(node), |start: &T, _: &T| {
            step.visit(start)
        })
    }
}

impl<T, C: Compare<T>> EdgeStore<T> for IndexedEdges<T, C> {
    fn add(&mut self, start: T, end: T) -> Result<(), DuplicateEdge> {
        if self.tree.insert(start, end) { Ok(()) } else { Err(DuplicateEdge) }
    }

    fn remove(&mut self, start: &T, end: &T) -> Result<(), EdgeNotFound> {
        self.tree.remove(start, end).map(drop).ok_or(EdgeNotFound)
    }

    fn remove_incident(&mut self, node: &T) -> usize {
        // A self-loop matches both queries, but is gone by the time the second one runs.
        self.tree.remove_within(Span::exactly(node), Span::Any)
            + self.tree.remove_within(Span::Any, Span::exactly(node))
    }

    fn exists(&self, start: &T, end: &T) -> bool {
        self.tree.contains(start, end)
    }

    fn neighbors_break<S: VisitBreak<T>>(&self, node: &T, mut step: S) -> Signal {
        self.tree.step_within_break(Span::exactly(node), Span::Any, |_: &T, end: &T| {
            step.visit(end)
        })
    }

    fn step_edges_break<S: VisitEdgeBreak<T>>(&self, step: S) -> Signal {
        self.tree.step_within_break(Span::Any, Span::Any, step)
    }
}

impl<T, C> Count for IndexedEdges<T, C> {
    fn len(&self) -> usize {
        self.tree.len
    }
}

impl<T, C> Clear for IndexedEdges<T, C> {
    fn clear(&mut self) {
        self.tree.clear()
    }
}

impl<T: Clone, C: Clone> Clone for IndexedEdges<T, C> {
    fn clone(&self) -> Self {
        IndexedEdges {
            tree: self.tree.clone(),
        }
    }
}

impl<T, C: Compare<T> + Default> Default for IndexedEdges<T, C> {
    fn default() -> Self {
        IndexedEdges::new()
    }
}

impl<T: Debug, C> Debug for IndexedEdges<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Always the flat form, as the tree diagram is only drawn for the tree's own `{:#?}`.
        f.debug_set().entries(&self.tree).finish()
    }
}
