use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::EdgeStore;
use crate::collections::hash::{HashMap, HashSet};
use crate::collections::traits::{Clear, Count};
use crate::graph::error::{DuplicateEdge, EdgeNotFound};
use crate::step::{Signal, Stepper, VisitBreak, VisitEdgeBreak, drive};

/// An [`EdgeStore`] which maps every node with outgoing edges to the set of its neighbors.
///
/// Checking for an edge or stepping through a node's neighbors only touches that node's own set,
/// but finding the edges which end at a node means scanning every set.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `e`: The number of edges in the store.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `exists` | `O(1)`* |
/// | `remove_incident` | `O(e)` |
///
/// \* Expected, as for [`HashMap`].
pub struct AdjacencyEdges<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) map: HashMap<T, HashSet<T, B>, B>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<T: Hash + Eq, B: BuildHasher + Clone + Default> AdjacencyEdges<T, B> {
    pub fn new() -> AdjacencyEdges<T, B> {
        AdjacencyEdges::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Clone> AdjacencyEdges<T, B> {
    /// Creates an empty store, which hashes with a copy of `hasher` for the map and for each
    /// neighbor set.
    pub fn with_hasher(hasher: B) -> AdjacencyEdges<T, B> {
        AdjacencyEdges {
            map: HashMap::with_hasher(hasher.clone()),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of nodes which currently have outgoing edges.
    pub const fn sources(&self) -> usize {
        self.map.len()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Clone> EdgeStore<T> for AdjacencyEdges<T, B> {
    fn add(&mut self, start: T, end: T) -> Result<(), DuplicateEdge> {
        let hasher = &self.hasher;
        let neighbors = self.map.get_or_insert_with(start, || HashSet::with_hasher(hasher.clone()));

        if !neighbors.insert(end) {
            return Err(DuplicateEdge);
        }
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, start: &T, end: &T) -> Result<(), EdgeNotFound> {
        let neighbors = self.map.get_mut(start).ok_or(EdgeNotFound)?;
        neighbors.remove(end).ok_or(EdgeNotFound)?;
        self.len -= 1;

        if neighbors.is_empty() {
            self.map.remove(start);
        }
        Ok(())
    }

    fn remove_incident(&mut self, node: &T) -> usize {
        let mut removed = self.map.remove(node).map_or(0, |neighbors| neighbors.len());

        for neighbors in self.map.values_mut() {
            if neighbors.remove(node).is_some() {
                removed += 1;
            }
        }
        self.map.retain(|_, neighbors| !neighbors.is_empty());

        self.len -= removed;
        removed
    }

    fn exists(&self, start: &T, end: &T) -> bool {
        self.map.get(start).is_some_and(|neighbors| neighbors.contains(end))
    }

    fn neighbors_break<S: VisitBreak<T>>(&self, node: &T, step: S) -> Signal {
        match self.map.get(node) {
            Some(neighbors) => neighbors.step_break(step),
            None => Signal::Continue,
        }
    }

    fn out_degree(&self, node: &T) -> usize {
        self.map.get(node).map_or(0, |neighbors| neighbors.len())
    }

    fn step_edges_break<S: VisitEdgeBreak<T>>(&self, mut step: S) -> Signal {
        let edges = self.map.iter()
            .flat_map(|(start, neighbors)| neighbors.iter().map(move |end| (start, end)));

        drive(edges, |(start, end)| step.visit(start, end))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Count for AdjacencyEdges<T, B> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Hash + Eq, B: BuildHasher> Clear for AdjacencyEdges<T, B> {
    fn clear(&mut self) {
        self.map.clear();
        self.len = 0;
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for AdjacencyEdges<T, B> {
    fn clone(&self) -> Self {
        AdjacencyEdges {
            map: self.map.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Clone + Default> Default for AdjacencyEdges<T, B> {
    fn default() -> Self {
        AdjacencyEdges::new()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for AdjacencyEdges<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyEdges")
            .field("map", &self.map)
            .field("len", &self.len)
            .finish()
    }
}
