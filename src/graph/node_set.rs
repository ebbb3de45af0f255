use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::error::{DuplicateNode, NodeNotFound};
use crate::collections::hash::HashSet;
use crate::collections::hash::set::Iter;
use crate::collections::traits::{Clear, Count};
use crate::step::{Signal, Stepper, VisitBreak};

/// The set of unique nodes in a graph.
///
/// Unlike a plain [`HashSet`], adding or removing a node reports whether it succeeded as a
/// [`Result`], so that a graph can pass the outcome straight on to its callers. Nodes are stepped
/// through in bucket order, which isn't stable across insertions or removals.
pub struct NodeSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: HashSet<T, B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> NodeSet<T, B> {
    pub fn new() -> NodeSet<T, B> {
        NodeSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> NodeSet<T, B> {
    pub fn with_hasher(hasher: B) -> NodeSet<T, B> {
        NodeSet {
            inner: HashSet::with_hasher(hasher),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `node` to the set, failing if an equal node is already present.
    pub fn add(&mut self, node: T) -> Result<(), DuplicateNode> {
        if self.inner.insert(node) { Ok(()) } else { Err(DuplicateNode) }
    }

    /// Removes the node equal to `node` from the set and returns it.
    pub fn remove<Q>(&mut self, node: &Q) -> Result<T, NodeNotFound>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(node).ok_or(NodeNotFound)
    }

    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(node)
    }

    /// Returns an iterator over every node, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Stepper<T> for NodeSet<T, B> {
    fn step_break<S: VisitBreak<T>>(&self, step: S) -> Signal {
        self.inner.step_break(step)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Count for NodeSet<T, B> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Clear for NodeSet<T, B> {
    fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for NodeSet<T, B> {
    fn clone(&self) -> Self {
        NodeSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for NodeSet<T, B> {
    fn default() -> Self {
        NodeSet::new()
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a NodeSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for NodeSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
