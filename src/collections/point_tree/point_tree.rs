use std::fmt::{self, Debug, Formatter};

use super::Iter;
use super::Span;
use super::node::Branch;
use crate::collections::traits::{Clear, Compare, Count, Natural};
use crate::step::{Continuing, Signal, VisitEdge, VisitEdgeBreak};

/// A set of unique `(start, end)` points, organized for range queries on both coordinates at once.
///
/// Coordinates are ordered by a [`Compare`] value, which defaults to [`Natural`] ordering. Two
/// points are equal if both of their coordinates compare as equal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of points in the PointTree.
/// - `k`: The number of points matched by a query.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)`* |
/// | `contains` | `O(log n)`* |
/// | `remove` | `O(log n)`* |
/// | `step_within` | `O(sqrt(n) + k)`** |
/// | `remove_within` | `O(sqrt(n) + k)`** |
///
/// \* For a balanced tree. The tree doesn't rebalance itself, so inserting points in sorted order
/// degrades these to `O(n)`.
///
/// \** When one axis is fixed to a single value and the other is unbounded, for a balanced tree.
/// Removal additionally pays for restructuring below each removed point.
pub struct PointTree<T, C = Natural<T>> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
    pub(crate) compare: C,
}

impl<T, C: Compare<T> + Default> PointTree<T, C> {
    /// Creates a new, empty PointTree using the default comparator.
    pub fn new() -> PointTree<T, C> {
        PointTree::with_compare(C::default())
    }
}

impl<T, C: Compare<T>> PointTree<T, C> {
    /// Creates a new, empty PointTree which orders coordinates with `compare`.
    pub const fn with_compare(compare: C) -> PointTree<T, C> {
        PointTree {
            root: Branch::empty(),
            len: 0,
            compare,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the comparator used to order coordinates.
    pub const fn compare(&self) -> &C {
        &self.compare
    }

    /// Returns the number of levels in the tree, which is 0 when it's empty.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Inserts the point `(start, end)`, returning false and leaving the tree unchanged if an equal
    /// point is already present.
    pub fn insert(&mut self, start: T, end: T) -> bool {
        if self.contains(&start, &end) {
            return false;
        }

        self.root.insert([start, end], 0, &self.compare);
        self.len += 1;
        true
    }

    /// Returns true if the tree contains a point equal to `(start, end)`.
    pub fn contains(&self, start: &T, end: &T) -> bool {
        self.root.get([start, end], 0, &self.compare).is_some()
    }

    /// Removes the point equal to `(start, end)` and returns it, if present.
    pub fn remove(&mut self, start: &T, end: &T) -> Option<(T, T)> {
        let [start, end] = self.root.remove([start, end], 0, &self.compare)?;
        self.len -= 1;
        Some((start, end))
    }

    /// Removes every point with a start within `start` and an end within `end`, returning the
    /// number of points removed.
    pub fn remove_within(&mut self, start: Span<'_, T>, end: Span<'_, T>) -> usize {
        let removed = self.root.remove_within(&[start, end], 0, &self.compare);
        self.len -= removed;
        removed
    }

    /// Visits every point with a start within `start` and an end within `end`, until `step`
    /// returns [`Signal::Break`].
    ///
    /// Points are visited in tree order, with each point visited before the points below it.
    pub fn step_within_break<S: VisitEdgeBreak<T>>(
        &self,
        start: Span<'_, T>,
        end: Span<'_, T>,
        mut step: S,
    ) -> Signal {
        self.root.step_within(&[start, end], 0, &self.compare, &mut step)
    }

    /// Visits every point with a start within `start` and an end within `end`.
    pub fn step_within<S: VisitEdge<T>>(&self, start: Span<'_, T>, end: Span<'_, T>, step: S) {
        self.step_within_break(start, end, Continuing(step));
    }

    /// Returns an iterator over every point in the tree.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T, C> Count for PointTree<T, C> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, C> Clear for PointTree<T, C> {
    fn clear(&mut self) {
        self.root = Branch::empty();
        self.len = 0;
    }
}

impl<T: Clone, C: Clone> Clone for PointTree<T, C> {
    fn clone(&self) -> Self {
        PointTree {
            root: self.root.clone(),
            len: self.len,
            compare: self.compare.clone(),
        }
    }
}

impl<T, C: Compare<T> + Default> Default for PointTree<T, C> {
    fn default() -> Self {
        PointTree::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<(T, T)> for PointTree<T, C> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut tree = PointTree::new();
        for (start, end) in iter {
            tree.insert(start, end);
        }
        tree
    }
}

impl<T: Debug, C> Debug for PointTree<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:?}", self.root)
        } else {
            f.debug_set().entries(self).finish()
        }
    }
}
