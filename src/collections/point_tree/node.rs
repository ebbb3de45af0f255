use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::Span;
use crate::collections::traits::Compare;
use crate::step::{Signal, VisitEdgeBreak};

/// The number of axes in the tree, one for the start and one for the end of each point.
pub(crate) const AXES: usize = 2;

/// The axis which a node at `depth` splits its subtrees on.
pub(crate) const fn axis(depth: usize) -> usize {
    depth % AXES
}

#[derive(Clone)]
pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub point: [T; AXES],
}

/// Compares two points on every axis, returning true only if all of them are equal.
fn points_eq<T, C: Compare<T>>(a: [&T; AXES], b: &[T; AXES], compare: &C) -> bool {
    a.into_iter().zip(b).all(|(a, b)| compare.compare(a, b) == Ordering::Equal)
}

impl<T> Branch<T> {
    pub const fn empty() -> Branch<T> {
        Branch(None)
    }

    /// Inserts `point`, without checking whether it is already present.
    pub fn insert<C: Compare<T>>(&mut self, point: [T; AXES], depth: usize, compare: &C) {
        match &mut self.0 {
            Some(node) => {
                let a = axis(depth);
                match compare.compare(&point[a], &node.point[a]) {
                    Ordering::Less => node.left.insert(point, depth + 1, compare),
                    _ => node.right.insert(point, depth + 1, compare),
                }
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: Branch::empty(),
                    right: Branch::empty(),
                    point,
                }));
            },
        }
    }

    pub fn get<C: Compare<T>>(
        &self,
        point: [&T; AXES],
        depth: usize,
        compare: &C,
    ) -> Option<&[T; AXES]> {
        let node = self.0.as_ref()?;
        if points_eq(point, &node.point, compare) {
            return Some(&node.point);
        }

        let a = axis(depth);
        match compare.compare(point[a], &node.point[a]) {
            Ordering::Less => node.left.get(point, depth + 1, compare),
            _ => node.right.get(point, depth + 1, compare),
        }
    }

    pub fn remove<C: Compare<T>>(
        &mut self,
        point: [&T; AXES],
        depth: usize,
        compare: &C,
    ) -> Option<[T; AXES]> {
        let node = self.0.as_mut()?;
        if points_eq(point, &node.point, compare) {
            return self.take_root(depth, compare);
        }

        let a = axis(depth);
        match compare.compare(point[a], &node.point[a]) {
            Ordering::Less => node.left.remove(point, depth + 1, compare),
            _ => node.right.remove(point, depth + 1, compare),
        }
    }

    /// Removes every point within `spans`, returning the number of points removed.
    pub fn remove_within<C: Compare<T>>(
        &mut self,
        spans: &[Span<'_, T>; AXES],
        depth: usize,
        compare: &C,
    ) -> usize {
        let Some(node) = self.0.as_mut() else { return 0 };
        let a = axis(depth);
        let mut removed = 0;

        if spans[a].reaches_before(&node.point[a], compare) {
            removed += node.left.remove_within(spans, depth + 1, compare);
        }
        if spans[a].reaches_from(&node.point[a], compare) {
            removed += node.right.remove_within(spans, depth + 1, compare);
        }

        // Both subtrees are now free of matching points, so the point which replaces this one
        // can't match either.
        if spans.iter().zip(&node.point).all(|(span, value)| span.contains(value, compare)) {
            self.take_root(depth, compare);
            removed += 1;
        }
        removed
    }

    /// Steps through every point within `spans`, visiting each node before its subtrees.
    pub fn step_within<C: Compare<T>, S: VisitEdgeBreak<T>>(
        &self,
        spans: &[Span<'_, T>; AXES],
        depth: usize,
        compare: &C,
        step: &mut S,
    ) -> Signal {
        let Some(node) = &self.0 else { return Signal::Continue };
        let a = axis(depth);

        if spans.iter().zip(&node.point).all(|(span, value)| span.contains(value, compare))
            && step.visit(&node.point[0], &node.point[1]).is_break()
        {
            return Signal::Break;
        }

        if spans[a].reaches_before(&node.point[a], compare)
            && node.left.step_within(spans, depth + 1, compare, step).is_break()
        {
            return Signal::Break;
        }
        if spans[a].reaches_from(&node.point[a], compare) {
            return node.right.step_within(spans, depth + 1, compare, step);
        }
        Signal::Continue
    }

    /// Removes the point stored at the root of this branch, restructuring the subtree so that the
    /// split invariant still holds.
    fn take_root<C: Compare<T>>(&mut self, depth: usize, compare: &C) -> Option<[T; AXES]> {
        let node = self.0.as_mut()?;
        let a = axis(depth);

        let replacement = if node.right.0.is_some() {
            node.right.take_min(a, depth + 1, compare)
        } else if node.left.0.is_some() {
            // Everything left of this node becomes the right subtree of its minimum, which is
            // allowed because equal values belong on the right.
            let min = node.left.take_min(a, depth + 1, compare);
            node.right = mem::replace(&mut node.left, Branch::empty());
            min
        } else {
            None
        };

        match replacement {
            Some(point) => Some(mem::replace(&mut node.point, point)),
            None => mem::take(&mut self.0).map(|node| node.point),
        }
    }

    /// Removes and returns a point with the minimum value on axis `a` from this branch.
    fn take_min<C: Compare<T>>(
        &mut self,
        a: usize,
        depth: usize,
        compare: &C,
    ) -> Option<[T; AXES]> {
        let node = self.0.as_mut()?;

        if axis(depth) == a {
            // Only the left subtree can hold anything smaller on the split axis.
            return match node.left.0 {
                Some(_) => node.left.take_min(a, depth + 1, compare),
                None => self.take_root(depth, compare),
            };
        }

        let own = &node.point[a];
        let left = node.left.min(a, depth + 1, compare);
        let right = node.right.min(a, depth + 1, compare);
        let below = |candidate: Option<&T>, current: &T| {
            candidate.is_some_and(|c| compare.compare(c, current) == Ordering::Less)
        };

        if below(left, own) && !below(right, left.unwrap_or(own)) {
            node.left.take_min(a, depth + 1, compare)
        } else if below(right, own) {
            node.right.take_min(a, depth + 1, compare)
        } else {
            self.take_root(depth, compare)
        }
    }

    /// Returns the minimum value on axis `a` held within this branch.
    fn min<C: Compare<T>>(&self, a: usize, depth: usize, compare: &C) -> Option<&T> {
        let node = self.0.as_ref()?;

        if axis(depth) == a {
            return node.left.min(a, depth + 1, compare).or(Some(&node.point[a]));
        }

        let mut min = &node.point[a];
        let children = [
            node.left.min(a, depth + 1, compare),
            node.right.min(a, depth + 1, compare),
        ];
        for value in children.into_iter().flatten() {
            if compare.compare(value, min) == Ordering::Less {
                min = value;
            }
        }
        Some(min)
    }

    /// Returns the number of levels in the branch.
    pub fn depth(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + node.left.depth().max(node.right.depth()),
            None => 0,
        }
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}, {:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.point[0],
                node.point[1],
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
