use std::iter::FusedIterator;

use super::PointTree;
use super::node::Node;

impl<'a, T, C> IntoIterator for &'a PointTree<T, C> {
    type Item = (&'a T, &'a T);

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            stack: self.root.0.as_deref().into_iter().collect(),
            len: self.len,
        }
    }
}

/// A type for borrowed iteration over a [`PointTree`]'s points, in the same order as
/// [`PointTree::step_within`] with unbounded spans. Produces values of type `(&T, &T)`.
pub struct Iter<'a, T> {
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.len -= 1;

        // The right subtree is pushed first so that the left one is visited first.
        self.stack.extend(node.right.0.as_deref());
        self.stack.extend(node.left.0.as_deref());

        Some((&node.point[0], &node.point[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
