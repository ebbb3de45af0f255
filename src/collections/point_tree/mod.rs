//! A two-dimensional point tree (a k-d tree with k = 2), storing unique `(start, end)` pairs and
//! answering rectangular range queries.
//!
//! Levels alternate between the start axis and the end axis. On each level, points ordered before
//! the split point (by the tree's [`Compare`](crate::collections::traits::Compare)) are stored to
//! the left and all others to the right, so a query given as a [`Span`] per axis can skip any
//! subtree which lies outside the span on that subtree's split axis.

mod iter;
mod node;
mod point_tree;
mod span;


pub use iter::*;
pub use point_tree::*;
pub use span::*;
