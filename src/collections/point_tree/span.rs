use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use crate::collections::traits::Compare;

/// The range covered by a query along a single axis.
pub enum Span<'a, T> {
    /// Every value on the axis.
    Any,
    /// Every value between the two bounds, inclusive on both ends.
    Within(&'a T, &'a T),
}

impl<'a, T> Span<'a, T> {
    /// Creates a Span covering exactly one `value`.
    pub const fn exactly(value: &'a T) -> Span<'a, T> {
        Span::Within(value, value)
    }

    /// Returns true if `value` lies within this Span.
    pub fn contains<C: Compare<T>>(&self, value: &T, compare: &C) -> bool {
        match self {
            Span::Any => true,
            Span::Within(min, max) => {
                compare.compare(min, value) != Ordering::Greater
                    && compare.compare(value, max) != Ordering::Greater
            },
        }
    }

    /// Returns true if any value ordered strictly before `split` could lie within this Span.
    pub(crate) fn reaches_before<C: Compare<T>>(&self, split: &T, compare: &C) -> bool {
        match self {
            Span::Any => true,
            Span::Within(min, _) => compare.compare(min, split) == Ordering::Less,
        }
    }

    /// Returns true if `split` or any value ordered after it could lie within this Span.
    pub(crate) fn reaches_from<C: Compare<T>>(&self, split: &T, compare: &C) -> bool {
        match self {
            Span::Any => true,
            Span::Within(_, max) => compare.compare(max, split) != Ordering::Less,
        }
    }
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<T: Debug> Debug for Span<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Span::Any => write!(f, ".."),
            Span::Within(min, max) => write!(f, "{min:?}..={max:?}"),
        }
    }
}
