use std::cmp::Ordering;
use std::marker::PhantomData;

/// A three-way comparison used by ordered collections in place of [`Ord`], so that the ordering
/// can be chosen when the collection is constructed.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparison. Implementations must describe a total
/// order; anything else is a logic error that leaves lookups in the collection unreliable.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Compares values by their [`Ord`] implementation.
pub struct Natural<T: ?Sized>(PhantomData<fn(&T, &T) -> Ordering>);

impl<T: ?Sized> Natural<T> {
    pub const fn new() -> Natural<T> {
        Natural(PhantomData)
    }
}

impl<T: Ord + ?Sized> Compare<T> for Natural<T> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

// Manual impls, because derives would require T to implement these traits as well.

impl<T: ?Sized> Default for Natural<T> {
    fn default() -> Self {
        Natural::new()
    }
}

impl<T: ?Sized> Clone for Natural<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Natural<T> {}

impl<T: ?Sized> std::fmt::Debug for Natural<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Natural")
    }
}

/// Reverses the order of another comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for F {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
