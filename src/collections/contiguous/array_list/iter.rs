use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::slice::{Iter, IterMut};

use super::ArrayList;

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // Leave an empty list behind, so that dropping it doesn't drop the moved elements.
        self.len = 0;

        IntoIter {
            arr: mem::take(&mut self.arr),
            start: 0,
            end,
        }
    }
}

/// A type for owned iteration over an [`ArrayList`], in index order.
pub struct IntoIter<T> {
    pub(crate) arr: Box<[MaybeUninit<T>]>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: Slots from start to end are initialized and each is read exactly once.
        let value = unsafe { self.arr[self.start].assume_init_read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: As with next.
        Some(unsafe { self.arr[self.end].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.arr[self.start..self.end] {
            // SAFETY: Slots which haven't been yielded are still initialized.
            unsafe { slot.assume_init_drop() };
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
