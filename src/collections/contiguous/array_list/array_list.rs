use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::{cmp, ptr, slice};

use log::trace;

use crate::collections::traits::{Clear, Count, List};
use crate::step::{Signal, Stepper, StepperMut, VisitBreak, VisitMutBreak};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ZeroCapacity};
use crate::util::result::ResultExtension;

const DEFAULT_MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection with an explicitly managed capacity.
///
/// The capacity doubles whenever an element is added to a full ArrayList. After removals, it
/// halves for as long as fewer than half of the slots are occupied, but never drops below the
/// minimum capacity the list was created with. Unlike [`Vec`], the capacity is always exactly the
/// value described by these rules.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)`**, `O(n)` |
/// | `remove_without_shrink` | `O(n-i)` |
/// | `remove_all` | `O(n)` |
/// | `set` | `O(1)` |
/// | `trim` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the removal leaves the ArrayList less than half full, `remove` will take `O(n)`.
pub struct ArrayList<T> {
    pub(crate) arr: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
    pub(crate) min_cap: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new ArrayList with a minimum capacity of 1.
    pub fn new() -> ArrayList<T> {
        ArrayList {
            arr: Box::new_uninit_slice(DEFAULT_MIN_CAP),
            len: 0,
            min_cap: DEFAULT_MIN_CAP,
        }
    }

    /// Creates a new ArrayList with an initial (and minimum) capacity of `min_cap`, allowing that
    /// many values to be added without reallocation.
    pub fn with_cap(min_cap: usize) -> Result<ArrayList<T>, ZeroCapacity> {
        if min_cap == 0 {
            return Err(ZeroCapacity);
        }

        Ok(ArrayList {
            arr: Box::new_uninit_slice(min_cap),
            len: 0,
            min_cap,
        })
    }

    /// Returns the length of the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the ArrayList.
    pub const fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Returns the capacity below which the ArrayList never shrinks on its own.
    pub const fn min_cap(&self) -> usize {
        self.min_cap
    }

    /// Pushes the provided value onto the end of the ArrayList, doubling the capacity if required.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`].
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len].write(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the ArrayList, shrinking afterwards if the list has
    /// become sparse.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.take_last();
        self.shrink_if_sparse();
        Some(value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at the provided `index` with `value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Replaces the element at the provided `index` with `value`, returning the old value or an
    /// [`Err`] if `index` is out of bounds.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Inserts the provided value at the given `index`, growing and moving items as necessary. An
    /// `index` equal to the length of the list appends the value.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the ArrayList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given `index`, returning an [`Err`] and dropping `value`
    /// if `index` is greater than the length of the ArrayList.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided `index`, moving all following values to fill in the
    /// gap, then shrinks the capacity if the list has become sparse.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided `index`, as [`remove`](ArrayList::remove) does, but
    /// returns an [`Err`] if `index` is out of bounds rather than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let value = self.try_remove_without_shrink(index)?;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes the element at the provided `index` without adjusting the capacity.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn remove_without_shrink(&mut self, index: usize) -> T {
        self.try_remove_without_shrink(index).throw()
    }

    /// Removes the element at the provided `index` without adjusting the capacity, returning an
    /// [`Err`] if `index` is out of bounds.
    pub fn try_remove_without_shrink(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Removes and returns the first element for which `predicate` returns true, shrinking the
    /// capacity afterwards if required.
    pub fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T> {
        let index = self.as_slice().iter().position(predicate)?;
        Some(self.remove(index))
    }

    /// Removes every element for which `predicate` returns true and shrinks the capacity if the
    /// list has become sparse. Returns the number of elements removed.
    pub fn remove_all_where<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> usize {
        let removed = self.remove_all_without_shrink(predicate);
        self.shrink_if_sparse();
        removed
    }

    /// Removes every element for which `predicate` returns true without adjusting the capacity.
    /// Remaining elements keep their relative order. Returns the number of elements removed.
    pub fn remove_all_without_shrink<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> usize {
        let len = self.len;
        // The length only ever covers kept elements, so a panicking predicate leaks the rest.
        self.len = 0;

        let mut kept = 0;
        for i in 0..len {
            // SAFETY: Every index below the original length is initialized, and each is read once.
            let value = unsafe { self.arr[i].assume_init_read() };
            if predicate(&value) {
                drop(value);
            } else {
                self.arr[kept].write(value);
                kept += 1;
                self.len = kept;
            }
        }

        len - kept
    }

    /// Reduces the capacity so that it is equal to the length of the ArrayList.
    pub fn trim(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Ensures that the ArrayList has capacity to hold an additional `extra` elements.
    ///
    /// # Panics
    /// Panics if the required capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Returns true if the ArrayList contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns the initialized elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first len values are initialized. Reinterpreting *const MaybeUninit<T> as
        // *const T is valid, because both have the same layout.
        unsafe { slice::from_raw_parts(self.arr.as_ptr().cast(), self.len) }
    }

    /// Returns the initialized elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As with as_slice, and the borrow checker enforces exclusive access.
        unsafe { slice::from_raw_parts_mut(self.arr.as_mut_ptr().cast(), self.len) }
    }

    /// Moves the last element out of the list. The list must not be empty.
    fn take_last(&mut self) -> T {
        self.len -= 1;
        // SAFETY: The value at the old len - 1 is initialized and now outside of the list, so it
        // won't be read again.
        unsafe { self.arr[self.len].assume_init_read() }
    }

    /// Doubles the capacity, to at least the minimum capacity.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        self.realloc_with_cap(cmp::max(new_cap, self.min_cap));
    }

    /// Halves the capacity for as long as the list is less than half full and the result is no
    /// smaller than the minimum capacity.
    pub(crate) fn shrink_if_sparse(&mut self) {
        let mut new_cap = self.cap();
        while self.len < new_cap / 2 && new_cap / 2 >= self.min_cap {
            new_cap /= 2;
        }

        if new_cap != self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Moves the elements into a new allocation of exactly `new_cap` slots, which must be at least
    /// the length of the list.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        trace!("ArrayList reallocating from {} to {} slots", self.cap(), new_cap);

        let mut new_arr = Box::new_uninit_slice(new_cap);
        // SAFETY: Both allocations hold at least len slots and don't overlap. The old slots are
        // treated as moved-from, because dropping a MaybeUninit never drops its contents.
        unsafe {
            ptr::copy_nonoverlapping(self.arr.as_ptr(), new_arr.as_mut_ptr(), self.len);
        }
        self.arr = new_arr;
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add(&mut self, value: T) {
        self.push(value)
    }

    fn remove_first<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T> {
        self.remove_first_where(predicate)
    }

    fn remove_all<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> usize {
        self.remove_all_where(predicate)
    }
}

impl<T> Stepper<T> for ArrayList<T> {
    /// Steps through the list in index order.
    fn step_break<S: VisitBreak<T>>(&self, step: S) -> Signal {
        self.as_slice().step_break(step)
    }
}

impl<T> StepperMut<T> for ArrayList<T> {
    /// Steps through the list in index order, allowing each element to be replaced.
    fn step_mut_break<S: VisitMutBreak<T>>(&mut self, step: S) -> Signal {
        self.as_mut_slice().step_mut_break(step)
    }
}

impl<T> Count for ArrayList<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Clear for ArrayList<T> {
    /// Drops every element and returns the capacity to the minimum.
    fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        for slot in &mut self.arr[..len] {
            // SAFETY: Every slot below the old length is initialized and is dropped exactly once.
            unsafe { slot.assume_init_drop() };
        }
        self.realloc_with_cap(self.min_cap);
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for slot in &mut self.arr[..self.len] {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { slot.assume_init_drop() };
        }

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        ArrayList::new()
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for ArrayList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList {
            arr: Box::new_uninit_slice(self.cap()),
            len: 0,
            min_cap: self.min_cap,
        };

        for value in self.as_slice() {
            list.push(value.clone());
        }

        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
