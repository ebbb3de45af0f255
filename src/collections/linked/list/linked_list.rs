use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Link, Node, NodePtr, ONE};
use crate::collections::traits::{Clear, Count, List};
use crate::step::{Signal, Stepper, StepperMut, VisitBreak, VisitMutBreak, drive};
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A list with links in one direction, from front to back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `append` | `O(1)` |
/// | `remove_first` | `O(n)` |
/// | `remove_all` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// The list keeps a pointer to its last node as well as its first, so appending is constant time
/// even without links back towards the front. Removing from the back isn't offered, because it
/// would have to walk the whole list to find the new last node.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the new length would overflow [`usize`].
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                contents.head = NodePtr::from_node(Node {
                    value,
                    next: Some(contents.head),
                });
            },
        }
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the new length would overflow [`usize`].
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                let node = NodePtr::from_node(Node {
                    value,
                    next: None,
                });
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let Full(contents) = &mut self.state else { return None };
        let head = contents.head;

        let (value, remaining) = contents.unlink(None, head);
        if remaining.is_none() {
            self.state = Empty;
        }
        Some(value)
    }

    /// Moves every element of `other` onto the end of this list, leaving `other` empty.
    ///
    /// # Panics
    /// Panics if the combined length would overflow [`usize`].
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        let Full(theirs) = mem::take(&mut other.state) else { return };

        match &mut self.state {
            Empty => self.state = Full(theirs),
            Full(ours) => {
                ours.len = ours.len.checked_add(theirs.len.get()).ok_or(CapacityOverflow).throw();
                *ours.tail.next_mut() = Some(theirs.head);
                ours.tail = theirs.tail;
            },
        }
    }

    /// Removes and returns the first element for which `predicate` returns true.
    pub fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Option<T> {
        let Full(contents) = &mut self.state else { return None };
        let mut prev = None;
        let mut current = Some(contents.head);

        while let Some(node) = current {
            if predicate(node.value()) {
                let (value, remaining) = contents.unlink(prev, node);
                if remaining.is_none() {
                    self.state = Empty;
                }
                return Some(value);
            }
            prev = current;
            current = *node.next();
        }
        None
    }

    /// Removes every element for which `predicate` returns true, keeping the order of those that
    /// remain. Returns the number of elements removed.
    pub fn remove_all_where<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> usize {
        let Full(contents) = &mut self.state else { return 0 };
        let mut removed = 0;
        let mut prev = None;
        let mut current = Some(contents.head);

        while let Some(node) = current {
            // Read the link before the node is potentially freed.
            current = *node.next();

            if predicate(node.value()) {
                // The value is dropped only once the list is consistent again, as the drop may
                // panic.
                let (value, remaining) = contents.unlink(prev, node);
                removed += 1;
                if remaining.is_none() {
                    self.state = Empty;
                    drop(value);
                    break;
                }
                drop(value);
            } else {
                prev = Some(node);
            }
        }
        removed
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Returns an iterator over all elements in the list, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all elements in the list, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) fn head(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }
}

impl<T> ListState<T> {
    pub(crate) fn single(value: T) -> ListState<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }
}

impl<T> ListContents<T> {
    /// Unlinks and frees `node`, which must directly follow `prev` (or be the head if `prev` is
    /// None). Returns the node's value along with the new length, which is None if the list is now
    /// empty. In that case, the contents are left dangling and must be discarded.
    pub(crate) fn unlink(&mut self, prev: Link<T>, node: NodePtr<T>) -> (T, Option<Length>) {
        let next = *node.next();

        match prev {
            Some(prev) => *prev.next_mut() = next,
            None => {
                if let Some(next) = next {
                    self.head = next;
                }
            },
        }
        if node == self.tail
            && let Some(prev) = prev
        {
            self.tail = prev;
        }

        let remaining = self.len.checked_sub(1);
        if let Some(len) = remaining {
            self.len = len;
        }

        // SAFETY: The node is no longer reachable from the list, so this is the only copy of the
        // pointer that will be used again.
        (unsafe { node.take_node() }.value, remaining)
    }
}

impl<T> List<T> for LinkedList<T> {
    fn add(&mut self, value: T) {
        self.push_back(value)
    }

    fn remove_first<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T> {
        self.remove_first_where(predicate)
    }

    fn remove_all<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> usize {
        self.remove_all_where(predicate)
    }
}

impl<T> Stepper<T> for LinkedList<T> {
    /// Steps through the list from front to back.
    fn step_break<S: VisitBreak<T>>(&self, mut step: S) -> Signal {
        drive(self, |item| step.visit(item))
    }
}

impl<T> StepperMut<T> for LinkedList<T> {
    /// Steps through the list from front to back, allowing each element to be replaced.
    fn step_mut_break<S: VisitMutBreak<T>>(&mut self, mut step: S) -> Signal {
        drive(self, |item| step.visit_mut(item))
    }
}

impl<T> Count for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Clear for LinkedList<T> {
    fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
