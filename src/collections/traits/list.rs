use super::{Clear, Count};
use crate::step::{Stepper, StepperMut};

/// A sequence which keeps elements in the order they were added.
pub trait List<T>: Count + Clear + Stepper<T> + StepperMut<T> {
    /// Adds `value` to the end of the list.
    fn add(&mut self, value: T);

    /// Removes and returns the first element for which `predicate` returns true.
    fn remove_first<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T>;

    /// Removes every element for which `predicate` returns true, returning how many were removed.
    fn remove_all<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> usize;

    /// Removes and returns the first element equal to `value`.
    fn remove_first_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_first(|item| item == value)
    }

    /// Removes every element equal to `value`, returning how many were removed.
    fn remove_all_value(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_all(|item| item == value)
    }
}
