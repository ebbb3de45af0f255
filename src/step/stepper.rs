use std::ops::Range;

use super::{Continuing, Signal, Visit, VisitBreak, VisitMut, VisitMutBreak};
use crate::util::error::IndexOutOfBounds;

/// Read-only traversal over the elements of a container.
///
/// Implementors provide [`step_break`](Stepper::step_break); [`step`](Stepper::step) is derived
/// from it. The order of traversal is defined by the container, but must stay the same between
/// calls as long as the container isn't mutated.
pub trait Stepper<T> {
    /// Invokes `step` on each element until it returns [`Signal::Break`], returning the signal
    /// which ended the traversal.
    fn step_break<S: VisitBreak<T>>(&self, step: S) -> Signal;

    /// Invokes `step` on every element.
    fn step<S: Visit<T>>(&self, step: S) {
        self.step_break(Continuing(step));
    }
}

/// Traversal which may replace elements in place.
///
/// Replacing an element never changes the shape of the container. Adding or removing elements from
/// within a step isn't possible, as the traversal holds the only mutable borrow of the container.
pub trait StepperMut<T> {
    /// Invokes `step` on each element until it returns [`Signal::Break`], returning the signal
    /// which ended the traversal.
    fn step_mut_break<S: VisitMutBreak<T>>(&mut self, step: S) -> Signal;

    /// Invokes `step` on every element.
    fn step_mut<S: VisitMut<T>>(&mut self, step: S) {
        self.step_mut_break(Continuing(step));
    }
}

/// Feeds every item produced by `items` to `step`, stopping at the first [`Signal::Break`].
///
/// This is the one loop behind every traversal in the crate: a container describes its traversal
/// order as an iterator (of either `&T` or `&mut T`) and lets `drive` apply the protocol.
#[inline]
pub fn drive<I, F>(items: I, mut step: F) -> Signal
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Signal,
{
    for item in items {
        if step(item).is_break() {
            return Signal::Break;
        }
    }
    Signal::Continue
}

impl<T> Stepper<T> for [T] {
    fn step_break<S: VisitBreak<T>>(&self, mut step: S) -> Signal {
        drive(self, |item| step.visit(item))
    }
}

impl<T> StepperMut<T> for [T] {
    fn step_mut_break<S: VisitMutBreak<T>>(&mut self, mut step: S) -> Signal {
        drive(self, |item| step.visit_mut(item))
    }
}

/// Steps through the elements of `slice` within `range` only.
pub fn step_range<T, S: VisitBreak<T>>(
    slice: &[T],
    range: Range<usize>,
    step: S,
) -> Result<Signal, IndexOutOfBounds> {
    match slice.get(range.clone()) {
        Some(sub) => Ok(sub.step_break(step)),
        None => Err(IndexOutOfBounds {
            index: range.end.max(range.start),
            len: slice.len(),
        }),
    }
}

/// Steps through the elements of `slice` within `range` only, allowing replacement.
pub fn step_range_mut<T, S: VisitMutBreak<T>>(
    slice: &mut [T],
    range: Range<usize>,
    step: S,
) -> Result<Signal, IndexOutOfBounds> {
    let len = slice.len();
    match slice.get_mut(range.clone()) {
        Some(sub) => Ok(sub.step_mut_break(step)),
        None => Err(IndexOutOfBounds {
            index: range.end.max(range.start),
            len,
        }),
    }
}
