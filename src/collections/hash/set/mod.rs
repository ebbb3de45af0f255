//! A module containing [`HashSet`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's elements while others are
//! iterators over the result of set operations on two HashSets.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error. For the same reason, a HashSet is only a [`Stepper`], never
//! a [`StepperMut`](crate::step::StepperMut).
//!
//! [`HashSet`] is also re-exported under the parent module.
//!
//! [`Stepper`]: crate::step::Stepper

mod hash_set;
mod iter;


pub use hash_set::*;
pub use iter::*;
