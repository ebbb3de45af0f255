//! Small capability traits, composed per container rather than arranged into a hierarchy.

mod compare;
mod list;

pub use compare::*;
pub use list::*;

/// A container which knows how many elements it holds.
pub trait Count {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container which can be returned to an empty state.
pub trait Clear {
    fn clear(&mut self);
}
