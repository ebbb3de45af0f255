use std::num::NonZero;

/// The number of nodes in a list that has at least one.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

impl Length {
    pub fn checked_add(self, other: usize) -> Option<Length> {
        self.0.checked_add(other).map(Length)
    }

    /// Subtracts `other`, returning None if no nodes would remain.
    pub fn checked_sub(self, other: usize) -> Option<Length> {
        self.0.get().checked_sub(other).and_then(NonZero::new).map(Length)
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
