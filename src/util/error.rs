use derive_more::{Display, Error};

/// An index was outside of the bounds of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A collection couldn't grow any further without its capacity overflowing.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// A collection was asked to keep a minimum capacity of zero, which it can't grow from.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("minimum capacity must be greater than zero")]
pub struct ZeroCapacity;
