//! General-purpose collection types, all of which support stepping through their contents with the
//! traits in [`step`](crate::step).
//!
//! Each kind of collection lives behind its own cargo feature, while [`traits`] is always
//! available.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "point-tree")]
pub mod point_tree;
pub mod traits;
