//! Hash-based collections using open addressing with linear probing.
//!
//! [`HashSet`] is a thin layer over [`HashMap`] with unit values.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
