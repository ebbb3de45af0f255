//! Contiguous collection types, currently just the growable [`ArrayList`].

pub mod array_list;

#[doc(inline)]
pub use array_list::ArrayList;
