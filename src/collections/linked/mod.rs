//! Linked collection types, currently just the singly linked [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
