//! Crate-internal helpers, along with the error types shared by the collections.

#[cfg(test)]
pub(crate) mod alloc;
pub mod error;
pub(crate) mod fmt;
#[cfg(test)]
pub(crate) mod hash;
#[cfg(test)]
pub(crate) mod panic;
pub(crate) mod result;
