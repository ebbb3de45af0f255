//! A collections toolkit built around two ideas: a uniform, push-style way of stepping through the
//! contents of any container, and a directed graph which offers the same API over two different
//! ways of storing its edges.
//!
//! # Stepping
//! Every container in this crate implements [`Stepper`](step::Stepper) and, where replacing
//! elements in place is sound, [`StepperMut`](step::StepperMut). Rather than returning an iterator,
//! a container is handed a step (usually a closure) which it invokes on each element. Steps come in
//! four shapes, depending on whether they may replace elements and whether they may end the
//! traversal early with a [`Signal`](step::Signal). All of them are statically dispatched, so
//! stepping costs no more than a hand-written loop.
//!
//! # Graphs
//! A [`Graph`](graph::Graph) pairs a set of nodes with an edge store. The edge store is chosen when
//! the graph is constructed:
//! - [`IndexedGraph`](graph::IndexedGraph) keeps edges as points in a two-dimensional
//!   [`PointTree`](collections::point_tree::PointTree), so that both outgoing and incoming edges
//!   can be found with range queries.
//! - [`MapGraph`](graph::MapGraph) keeps a [`HashMap`](collections::hash::HashMap) from each node
//!   to the set of its neighbors, which favours adjacency checks and neighbor lookups.
//!
//! Both share every invariant: an edge can only exist between two nodes in the graph, and removing
//! a node removes all of its edges.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). Every fallible graph operation returns
//! a [`Result`] and leaves the graph unchanged on failure. The collections panic only where
//! handling an error every time would be unreasonable, such as capacity overflow, and provide
//! `try_*` variants for indexing.
//!
//! # Logging
//! Graph mutations are logged through the [`log`] facade, at `trace` level when they succeed and
//! `debug` level when they're rejected. No logger is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

pub mod collections;
#[cfg(feature = "graph")]
pub mod graph;
pub mod step;

pub mod util;
