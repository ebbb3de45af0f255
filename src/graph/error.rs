//! Error types for graph operations.
//!
//! Each kind of failure is its own zero-sized type, and each operation that can fail in more than
//! one way returns a union of exactly the kinds it can produce. [`GraphError`] collects every kind,
//! for callers that would rather handle them all in one place.

use derive_more::{Display, Error, From, IsVariant};

/// A node was added to a graph which already contained an equal node.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("the node is already present in the graph")]
pub struct DuplicateNode;

/// A node was removed from a graph which didn't contain it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("the node to remove isn't present in the graph")]
pub struct NodeNotFound;

/// An operation referred to a node which isn't part of the graph.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("the operation refers to a node which isn't present in the graph")]
pub struct UnknownNode;

/// An edge was added to a graph which already contained it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("the edge is already present in the graph")]
pub struct DuplicateEdge;

/// An edge was removed from a graph which didn't contain it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("the edge to remove isn't present in the graph")]
pub struct EdgeNotFound;

/// The ways in which adding an edge can fail.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeError {
    UnknownNode(UnknownNode),
    DuplicateEdge(DuplicateEdge),
}

/// The ways in which removing an edge can fail.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoveEdgeError {
    UnknownNode(UnknownNode),
    EdgeNotFound(EdgeNotFound),
}

/// Any error produced by a graph operation.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    DuplicateNode(DuplicateNode),
    NodeNotFound(NodeNotFound),
    UnknownNode(UnknownNode),
    DuplicateEdge(DuplicateEdge),
    EdgeNotFound(EdgeNotFound),
}

impl From<AddEdgeError> for GraphError {
    fn from(value: AddEdgeError) -> Self {
        match value {
            AddEdgeError::UnknownNode(e) => e.into(),
            AddEdgeError::DuplicateEdge(e) => e.into(),
        }
    }
}

impl From<RemoveEdgeError> for GraphError {
    fn from(value: RemoveEdgeError) -> Self {
        match value {
            RemoveEdgeError::UnknownNode(e) => e.into(),
            RemoveEdgeError::EdgeNotFound(e) => e.into(),
        }
    }
}
