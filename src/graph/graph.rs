use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use log::{debug, trace};

use super::edges::{AdjacencyEdges, EdgeStore, IndexedEdges};
use super::error::{AddEdgeError, DuplicateNode, NodeNotFound, RemoveEdgeError, UnknownNode};
use super::node_set::NodeSet;
use crate::collections::contiguous::ArrayList;
use crate::collections::hash::set::Iter;
use crate::collections::traits::{Clear, Compare, Natural};
use crate::step::{Signal, Stepper, Visit, VisitBreak, VisitEdge, VisitEdgeBreak};
use crate::util::fmt::DebugRaw;

/// A directed graph without parallel edges, made of a [`NodeSet`] and an [`EdgeStore`].
///
/// Every edge runs between two nodes of the graph, and removing a node removes each edge which
/// starts or ends at it. Operations which can fail return a [`Result`] and leave the graph as it
/// was when they do.
///
/// The way edges are stored is picked on construction and is invisible to the rest of the API:
/// - [`Graph::indexed`] stores edges in a two-dimensional point tree, which requires nodes to be
///   ordered and makes removing a node cheap.
/// - [`Graph::adjacency`] stores each node's neighbors in a hash set, which makes checking for an
///   edge cheap but has to scan every edge when a node is removed.
///
/// Nodes and edges are only stepped through with the read-only shapes ([`Visit`], [`VisitBreak`],
/// [`VisitEdge`] and [`VisitEdgeBreak`]). There is no [`VisitMut`](crate::step::VisitMut) or
/// [`VisitMutBreak`](crate::step::VisitMutBreak) traversal, because a node is a hash key in the
/// node set and each end of an edge is a coordinate in the edge store. Replacing either in place
/// would leave it stored under a stale hash or on the wrong side of a split, so to change a node,
/// remove it and add the new value.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the Graph.
/// - `e`: The number of edges in the Graph.
///
/// | Method | Indexed | Adjacency |
/// |-|-|-|
/// | `add_node` | `O(1)`* | `O(1)`* |
/// | `add_edge` | `O(log e)`** | `O(1)`* |
/// | `adjacent` | `O(log e)`** | `O(1)`* |
/// | `neighbors` | `O(sqrt(e) + k)`** | `O(k)` |
/// | `remove_node` | `O(sqrt(e) + k)`** | `O(e)` |
///
/// \* Expected, as for [`HashMap`](crate::collections::hash::HashMap).
///
/// \** For a balanced tree, where `k` is the number of matching edges.
pub struct Graph<T: Hash + Eq, E, B: BuildHasher = RandomState> {
    pub(crate) nodes: NodeSet<T, B>,
    pub(crate) edges: E,
}

/// A [`Graph`] which stores its edges as points in a
/// [`PointTree`](crate::collections::point_tree::PointTree).
pub type IndexedGraph<T, C = Natural<T>, B = RandomState> = Graph<T, IndexedEdges<T, C>, B>;

/// A [`Graph`] which maps each node to the set of its neighbors.
pub type MapGraph<T, B = RandomState> = Graph<T, AdjacencyEdges<T, B>, B>;

impl<T: Hash + Eq + Ord> IndexedGraph<T> {
    /// Creates an empty graph which indexes its edges by their natural ordering.
    pub fn indexed() -> IndexedGraph<T> {
        Graph::indexed_with(RandomState::new(), Natural::new())
    }
}

impl<T: Hash + Eq, C: Compare<T>, B: BuildHasher> IndexedGraph<T, C, B> {
    /// Creates an empty graph which hashes nodes with `hasher` and indexes edges with `compare`.
    ///
    /// `compare` must agree with [`Eq`] for the graph to behave consistently: two nodes should
    /// compare as equal exactly when they are equal.
    pub fn indexed_with(hasher: B, compare: C) -> IndexedGraph<T, C, B> {
        Graph {
            nodes: NodeSet::with_hasher(hasher),
            edges: IndexedEdges::with_compare(compare),
        }
    }
}

impl<T: Hash + Eq> MapGraph<T> {
    /// Creates an empty graph which keeps a set of neighbors for each node.
    pub fn adjacency() -> MapGraph<T> {
        Graph::adjacency_with(RandomState::new())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Clone> MapGraph<T, B> {
    /// Creates an empty graph which hashes nodes and neighbor sets with copies of `hasher`.
    pub fn adjacency_with(hasher: B) -> MapGraph<T, B> {
        Graph {
            nodes: NodeSet::with_hasher(hasher.clone()),
            edges: AdjacencyEdges::with_hasher(hasher),
        }
    }
}

impl<T: Hash + Eq, E: EdgeStore<T>, B: BuildHasher> Graph<T, E, B> {
    /// Creates an empty graph which stores its edges in `store`. Any edges already held by `store`
    /// are discarded, because the graph has no nodes for them to run between.
    pub fn with_store(mut store: E, hasher: B) -> Graph<T, E, B> {
        store.clear();
        Graph {
            nodes: NodeSet::with_hasher(hasher),
            edges: store,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: &T) -> bool {
        self.nodes.contains(node)
    }

    /// Adds `node` to the graph, failing if an equal node is already present.
    pub fn add_node(&mut self, node: T) -> Result<(), DuplicateNode> {
        self.nodes.add(node).inspect_err(|e| debug!("Rejected node: {e}"))?;

        trace!("Added node, the graph now has {} nodes", self.node_count());
        Ok(())
    }

    /// Removes the node equal to `node` along with every edge which starts or ends at it, returning
    /// the removed node.
    pub fn remove_node(&mut self, node: &T) -> Result<T, NodeNotFound> {
        let removed = self.nodes.remove(node)
            .inspect_err(|e| debug!("Rejected node removal: {e}"))?;
        let incident = self.edges.remove_incident(&removed);

        trace!("Removed node and {incident} incident edges");
        Ok(removed)
    }

    /// Adds an edge from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`UnknownNode`] if either end isn't a node of the graph, otherwise
    /// [`DuplicateEdge`](super::error::DuplicateEdge) if the edge is already present.
    pub fn add_edge(&mut self, start: T, end: T) -> Result<(), AddEdgeError> {
        let result = self.check_nodes(&start, &end)
            .map_err(AddEdgeError::from)
            .and_then(|()| self.edges.add(start, end).map_err(AddEdgeError::from));

        match &result {
            Ok(()) => trace!("Added edge, the graph now has {} edges", self.edge_count()),
            Err(e) => debug!("Rejected edge: {e}"),
        }
        result
    }

    /// Removes the edge from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`UnknownNode`] if either end isn't a node of the graph, otherwise
    /// [`EdgeNotFound`](super::error::EdgeNotFound) if there is no such edge.
    pub fn remove_edge(&mut self, start: &T, end: &T) -> Result<(), RemoveEdgeError> {
        let result = self.check_nodes(start, end)
            .map_err(RemoveEdgeError::from)
            .and_then(|()| self.edges.remove(start, end).map_err(RemoveEdgeError::from));

        match &result {
            Ok(()) => trace!("Removed edge, the graph now has {} edges", self.edge_count()),
            Err(e) => debug!("Rejected edge removal: {e}"),
        }
        result
    }

    /// Returns true if there is an edge from `start` to `end`. Nodes outside of the graph are never
    /// adjacent to anything.
    pub fn adjacent(&self, start: &T, end: &T) -> bool {
        self.edges.exists(start, end)
    }

    /// Returns true if there is an edge from `start` to `end`, the same as
    /// [`adjacent`](Graph::adjacent).
    pub fn contains_edge(&self, start: &T, end: &T) -> bool {
        self.adjacent(start, end)
    }

    /// Steps through every node which `node` has an edge to.
    pub fn neighbors<S: Visit<T>>(&self, node: &T, step: S) -> Result<(), UnknownNode> {
        self.check_node(node)?;
        self.edges.neighbors(node, step);
        Ok(())
    }

    /// Steps through every node which `node` has an edge to, until `step` returns
    /// [`Signal::Break`].
    pub fn neighbors_break<S: VisitBreak<T>>(
        &self,
        node: &T,
        step: S,
    ) -> Result<Signal, UnknownNode> {
        self.check_node(node)?;
        Ok(self.edges.neighbors_break(node, step))
    }

    /// Returns the number of edges which start at `node`.
    pub fn out_degree(&self, node: &T) -> Result<usize, UnknownNode> {
        self.check_node(node)?;
        Ok(self.edges.out_degree(node))
    }

    /// Steps through every edge as a `(start, end)` pair.
    pub fn step_edges<S: VisitEdge<T>>(&self, step: S) {
        self.edges.step_edges(step)
    }

    /// Steps through every edge as a `(start, end)` pair, until `step` returns [`Signal::Break`].
    pub fn step_edges_break<S: VisitEdgeBreak<T>>(&self, step: S) -> Signal {
        self.edges.step_edges_break(step)
    }

    /// Returns an iterator over every node, as references.
    pub fn nodes(&self) -> Iter<'_, T> {
        self.nodes.iter()
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
        trace!("Cleared graph");
    }

    /// Copies every node into a new [`ArrayList`], in the order they are stepped through.
    pub fn to_list(&self) -> ArrayList<T>
    where
        T: Clone,
    {
        self.nodes().cloned().collect()
    }

    fn check_node(&self, node: &T) -> Result<(), UnknownNode> {
        if self.contains_node(node) { Ok(()) } else { Err(UnknownNode) }
    }

    fn check_nodes(&self, start: &T, end: &T) -> Result<(), UnknownNode> {
        self.check_node(start)?;
        self.check_node(end)
    }
}

impl<T: Hash + Eq, E: EdgeStore<T>, B: BuildHasher> Stepper<T> for Graph<T, E, B> {
    /// Steps through every node.
    fn step_break<S: VisitBreak<T>>(&self, step: S) -> Signal {
        self.nodes.step_break(step)
    }
}

impl<T: Hash + Eq, E: EdgeStore<T>, B: BuildHasher> Clear for Graph<T, E, B> {
    fn clear(&mut self) {
        Graph::clear(self)
    }
}

impl<T: Hash + Eq, E: EdgeStore<T>, B: BuildHasher> Extend<T> for Graph<T, E, B> {
    /// Adds every node from `iter`, skipping those which are already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for node in iter {
            let _ = self.add_node(node);
        }
    }
}

impl<T: Hash + Eq + Clone, E: Clone, B: BuildHasher + Clone> Clone for Graph<T, E, B> {
    fn clone(&self) -> Self {
        Graph {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<T: Hash + Eq, E: EdgeStore<T> + Default, B: BuildHasher + Default> Default for Graph<T, E, B> {
    fn default() -> Self {
        Graph::with_store(E::default(), B::default())
    }
}

impl<T: Hash + Eq + Debug, E: EdgeStore<T>, B: BuildHasher> Debug for Graph<T, E, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut edges = Vec::with_capacity(self.edge_count());
        self.step_edges(|start: &T, end: &T| edges.push(format!("{start:?} -> {end:?}")));

        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &DebugRaw(format!("[{}]", edges.join(", "))))
            .finish()
    }
}
