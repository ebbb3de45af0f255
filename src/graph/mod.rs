//! Directed graphs over a choice of edge storage.
//!
//! A [`Graph`] owns a [`NodeSet`] and an [`EdgeStore`](edges::EdgeStore). The edge store decides
//! how queries are answered, but not what they answer: [`IndexedGraph`] and [`MapGraph`] give the
//! same results for the same sequence of operations.
//!
//! ```
//! use stepper_lib::graph::{Graph, MapGraph};
//!
//! let mut graph: MapGraph<&str> = Graph::adjacency();
//! graph.extend(["a", "b", "c"]);
//! graph.add_edge("a", "b").unwrap();
//! graph.add_edge("b", "c").unwrap();
//!
//! assert!(graph.adjacent(&"a", &"b"));
//! assert!(!graph.adjacent(&"a", &"c"));
//!
//! graph.remove_node(&"b").unwrap();
//! assert_eq!(graph.edge_count(), 0);
//! ```

pub mod edges;
pub mod error;
mod graph;
pub mod node_set;


pub use graph::*;
#[doc(inline)]
pub use node_set::NodeSet;
