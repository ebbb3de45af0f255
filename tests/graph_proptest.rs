use std::collections::BTreeSet;

use proptest::prelude::*;
use stepper_lib::graph::edges::EdgeStore;
use stepper_lib::graph::error::{AddEdgeError, GraphError, RemoveEdgeError};
use stepper_lib::graph::{Graph, IndexedGraph, MapGraph};

#[derive(Debug, Clone)]
enum Operation {
    AddNode(u8),
    RemoveNode(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    // A small range of nodes keeps collisions between operations likely.
    let node = 0_u8..12;
    prop_oneof![
        4 => node.clone().prop_map(Operation::AddNode),
        1 => node.clone().prop_map(Operation::RemoveNode),
        6 => (node.clone(), node.clone()).prop_map(|(a, b)| Operation::AddEdge(a, b)),
        2 => (node.clone(), node).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
        1 => Just(Operation::Clear),
    ]
}

/// Applies `op` to `graph`, collapsing any error into a [`GraphError`].
fn apply<E: EdgeStore<u8>>(graph: &mut Graph<u8, E>, op: &Operation) -> Result<(), GraphError> {
    match *op {
        Operation::AddNode(n) => graph.add_node(n)?,
        Operation::RemoveNode(n) => {
            graph.remove_node(&n)?;
        },
        Operation::AddEdge(a, b) => graph.add_edge(a, b)?,
        Operation::RemoveEdge(a, b) => graph.remove_edge(&a, &b)?,
        Operation::Clear => graph.clear(),
    }
    Ok(())
}

fn edges<E: EdgeStore<u8>>(graph: &Graph<u8, E>) -> BTreeSet<(u8, u8)> {
    let mut found = BTreeSet::new();
    graph.step_edges(|start: &u8, end: &u8| {
        assert!(found.insert((*start, *end)), "Each edge should be stepped through once.");
    });
    found
}

fn nodes<E: EdgeStore<u8>>(graph: &Graph<u8, E>) -> BTreeSet<u8> {
    graph.nodes().copied().collect()
}

fn neighbors<E: EdgeStore<u8>>(graph: &Graph<u8, E>, node: u8) -> BTreeSet<u8> {
    let mut found = BTreeSet::new();
    // Unknown nodes are reported as an error, which leaves the set empty.
    let _ = graph.neighbors(&node, |end: &u8| {
        found.insert(*end);
    });
    found
}

/// Every edge runs between two current nodes, and the counts match what is stored.
fn assert_integrity<E: EdgeStore<u8>>(graph: &Graph<u8, E>) {
    let nodes = nodes(graph);
    let edges = edges(graph);

    assert_eq!(nodes.len(), graph.node_count());
    assert_eq!(edges.len(), graph.edge_count());
    for (start, end) in &edges {
        assert!(nodes.contains(start) && nodes.contains(end), "Edge ({start}, {end}) dangles.");
        assert!(graph.adjacent(start, end));
    }
}

proptest! {
    #[test]
    fn test_strategies_agree(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut indexed: IndexedGraph<u8> = Graph::indexed();
        let mut map: MapGraph<u8> = Graph::adjacency();

        for op in &ops {
            let indexed_result = apply(&mut indexed, op);
            let map_result = apply(&mut map, op);
            prop_assert_eq!(indexed_result, map_result, "Results differ for {:?}", op);

            assert_integrity(&indexed);
            assert_integrity(&map);
        }

        prop_assert_eq!(indexed.node_count(), map.node_count());
        prop_assert_eq!(indexed.edge_count(), map.edge_count());
        prop_assert_eq!(edges(&indexed), edges(&map));
        for node in 0..12 {
            prop_assert_eq!(neighbors(&indexed, node), neighbors(&map, node));
            prop_assert_eq!(indexed.out_degree(&node), map.out_degree(&node));
            for end in 0..12 {
                prop_assert_eq!(indexed.adjacent(&node, &end), map.adjacent(&node, &end));
            }
        }
    }

    #[test]
    fn test_matches_model(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut graph: IndexedGraph<u8> = Graph::indexed();
        let mut model_nodes = BTreeSet::new();
        let mut model_edges = BTreeSet::new();

        for op in &ops {
            let result = apply(&mut graph, op);
            let expected = match *op {
                Operation::AddNode(n) => model_nodes.insert(n),
                Operation::RemoveNode(n) => {
                    let present = model_nodes.remove(&n);
                    model_edges.retain(|&(a, b)| a != n && b != n);
                    present
                },
                Operation::AddEdge(a, b) => {
                    model_nodes.contains(&a) && model_nodes.contains(&b)
                        && model_edges.insert((a, b))
                },
                Operation::RemoveEdge(a, b) => {
                    model_nodes.contains(&a) && model_nodes.contains(&b)
                        && model_edges.remove(&(a, b))
                },
                Operation::Clear => {
                    model_nodes.clear();
                    model_edges.clear();
                    true
                },
            };
            prop_assert_eq!(result.is_ok(), expected, "Outcome differs for {:?}", op);
        }

        prop_assert_eq!(nodes(&graph), model_nodes);
        prop_assert_eq!(edges(&graph), model_edges);
    }

    #[test]
    fn test_clone_is_independent(ops in proptest::collection::vec(operation(), 1..100)) {
        let mut graph: MapGraph<u8> = Graph::adjacency();
        for op in &ops {
            let _ = apply(&mut graph, op);
        }

        let snapshot = (nodes(&graph), edges(&graph));
        let mut clone = graph.clone();
        prop_assert_eq!((nodes(&clone), edges(&clone)), snapshot.clone());

        for node in 0..12 {
            let _ = clone.remove_node(&node);
        }
        prop_assert_eq!(clone.node_count(), 0);
        prop_assert_eq!((nodes(&graph), edges(&graph)), snapshot);
    }
}

#[test]
fn test_removed_node_leaves_no_edges() {
    let mut graph: MapGraph<u8> = Graph::adjacency();
    graph.extend(0..5);
    for other in 1..5 {
        graph.add_edge(0, other).unwrap();
        graph.add_edge(other, 0).unwrap();
    }
    graph.add_edge(1, 2).unwrap();

    graph.remove_node(&0).unwrap();
    for other in 1..5 {
        assert!(!graph.adjacent(&0, &other));
        assert!(!graph.adjacent(&other, &0));
    }
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_edge_on_empty_graph() {
    let mut graph: IndexedGraph<u8> = Graph::indexed();
    assert!(matches!(graph.add_edge(5, 6), Err(AddEdgeError::UnknownNode(_))));
    assert!(matches!(graph.remove_edge(&5, &6), Err(RemoveEdgeError::UnknownNode(_))));
    assert_eq!(graph.edge_count(), 0);
}
