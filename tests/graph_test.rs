use std::collections::HashSet;

use classic_algos::errors::AlgoError;
use classic_algos::graph::traversal::*;
use classic_algos::graph::visitor::{LineEmitter, Visitor};
use classic_algos::types::Graph;

/// Helper: the diamond {0:[1,2], 1:[3], 2:[3], 3:[]}.
fn diamond() -> Graph {
    Graph::from_edges(&[(0, 1), (0, 2), (1, 3), (2, 3)])
}

/// Helper: two components, {0,1,2} and {3,4}, plus isolated 5.
fn forest() -> Graph {
    let mut graph = Graph::from_edges(&[(0, 1), (1, 2), (3, 4)]);
    graph.add_node(5);
    graph
}

// ---------------------------------------------------------------------------
// BFS
// ---------------------------------------------------------------------------

#[test]
fn test_bfs_diamond_order() {
    let order = bfs_order(&diamond(), 0).expect("bfs failed");
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_bfs_follows_neighbor_list_order() {
    let graph = Graph::from_edges(&[(0, 2), (0, 1), (2, 3), (1, 4)]);
    let order = bfs_order(&graph, 0).expect("bfs failed");
    assert_eq!(order, vec![0, 2, 1, 3, 4]);
}

#[test]
fn test_bfs_visits_each_reachable_node_once() {
    // Cycle 0 -> 1 -> 2 -> 0 with a tail 2 -> 3; node 4 is unreachable.
    let mut graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 0), (2, 3)]);
    graph.add_node(4);
    let order = bfs_order(&graph, 0).expect("bfs failed");
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_bfs_missing_start_is_not_found() {
    let err = bfs_order(&diamond(), 9).unwrap_err();
    assert!(
        matches!(err, AlgoError::NodeNotFound { node: 9 }),
        "expected NodeNotFound(9), got {err:?}"
    );
}

#[test]
fn test_bfs_missing_neighbor_entry_is_not_found() {
    let graph: Graph = serde_json::from_str(r#"{"0":[1,7],"1":[]}"#).unwrap();
    let err = bfs_order(&graph, 0).unwrap_err();
    assert!(matches!(err, AlgoError::NodeNotFound { node: 7 }), "got {err:?}");
}

#[test]
fn test_bfs_emits_lines() {
    let mut emitter = LineEmitter::new(Vec::new());
    bfs(&diamond(), 0, &mut emitter).expect("bfs failed");
    assert_eq!(emitter.emitted(), 4);
    let bytes = emitter.into_inner().unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "0\n1\n2\n3\n");
}

// ---------------------------------------------------------------------------
// DFS
// ---------------------------------------------------------------------------

#[test]
fn test_dfs_diamond_order() {
    let order = dfs_order(&diamond(), 0).expect("dfs failed");
    assert_eq!(order, vec![0, 1, 3, 2]);
}

#[test]
fn test_dfs_updates_caller_visited_set() {
    let graph = diamond();
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    dfs(&graph, 1, &mut visited, &mut order).expect("dfs failed");
    assert_eq!(order, vec![1, 3]);
    assert_eq!(visited, HashSet::from([1, 3]));

    // Continuing from 0 with the same set skips what was already seen.
    dfs(&graph, 0, &mut visited, &mut order).expect("dfs failed");
    assert_eq!(order, vec![1, 3, 0, 2]);
    assert_eq!(visited.len(), 4);
}

#[test]
fn test_dfs_handles_cycles() {
    let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 0), (1, 3)]);
    let order = dfs_order(&graph, 0).expect("dfs failed");
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_dfs_missing_node_is_not_found() {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let err = dfs(&diamond(), 42, &mut visited, &mut order).unwrap_err();
    assert!(matches!(err, AlgoError::NodeNotFound { node: 42 }), "got {err:?}");
    assert!(order.is_empty());
}

#[test]
fn test_dfs_forest_visits_every_node_once() {
    let mut order = Vec::new();
    dfs_forest(&forest(), &mut order).expect("dfs_forest failed");
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_dfs_forest_roots_in_increasing_id_order() {
    // 2 -> 0 means 0 is visited as its own root before 2 is reached.
    let graph = Graph::from_edges(&[(2, 0), (1, 2)]);
    let mut order = Vec::new();
    dfs_forest(&graph, &mut order).expect("dfs_forest failed");
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_custom_visitor_can_stop_traversal() {
    struct StopAt(usize, Vec<usize>);
    impl Visitor for StopAt {
        fn visit(&mut self, node: usize) -> classic_algos::errors::Result<()> {
            if node == self.0 {
                return Err(AlgoError::InvalidArgument {
                    message: format!("stopped at {node}"),
                });
            }
            self.1.push(node);
            Ok(())
        }
    }

    let mut visitor = StopAt(3, Vec::new());
    let result = bfs(&diamond(), 0, &mut visitor);
    assert!(result.is_err());
    assert_eq!(visitor.1, vec![0, 1, 2]);
}
