use std::collections::{HashSet, VecDeque};

use tracing::{debug, warn};

use crate::errors::{AlgoError, Result};
use crate::types::{Graph, NodeId, TopologicalOrder};

/// Orders the nodes `0..node_count` with Kahn's algorithm.
///
/// The queue is seeded with every in-degree-zero node in increasing id
/// order, and newly freed nodes are enqueued in the neighbor-list order of
/// the node that freed them. On a cyclic graph the returned `order` is
/// truncated: nodes on a cycle, or reachable only through one, never reach
/// in-degree zero and are reported in `unresolved` instead.
///
/// Ids outside `0..node_count` fail with `MalformedGraph`. A dequeued id
/// without an entry in the graph fails with `NodeNotFound`. When
/// `node_count` exceeds the number of ids the graph mentions, that failure is
/// certain and is reported before any per-node state is allocated.
pub fn topological_sort(graph: &Graph, node_count: usize) -> Result<TopologicalOrder> {
    for (node, neighbors) in graph.iter() {
        check_in_range(node, node_count)?;
        for &neighbor in neighbors {
            check_in_range(neighbor, node_count)?;
        }
    }
    check_node_count(graph, node_count)?;

    let mut in_degree = vec![0usize; node_count];
    for (_, neighbors) in graph.iter() {
        for &neighbor in neighbors {
            in_degree[neighbor] += 1;
        }
    }

    let mut queue: VecDeque<NodeId> = (0..node_count).filter(|&i| in_degree[i] == 0).collect();
    let mut order: Vec<NodeId> = Vec::with_capacity(node_count);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &neighbor in graph.neighbors(node)? {
            in_degree[neighbor] -= 1;
            if in_degree[neighbor] == 0 {
                queue.push_back(neighbor);
            }
        }
    }

    let unresolved: Vec<NodeId> = (0..node_count).filter(|&i| in_degree[i] > 0).collect();
    if unresolved.is_empty() {
        debug!(nodes = node_count, "topological sort complete");
    } else {
        warn!(
            emitted = order.len(),
            unresolved = unresolved.len(),
            "cycle detected; topological order is truncated"
        );
    }

    Ok(TopologicalOrder { order, unresolved })
}

fn check_in_range(node: NodeId, node_count: usize) -> Result<()> {
    if node >= node_count {
        return Err(AlgoError::MalformedGraph {
            message: format!("node id {node} is outside 0..{node_count}"),
        });
    }
    Ok(())
}

// An id in 0..node_count that is neither a key nor a neighbor has in-degree
// zero and no entry, so the smallest such id is the first seed to fail.
fn check_node_count(graph: &Graph, node_count: usize) -> Result<()> {
    let mentioned = graph.node_count() + graph.edge_count();
    if node_count <= mentioned {
        return Ok(());
    }
    let known: HashSet<NodeId> = graph
        .iter()
        .flat_map(|(node, neighbors)| std::iter::once(node).chain(neighbors.iter().copied()))
        .collect();
    let missing = (0..=mentioned).find(|id| !known.contains(id)).unwrap_or(mentioned);
    Err(AlgoError::NodeNotFound { node: missing })
}
