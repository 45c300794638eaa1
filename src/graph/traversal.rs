use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::errors::Result;
use crate::graph::visitor::Visitor;
use crate::types::{Graph, NodeId};

/// Performs a breadth-first traversal starting from `start`.
///
/// Nodes are marked visited when enqueued, so each reachable node is handed
/// to `visitor` exactly once, level by level, with ties broken by
/// neighbor-list order. Fails with `NodeNotFound` if the start or any
/// dequeued node has no entry in the graph.
pub fn bfs<V: Visitor + ?Sized>(graph: &Graph, start: NodeId, visitor: &mut V) -> Result<()> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    let mut count: usize = 0;
    while let Some(node) = queue.pop_front() {
        let neighbors = graph.neighbors(node)?;
        trace!(node, "bfs visit");
        visitor.visit(node)?;
        count += 1;

        for &neighbor in neighbors {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!(start, visited = count, "bfs complete");
    Ok(())
}

/// Runs [`bfs`] and returns the visit order.
pub fn bfs_order(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
    let mut order = Vec::new();
    bfs(graph, start, &mut order)?;
    Ok(order)
}

/// Performs a recursive depth-first pre-order traversal from `node`.
///
/// `visited` belongs to the caller and is updated in place, so repeated
/// calls with the same set continue a multi-root traversal without
/// revisiting anything. Neighbors are explored in neighbor-list order.
pub fn dfs<V: Visitor + ?Sized>(
    graph: &Graph,
    node: NodeId,
    visited: &mut HashSet<NodeId>,
    visitor: &mut V,
) -> Result<()> {
    let neighbors = graph.neighbors(node)?;
    visited.insert(node);
    trace!(node, "dfs visit");
    visitor.visit(node)?;

    for &neighbor in neighbors {
        if !visited.contains(&neighbor) {
            dfs(graph, neighbor, visited, visitor)?;
        }
    }

    Ok(())
}

/// Runs [`dfs`] from `start` with a fresh visited set and returns the order.
pub fn dfs_order(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    dfs(graph, start, &mut visited, &mut order)?;
    debug!(start, visited = order.len(), "dfs complete");
    Ok(order)
}

/// Visits every node of the graph, starting a new depth-first tree at each
/// not-yet-visited key in increasing id order.
pub fn dfs_forest<V: Visitor + ?Sized>(graph: &Graph, visitor: &mut V) -> Result<()> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut roots: usize = 0;

    for root in graph.nodes() {
        if !visited.contains(&root) {
            roots += 1;
            dfs(graph, root, &mut visited, visitor)?;
        }
    }

    debug!(roots, visited = visited.len(), "dfs forest complete");
    Ok(())
}
