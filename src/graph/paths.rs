use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::errors::{AlgoError, Result};
use crate::graph::topo::topological_sort;
use crate::types::{Graph, NodeId};

/// Finds a shortest path (by edge count) from `from` to `to` using BFS.
///
/// Returns `None` if `to` is unreachable. The returned path includes both
/// endpoints; when `from == to` it is just `[from]`.
pub fn shortest_path(graph: &Graph, from: NodeId, to: NodeId) -> Result<Option<Vec<NodeId>>> {
    if !graph.contains(from) {
        return Err(AlgoError::NodeNotFound { node: from });
    }
    if from == to {
        return Ok(Some(vec![from]));
    }

    // child -> parent, for path reconstruction.
    let mut parent_map: HashMap<NodeId, NodeId> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    let mut found = false;
    'search: while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current)? {
            if visited.insert(neighbor) {
                parent_map.insert(neighbor, current);
                if neighbor == to {
                    found = true;
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }
    }

    if !found {
        debug!(from, to, "no path");
        return Ok(None);
    }

    let mut path = vec![to];
    let mut current = to;
    while let Some(&parent) = parent_map.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    debug!(from, to, hops = path.len() - 1, "path found");
    Ok(Some(path))
}

/// True when `to` is reachable from `from`.
pub fn has_path(graph: &Graph, from: NodeId, to: NodeId) -> Result<bool> {
    Ok(shortest_path(graph, from, to)?.is_some())
}

/// Length in edges of the longest path in a DAG that starts at `source`.
///
/// Relaxes edges in topological order, keeping the best distance for every
/// node reachable from `source`. Returns 0 when `source` has no outgoing
/// edges. A cyclic graph fails with `CycleDetected`.
pub fn longest_path_from(graph: &Graph, node_count: usize, source: NodeId) -> Result<usize> {
    if source >= node_count {
        return Err(AlgoError::MalformedGraph {
            message: format!("source {source} is outside 0..{node_count}"),
        });
    }

    let order = topological_sort(graph, node_count)?.into_strict()?;

    let mut dist: Vec<Option<usize>> = vec![None; node_count];
    dist[source] = Some(0);

    for node in order {
        let Some(d) = dist[node] else {
            continue;
        };
        for &neighbor in graph.neighbors(node)? {
            let candidate = d + 1;
            if dist[neighbor].map_or(true, |current| candidate > current) {
                dist[neighbor] = Some(candidate);
            }
        }
    }

    Ok(dist.into_iter().flatten().max().unwrap_or(0))
}
