use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{AlgoError, Result};

/// Identifier of a node in an adjacency mapping.
pub type NodeId = usize;

/// A directed graph stored as an adjacency mapping from node id to an
/// ordered list of neighbor ids.
///
/// Keys iterate in increasing id order. Neighbor order is preserved exactly
/// as inserted, since traversal order depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directed graph from `(source, target)` pairs.
    ///
    /// Both endpoints of every edge get an entry, so targets with no
    /// outgoing edges still resolve during traversal.
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = Self::new();
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Builds an undirected graph: each pair is inserted in both directions.
    pub fn from_undirected_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = Self::new();
        for &(u, v) in edges {
            graph.add_edge(u, v);
            graph.add_edge(v, u);
        }
        graph
    }

    /// Ensures `node` has an entry, leaving existing neighbors untouched.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Appends `target` to the neighbor list of `source`.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.adjacency.entry(source).or_default().push(target);
        self.add_node(target);
    }

    /// Returns the ordered neighbors of `node`.
    ///
    /// Fails with `NodeNotFound` when the mapping has no entry for `node`.
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(AlgoError::NodeNotFound { node })
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of keys in the mapping.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of adjacency entries across all nodes.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterates node ids in increasing order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates `(node, neighbors)` pairs in increasing node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.adjacency.iter().map(|(&k, v)| (k, v.as_slice()))
    }
}

/// Result of Kahn's topological sort.
///
/// `order` is exactly what the queue emitted. On a cyclic graph it is
/// shorter than the node count and `unresolved` lists the ids that never
/// reached in-degree zero, in increasing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologicalOrder {
    pub order: Vec<NodeId>,
    pub unresolved: Vec<NodeId>,
}

impl TopologicalOrder {
    /// True when every node was emitted.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Returns the order, or `CycleDetected` if any node was left out.
    pub fn into_strict(self) -> Result<Vec<NodeId>> {
        if self.is_complete() {
            Ok(self.order)
        } else {
            Err(AlgoError::CycleDetected {
                order: self.order,
                unresolved: self.unresolved,
            })
        }
    }
}

/// Value of a naive Fibonacci evaluation together with the number of
/// recursive invocations it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciTrace {
    pub value: u64,
    pub calls: u64,
}

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[allow(clippy::should_implement_trait)]
impl OutputFormat {
    /// Returns the string representation of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Parses a string into an `OutputFormat`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
