/// Breadth-first and depth-first traversal over adjacency mappings.
pub mod traversal;

/// Kahn's topological sort.
pub mod topo;

/// Reachability, shortest and longest paths.
pub mod paths;

/// Sinks that receive nodes in visit order.
pub mod visitor;

pub use paths::{has_path, longest_path_from, shortest_path};
pub use topo::topological_sort;
pub use traversal::{bfs, bfs_order, dfs, dfs_forest, dfs_order};
pub use visitor::{LineEmitter, Visitor};
