use thiserror::Error;

use crate::types::NodeId;

/// Errors that can occur while running an algorithm.
#[derive(Error, Debug)]
pub enum AlgoError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("node not found: {node}")]
    NodeNotFound { node: NodeId },

    #[error("malformed graph: {message}")]
    MalformedGraph { message: String },

    #[error("cycle detected: nodes {unresolved:?} unresolved (partial order: {order:?})")]
    CycleDetected {
        order: Vec<NodeId>,
        unresolved: Vec<NodeId>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `AlgoError`.
pub type Result<T> = std::result::Result<T, AlgoError>;
