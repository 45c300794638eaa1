pub mod config;
pub mod errors;
pub mod fibonacci;
pub mod graph;
pub mod logging;
pub mod matrix;
pub mod output;
pub mod search;
pub mod sort;
pub mod types;
