//! DAG SSSP - single-source shortest paths on weighted directed acyclic graphs
//!
//! A request arrives as a little-endian binary edge list, is decoded into a
//! [`DiGraph`], ordered with Kahn's algorithm and then relaxed node by node in
//! topological order. Because every node is finalized before it is expanded,
//! a single pass suffices: no priority queue, no iteration to a fixpoint.

pub mod algorithm;
pub mod graph;
pub mod web;
pub mod wire;

pub use algorithm::{
    dag_shortest_path::DagShortestPath, topological::topological_sort, Path, PathResult,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DiGraph;
pub use wire::{ShortestPathRequest, WireEdge};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Cycle detected")]
    CycleDetected,

    #[error("Edge {from}->{to} is listed as a neighbor but has no weight")]
    MissingEdgeWeight { from: usize, to: usize },

    #[error("Predecessor chain from {destination} does not lead back to the source")]
    BrokenPredecessorChain { destination: usize },

    #[error("Accumulated cost overflowed at vertex {node}")]
    CostOverflow { node: usize },

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl Error {
    /// True for errors that indicate a bug in the engine rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::MissingEdgeWeight { .. } | Error::BrokenPredecessorChain { .. }
        )
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
