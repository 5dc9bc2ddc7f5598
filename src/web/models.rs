use serde::{Deserialize, Serialize};

use crate::algorithm::{Path, PathResult};

/// JSON answer to a binary shortest path request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortestPathResponse {
    pub source: usize,
    pub destination: usize,
    /// `null` when the destination cannot be reached
    pub path: Option<WebPath>,
    pub node_count: usize,
    pub edge_count: usize,
    pub execution_time_ms: f64,
}

/// Path portion of [`ShortestPathResponse`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebPath {
    pub nodes: Vec<usize>,
    pub cost: u64,
}

impl From<Path<u64>> for WebPath {
    fn from(path: Path<u64>) -> Self {
        WebPath {
            nodes: path.nodes,
            cost: path.cost,
        }
    }
}

impl ShortestPathResponse {
    pub fn from_result(
        result: PathResult<u64>,
        node_count: usize,
        edge_count: usize,
        execution_time_ms: f64,
    ) -> Self {
        ShortestPathResponse {
            source: result.source,
            destination: result.destination,
            path: result.path.map(WebPath::from),
            node_count,
            edge_count,
            execution_time_ms,
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub queries_served: u64,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
