pub mod traits;
pub mod topological;
pub mod dag_shortest_path;

pub use traits::{Path, PathResult, ShortestPathAlgorithm, ShortestPathResult};
