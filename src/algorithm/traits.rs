use std::fmt::Debug;
use log::error;
use num_traits::{PrimInt, Unsigned};
use serde::Serialize;
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Distances from source to each node; `None` means unreached
    pub distances: Vec<Option<W>>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Nodes reachable only through a cost that does not fit `W`
    pub overflowed: Vec<bool>,

    /// Source node ID
    pub source: usize,
}

/// A concrete route through the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<W> {
    /// Nodes from source to destination, both inclusive
    pub nodes: Vec<usize>,

    /// Sum of the edge weights along `nodes`
    pub cost: W,
}

/// Answer to a single (source, destination) query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult<W> {
    pub source: usize,
    pub destination: usize,

    /// `None` when the destination is unreachable from the source
    pub path: Option<Path<W>>,
}

impl<W> PathResult<W> {
    /// Returns true if a path from source to destination exists
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    ///
    /// Returns `Ok(None)` when the target is unreached. A predecessor chain that
    /// does not lead back to the source within `distances.len()` steps is a bug
    /// in the algorithm and is reported as [`Error::BrokenPredecessorChain`].
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Option<Vec<usize>>> {
        if target >= result.predecessors.len() {
            return Err(Error::InvalidVertex(target));
        }
        if result.distances[target].is_none() {
            return Ok(None);
        }

        let limit = result.predecessors.len();
        let mut path = vec![target];
        let mut current = target;

        // Build path in reverse order
        while current != result.source {
            let pred = match result.predecessors[current] {
                Some(pred) if path.len() < limit => pred,
                _ => {
                    error!(
                        "predecessor chain from {} broke at {} after {} steps",
                        target,
                        current,
                        path.len()
                    );
                    return Err(Error::BrokenPredecessorChain { destination: target });
                }
            };
            path.push(pred);
            current = pred;
        }

        path.reverse();
        Ok(Some(path))
    }

    /// Turns a computed result into the answer for one destination
    ///
    /// An unreached destination is `Ok` with no path, unless it was only cut
    /// off by overflow, which is reported as [`Error::CostOverflow`].
    fn path_result(&self, result: &ShortestPathResult<W>, destination: usize) -> Result<PathResult<W>> {
        let path = match self.get_path(result, destination)? {
            Some(nodes) => {
                let cost = result.distances[destination].ok_or(Error::BrokenPredecessorChain { destination })?;
                Some(Path { nodes, cost })
            }
            None if result.overflowed.get(destination).copied().unwrap_or(false) => {
                return Err(Error::CostOverflow { node: destination });
            }
            None => None,
        };

        Ok(PathResult {
            source: result.source,
            destination,
            path,
        })
    }

    /// Shortest path between two nodes, with its cost
    fn shortest_path(&self, graph: &G, source: usize, destination: usize) -> Result<PathResult<W>> {
        if !graph.has_node(destination) {
            return Err(Error::InvalidVertex(destination));
        }

        let result = self.compute_shortest_paths(graph, source)?;
        self.path_result(&result, destination)
    }
}
