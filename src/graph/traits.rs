use std::fmt::Debug;
use num_traits::{PrimInt, Unsigned};

/// Read contract of a weighted directed graph with a fixed node range `0..node_count`
pub trait Graph<W>: Debug
where
    W: PrimInt + Unsigned + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edge insertions performed (not distinct pairs)
    fn edge_count(&self) -> usize;

    /// Returns the one-hop destinations of `node`, sorted ascending
    fn neighbors(&self, node: usize) -> Vec<usize>;

    /// Gets the weight of an edge if it exists
    fn get_edge(&self, from: usize, to: usize) -> Option<W>;

    /// Accumulated count of insertions targeting `node`
    fn in_degree(&self, node: usize) -> usize;

    /// Accumulated count of insertions leaving `node`
    fn out_degree(&self, node: usize) -> usize;

    /// Returns true if the node id is within the graph's capacity
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge(from, to).is_some()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Adds a directed edge, overwriting the weight of an existing `(from, to)` pair
    fn add_edge(&mut self, from: usize, to: usize, weight: W);
}
