use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{PrimInt, Unsigned};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph over a fixed node range using per-node weight maps
///
/// Node ids are raw indices into `edges`; callers must keep them below
/// `node_count`. Only one weight is kept per ordered pair, but every insertion
/// is counted, so `edge_count` and the degree maps over-count duplicates.
#[derive(Debug, Clone)]
pub struct DiGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Number of nodes in the graph
    node_count: usize,

    /// Number of `add_edge` calls
    edge_count: usize,

    /// Entries exist only for nodes some insertion has touched
    in_degree: HashMap<usize, usize>,
    out_degree: HashMap<usize, usize>,

    /// Outgoing edges for each node: edges[source] = {target -> weight}
    edges: Vec<HashMap<usize, W>>,
}

impl<W> DiGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// Creates a graph with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Self {
        DiGraph {
            node_count,
            edge_count: 0,
            in_degree: HashMap::new(),
            out_degree: HashMap::new(),
            edges: vec![HashMap::new(); node_count],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, inserted in order
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = DiGraph::new(node_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Iterates over every stored `(from, to, weight)` edge, sources ascending
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        (0..self.node_count).flat_map(move |from| {
            self.neighbors(from)
                .into_iter()
                .map(move |to| (from, to, self.edges[from][&to]))
        })
    }
}

impl<W> Graph<W> for DiGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        let targets = &self.edges[node];
        if targets.is_empty() {
            return Vec::new();
        }

        let mut neighbors: Vec<usize> = targets.keys().copied().collect();
        neighbors.sort_unstable();
        neighbors
    }

    fn get_edge(&self, from: usize, to: usize) -> Option<W> {
        self.edges.get(from)?.get(&to).copied()
    }

    fn in_degree(&self, node: usize) -> usize {
        self.in_degree.get(&node).copied().unwrap_or(0)
    }

    fn out_degree(&self, node: usize) -> usize {
        self.out_degree.get(&node).copied().unwrap_or(0)
    }
}

impl<W> MutableGraph<W> for DiGraph<W>
where
    W: PrimInt + Unsigned + Debug,
{
    /// # Panics
    ///
    /// Panics if either endpoint is outside `0..node_count`.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        assert!(
            from < self.node_count && to < self.node_count,
            "edge {}->{} out of range for graph with {} nodes",
            from,
            to,
            self.node_count
        );

        *self.out_degree.entry(from).or_insert(0) += 1;
        *self.in_degree.entry(to).or_insert(0) += 1;
        self.edge_count += 1;

        // Degrees are not decremented when this replaces an existing weight
        self.edges[from].insert(to, weight);
    }
}
