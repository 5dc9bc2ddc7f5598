use crate::graph::{DiGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random DAG with `n` nodes and roughly `edge_factor * n` edges
///
/// Every edge points from a lower id to a higher id, so the result is acyclic
/// and `0..n` is always a valid topological order. Weights are drawn from
/// `1..=max_weight`.
pub fn generate_random_dag(n: usize, edge_factor: f64, max_weight: u64) -> DiGraph<u64> {
    let mut rng = rand::thread_rng();
    generate_random_dag_with_rng(&mut rng, n, edge_factor, max_weight)
}

/// Same as [`generate_random_dag`] but driven by a caller-supplied RNG, for reproducible runs
pub fn generate_random_dag_with_rng<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_weight: u64,
) -> DiGraph<u64> {
    let mut graph = DiGraph::new(n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    let max_weight = max_weight.max(1);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n - 1);
        let v = rng.gen_range(u + 1..n);
        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a layered DAG: `layers` layers of `width` nodes, each node wired
/// to every node of the next layer
///
/// Node 0 of layer 0 reaches every node in later layers, which makes this a
/// good worst case for relaxation (E ~ layers * width^2).
pub fn generate_layered_dag(layers: usize, width: usize, max_weight: u64) -> DiGraph<u64> {
    let mut graph = DiGraph::new(layers * width);
    let mut rng = rand::thread_rng();
    let max_weight = max_weight.max(1);

    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let u = layer * width + i;
            for j in 0..width {
                let v = (layer + 1) * width + j;
                graph.add_edge(u, v, rng.gen_range(1..=max_weight));
            }
        }
    }

    graph
}
