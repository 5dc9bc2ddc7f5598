use std::time::{Duration, Instant};
use dag_sssp::algorithm::{dag_shortest_path::DagShortestPath, topological::topological_sort, ShortestPathAlgorithm};
use dag_sssp::graph::generators::{generate_layered_dag, generate_random_dag};
use dag_sssp::graph::{DiGraph, Graph};

// Time the sort alone and the full sort + relaxation from node 0
fn benchmark_graph(label: &str, graph: &DiGraph<u64>) -> (Duration, Duration) {
    println!(
        "Running on {} graph with {} nodes and {} edges...",
        label,
        graph.node_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let order = topological_sort(graph).expect("generated graphs are acyclic");
    let sort_time = start.elapsed();

    let start = Instant::now();
    let result = DagShortestPath::new()
        .compute_shortest_paths(graph, 0)
        .expect("generated graphs are acyclic");
    let total_time = start.elapsed();

    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    println!(
        "  - ordered {} nodes in {:?}, reached {} nodes in {:?}",
        order.len(),
        sort_time,
        reachable,
        total_time
    );

    (sort_time, total_time)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 500_000];

    // Edge factor: average number of edges per node
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Kahn sort + DAG relaxation");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random_dag(size, edge_factor, u16::MAX as u64);
        let (sort_time, total_time) = benchmark_graph("random", &graph);
        results.push((size, graph.edge_count(), sort_time, total_time));
    }

    for &(layers, width) in &[(100, 10), (100, 50), (50, 200)] {
        let graph = generate_layered_dag(layers, width, 100);
        let (sort_time, total_time) = benchmark_graph("layered", &graph);
        results.push((graph.node_count(), graph.edge_count(), sort_time, total_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12} | {:<12}", "Nodes", "Edges", "Sort (ms)", "Total (ms)");
    println!("-----------------------------------------------------");

    for (nodes, edges, sort_time, total_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<12.2} | {:<12.2}",
            nodes,
            edges,
            sort_time.as_secs_f64() * 1000.0,
            total_time.as_secs_f64() * 1000.0
        );
    }
}
