use dag_sssp::{DagShortestPath, DiGraph, ShortestPathAlgorithm, ShortestPathRequest, WireEdge};
use dag_sssp::graph::{Graph, MutableGraph};

fn main() {
    env_logger::init();

    // Build a small DAG directly
    let mut graph: DiGraph<u64> = DiGraph::new(6);
    graph.add_edge(0, 1, 5);
    graph.add_edge(0, 2, 3);
    graph.add_edge(1, 3, 6);
    graph.add_edge(1, 2, 2);
    graph.add_edge(2, 4, 4);
    graph.add_edge(2, 5, 2);
    graph.add_edge(2, 3, 7);
    graph.add_edge(3, 4, 1);
    graph.add_edge(4, 5, 1);

    let source = 1;
    println!("--- Shortest paths from {} ---", source);
    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    let algo = DagShortestPath::new();
    for target in 0..graph.node_count() {
        match algo.shortest_path(&graph, source, target) {
            Ok(result) => match result.path {
                Some(path) => println!("Node {}: cost = {}, path = {:?}", target, path.cost, path.nodes),
                None => println!("Node {}: unreachable", target),
            },
            Err(err) => println!("Node {}: error: {}", target, err),
        }
    }

    // Same query, round-tripped through the wire format
    let request = ShortestPathRequest::new(
        1,
        5,
        graph
            .edges()
            .map(|(u, v, w)| WireEdge::new(u as u16, v as u16, w as u16))
            .collect(),
    );
    let bytes = request.to_bytes().expect("fewer than 65536 edges");
    println!("\nEncoded request: {} bytes", bytes.len());

    match ShortestPathRequest::from_bytes(&bytes).and_then(|r| r.solve()) {
        Ok(result) => println!("Decoded and solved: {:?}", result.path),
        Err(err) => println!("Request failed: {}", err),
    }
}
