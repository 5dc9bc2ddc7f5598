use std::fmt::Debug;
use log::{debug, error};
use num_traits::{PrimInt, Unsigned};
use rayon::prelude::*;

use crate::graph::Graph;
use crate::algorithm::{PathResult, ShortestPathAlgorithm, ShortestPathResult};
use crate::algorithm::topological::topological_sort;
use crate::{Error, Result};

/// Single-pass shortest paths for directed acyclic graphs
///
/// Nodes are relaxed in topological order, so each node's distance is final
/// by the time its outgoing edges are scanned. Runs in O(V + E) after the sort.
/// Graphs with a cycle are rejected with [`Error::CycleDetected`].
#[derive(Debug, Default)]
pub struct DagShortestPath;

impl DagShortestPath {
    /// Creates a new DAG shortest path instance
    pub fn new() -> Self {
        DagShortestPath
    }

    /// Relaxes every edge once, following a precomputed topological `order`
    pub fn compute_with_order<W, G>(
        &self,
        graph: &G,
        order: &[usize],
        source: usize,
    ) -> Result<ShortestPathResult<W>>
    where
        W: PrimInt + Unsigned + Debug,
        G: Graph<W>,
    {
        if !graph.has_node(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.node_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut overflowed = vec![false; n];
        distances[source] = Some(W::zero());

        // Everything before the source in the order is unreachable from it
        let start = order
            .iter()
            .position(|&u| u == source)
            .ok_or(Error::InvalidVertex(source))?;

        for &u in &order[start..] {
            let dist_u = distances[u];
            if dist_u.is_none() && !overflowed[u] {
                continue;
            }

            for v in graph.neighbors(u) {
                let weight = match graph.get_edge(u, v) {
                    Some(w) => w,
                    None => {
                        error!("edge {}->{} listed as neighbor without a weight", u, v);
                        return Err(Error::MissingEdgeWeight { from: u, to: v });
                    }
                };

                // Overflow only poisons `v` while it has no finite candidate
                let new_dist = match dist_u.and_then(|d| d.checked_add(&weight)) {
                    Some(d) => d,
                    None => {
                        if distances[v].is_none() {
                            overflowed[v] = true;
                        }
                        continue;
                    }
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    overflowed[v] = false;
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            overflowed,
            source,
        })
    }

    /// Answers many (source, destination) queries against one graph
    ///
    /// The topological order is computed once and shared; queries run in
    /// parallel and results come back in input order. A cycle fails the whole
    /// batch before any query runs.
    pub fn shortest_paths_batch<W, G>(
        &self,
        graph: &G,
        queries: &[(usize, usize)],
    ) -> Result<Vec<Result<PathResult<W>>>>
    where
        W: PrimInt + Unsigned + Debug + Send + Sync,
        G: Graph<W> + Sync,
    {
        let order = topological_sort(graph)?;
        debug!("running {} queries over {} nodes", queries.len(), graph.node_count());

        Ok(queries
            .par_iter()
            .map(|&(source, destination)| {
                if !graph.has_node(destination) {
                    return Err(Error::InvalidVertex(destination));
                }
                let result = self.compute_with_order(graph, &order, source)?;
                <Self as ShortestPathAlgorithm<W, G>>::path_result(self, &result, destination)
            })
            .collect())
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DagShortestPath
where
    W: PrimInt + Unsigned + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DAG relaxation"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(source) {
            return Err(Error::InvalidVertex(source));
        }

        let order = topological_sort(graph)?;
        self.compute_with_order(graph, &order, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Path;
    use crate::graph::{DiGraph, MutableGraph};

    #[test]
    fn test_prefers_cheaper_detour() {
        let mut graph: DiGraph<u32> = DiGraph::new(5);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 2);
        graph.add_edge(1, 3, 9);

        let result = DagShortestPath::new().shortest_path(&graph, 1, 3).unwrap();
        assert_eq!(
            result.path,
            Some(Path {
                nodes: vec![1, 2, 3],
                cost: 3
            })
        );
    }

    #[test]
    fn test_unreachable_destination_is_not_an_error() {
        let mut graph: DiGraph<u32> = DiGraph::new(5);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 2);

        let result = DagShortestPath::new().shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(result.source, 0);
        assert_eq!(result.destination, 2);
        assert!(result.path.is_none());
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_source_equals_destination() {
        let graph: DiGraph<u32> = DiGraph::new(3);
        let result = DagShortestPath::new().shortest_path(&graph, 2, 2).unwrap();
        assert_eq!(
            result.path,
            Some(Path {
                nodes: vec![2],
                cost: 0
            })
        );
    }

    #[test]
    fn test_cycle_fails_query() {
        let mut graph: DiGraph<u32> = DiGraph::new(3);
        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 0, 1);

        let err = DagShortestPath::new().shortest_path(&graph, 0, 1).unwrap_err();
        assert_eq!(err, Error::CycleDetected);
    }

    #[test]
    fn test_out_of_range_endpoints() {
        let graph: DiGraph<u32> = DiGraph::new(3);
        let algo = DagShortestPath::new();
        assert_eq!(algo.shortest_path(&graph, 3, 0).unwrap_err(), Error::InvalidVertex(3));
        assert_eq!(algo.shortest_path(&graph, 0, 7).unwrap_err(), Error::InvalidVertex(7));
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut graph: DiGraph<u8> = DiGraph::new(3);
        graph.add_edge(0, 1, 200);
        graph.add_edge(1, 2, 100);

        let err = DagShortestPath::new().shortest_path(&graph, 0, 2).unwrap_err();
        assert_eq!(err, Error::CostOverflow { node: 2 });
    }

    #[test]
    fn test_overflow_on_unused_branch_does_not_fail_query() {
        let mut graph: DiGraph<u8> = DiGraph::new(4);
        graph.add_edge(0, 1, 200);
        graph.add_edge(1, 2, 100);
        graph.add_edge(0, 3, 5);

        let algo = DagShortestPath::new();
        let result = algo.shortest_path(&graph, 0, 3).unwrap();
        assert_eq!(
            result.path,
            Some(Path {
                nodes: vec![0, 3],
                cost: 5
            })
        );

        // The overflowed branch still reports itself when asked for
        assert_eq!(algo.shortest_path(&graph, 0, 2).unwrap_err(), Error::CostOverflow { node: 2 });
    }

    #[test]
    fn test_overflow_propagates_past_the_overflowing_edge() {
        let mut graph: DiGraph<u8> = DiGraph::new(4);
        graph.add_edge(0, 1, 200);
        graph.add_edge(1, 2, 100);
        graph.add_edge(2, 3, 1);

        let err = DagShortestPath::new().shortest_path(&graph, 0, 3).unwrap_err();
        assert_eq!(err, Error::CostOverflow { node: 3 });
    }

    #[test]
    fn test_finite_route_beats_overflowed_one() {
        // 0->1->3 overflows, 0->2->3 fits; 3 must be reached through 2
        let mut graph: DiGraph<u8> = DiGraph::new(4);
        graph.add_edge(0, 1, 250);
        graph.add_edge(1, 3, 10);
        graph.add_edge(0, 2, 1);
        graph.add_edge(2, 3, 1);

        let path = DagShortestPath::new().shortest_path(&graph, 0, 3).unwrap().path.unwrap();
        assert_eq!(path.nodes, vec![0, 2, 3]);
        assert_eq!(path.cost, 2);
    }

    /// Claims an edge 0->1 in its adjacency but has no weight stored for it
    #[derive(Debug)]
    struct WeightlessEdge;

    impl Graph<u32> for WeightlessEdge {
        fn node_count(&self) -> usize {
            2
        }

        fn edge_count(&self) -> usize {
            1
        }

        fn neighbors(&self, node: usize) -> Vec<usize> {
            if node == 0 { vec![1] } else { Vec::new() }
        }

        fn get_edge(&self, _from: usize, _to: usize) -> Option<u32> {
            None
        }

        fn in_degree(&self, node: usize) -> usize {
            usize::from(node == 1)
        }

        fn out_degree(&self, node: usize) -> usize {
            usize::from(node == 0)
        }
    }

    #[test]
    fn test_missing_weight_is_an_internal_error() {
        let err = DagShortestPath::new().shortest_path(&WeightlessEdge, 0, 1).unwrap_err();
        assert_eq!(err, Error::MissingEdgeWeight { from: 0, to: 1 });
        assert!(err.is_internal());
    }

    #[test]
    fn test_order_without_source_is_rejected() {
        let mut graph: DiGraph<u32> = DiGraph::new(3);
        graph.add_edge(0, 1, 1);

        let err = DagShortestPath::new()
            .compute_with_order(&graph, &[0, 1], 2)
            .unwrap_err();
        assert_eq!(err, Error::InvalidVertex(2));
    }

    #[test]
    fn test_max_weight_is_a_real_cost() {
        // A cost equal to the type's maximum must not be mistaken for "unreached"
        let mut graph: DiGraph<u8> = DiGraph::new(2);
        graph.add_edge(0, 1, u8::MAX);

        let result = DagShortestPath::new().shortest_path(&graph, 0, 1).unwrap();
        assert_eq!(result.path.map(|p| p.cost), Some(u8::MAX));
    }

    #[test]
    fn test_distances_and_predecessors() {
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

        let result = DagShortestPath::new().compute_shortest_paths(&graph, 1).unwrap();
        assert_eq!(
            result.distances,
            vec![None, Some(0), Some(2), Some(6), Some(6), Some(4)]
        );
        assert_eq!(result.predecessors[5], Some(2));
        assert_eq!(result.predecessors[0], None);
        assert_eq!(result.predecessors[1], None);
    }

    #[test]
    fn test_broken_chain_is_reported() {
        let result: ShortestPathResult<u32> = ShortestPathResult {
            distances: vec![Some(0), Some(1), Some(2)],
            predecessors: vec![None, Some(2), Some(1)],
            overflowed: vec![false; 3],
            source: 0,
        };

        let err = <DagShortestPath as ShortestPathAlgorithm<u32, DiGraph<u32>>>::get_path(
            &DagShortestPath::new(),
            &result,
            2,
        )
        .unwrap_err();
        assert_eq!(err, Error::BrokenPredecessorChain { destination: 2 });
    }

    #[test]
    fn test_batch_matches_single_queries() {
        let mut graph: DiGraph<u64> = DiGraph::new(5);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 2, 1);
        graph.add_edge(2, 1, 2);
        graph.add_edge(1, 3, 1);

        let algo = DagShortestPath::new();
        let queries = [(0, 3), (2, 3), (3, 0), (0, 4), (0, 9)];
        let batch = algo.shortest_paths_batch(&graph, &queries).unwrap();

        assert_eq!(batch.len(), queries.len());
        for (&(s, d), answer) in queries.iter().zip(&batch) {
            assert_eq!(answer, &algo.shortest_path(&graph, s, d));
        }
        assert_eq!(batch[0].as_ref().unwrap().path.as_ref().unwrap().cost, 4);
    }

    #[test]
    fn test_batch_rejects_cyclic_graph() {
        let mut graph: DiGraph<u64> = DiGraph::new(2);
        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 0, 1);

        let err = DagShortestPath::new()
            .shortest_paths_batch(&graph, &[(0, 1)])
            .unwrap_err();
        assert_eq!(err, Error::CycleDetected);
    }

    #[test]
    fn test_batch_reports_overflow_like_single_query() {
        let mut graph: DiGraph<u8> = DiGraph::new(4);
        graph.add_edge(0, 1, 200);
        graph.add_edge(1, 2, 100);
        graph.add_edge(0, 3, 5);

        let algo = DagShortestPath::new();
        let queries = [(0, 2), (0, 3)];
        let batch = algo.shortest_paths_batch(&graph, &queries).unwrap();

        assert_eq!(batch[0], Err(Error::CostOverflow { node: 2 }));
        for (&(s, d), answer) in queries.iter().zip(&batch) {
            assert_eq!(answer, &algo.shortest_path(&graph, s, d));
        }
    }
}
