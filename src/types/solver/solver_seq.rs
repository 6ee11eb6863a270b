use crate::config::INF;
use crate::types::solver::ShortestPathResult;
use crate::{GraphView, ShortestPath};

/// The dense O(V²) reference engine.
///
/// A plain Dijkstra over a `used` array: each round linearly scans for the
/// unvisited vertex with the smallest tentative distance and relaxes its
/// outgoing edges. When two unvisited vertices share the minimum, the
/// lowest-indexed one is chosen; that tie-break is a consequence of the
/// linear scan and is stable across runs, but only the distances are part
/// of the contract. Serves as the equivalence oracle for the parallel
/// engine.
pub struct SequentialDijkstra<'g, G> {
    graph: &'g G,
    start: usize,
}

impl<'g, G: GraphView> SequentialDijkstra<'g, G> {
    /// Creates a solver for the given graph and source vertex.
    ///
    /// # Panics
    /// Panics if `start` is not a vertex of the graph; an in-range source
    /// is part of the caller contract.
    pub fn new(graph: &'g G, start: usize) -> Self {
        assert!(
            graph.contains_vertex(start),
            "start vertex {start} out of range"
        );
        Self { graph, start }
    }
}

impl<G: GraphView> ShortestPath for SequentialDijkstra<'_, G> {
    fn run(&self) -> ShortestPathResult {
        let n = self.graph.number_vertices();

        let mut dist = vec![INF; n];
        let mut parent = vec![-1i64; n];
        let mut used = vec![false; n];

        dist[self.start] = 0;

        for _ in 0..n {
            // Linear scan for the closest unvisited vertex.
            let mut u = None;
            let mut best = INF;
            for i in 0..n {
                if !used[i] && dist[i] < best {
                    best = dist[i];
                    u = Some(i);
                }
            }

            let Some(u) = u else {
                break; // Everything still unvisited is unreachable.
            };

            used[u] = true;
            for &(v, w) in self.graph.neighbors(u) {
                let nd = best + u64::from(w);
                if nd < dist[v] {
                    dist[v] = nd;
                    parent[v] = u as i64;
                }
            }
        }

        ShortestPathResult { dist, parent }
    }
}
