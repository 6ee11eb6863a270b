mod solver_par;
mod solver_seq;

pub use solver_par::ParallelDijkstra;
pub use solver_seq::SequentialDijkstra;

/// Distances and predecessor links produced by a shortest-path run.
///
/// `dist[v]` is the weight of a shortest path from the source to `v`, or at
/// least [`crate::config::INF`] when no such path exists. `parent[v]` is the
/// predecessor of `v` on that path, with `-1` marking the source itself and
/// every unreached vertex. For any reached `v` the chain
/// `v, parent[v], parent[parent[v]], …` terminates at the source and its
/// summed edge weight equals `dist[v]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    pub dist: Vec<u64>,
    pub parent: Vec<i64>,
}

impl ShortestPathResult {
    /// Reconstructs the vertex path from the source to `target` by walking
    /// the parent chain. For the source itself this is the one-element path.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        reconstruct_path(target, &self.parent)
    }
}

/// Walks the parent chain backwards from `target` and returns the path in
/// source-to-target order.
pub fn reconstruct_path(target: usize, parent: &[i64]) -> Vec<usize> {
    let mut path = Vec::new();
    let mut vertex = target as i64;
    while vertex != -1 {
        path.push(vertex as usize);
        vertex = parent[vertex as usize];
    }
    path.reverse();
    path
}
