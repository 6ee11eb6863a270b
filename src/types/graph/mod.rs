use std::collections::HashMap;

mod graph_dot;
mod graph_mut;
mod graph_view;

/// A directed, weighted multigraph with string-named vertices.
///
/// Vertices are indexed `0..n` in creation order and carry unique names;
/// the name-to-index mapping is bijective. Multi-edges and self-loops are
/// permitted, and each vertex's outgoing edge list preserves insertion
/// order. Once construction is finished the graph is treated as read-only
/// for the lifetime of any solver run, so no locking is needed while
/// several workers traverse it concurrently.
#[derive(Debug)]
pub struct Graph {
    // Outgoing adjacency: for each vertex, the ordered `(target, weight)` list.
    adj: Vec<Vec<(usize, u32)>>,

    // Bijective name <-> index mapping. `name_to_idx[idx_to_name[i]] == i`.
    name_to_idx: HashMap<String, usize>,
    idx_to_name: Vec<String>,
}

impl Graph {
    /// Creates a new, empty `Graph`.
    pub fn new() -> Self {
        Self {
            adj: Vec::new(),
            name_to_idx: HashMap::new(),
            idx_to_name: Vec::new(),
        }
    }

    /// Creates a new, empty `Graph` with pre-allocated capacity.
    ///
    /// This is the most efficient way to start building a graph when the
    /// approximate final size is known, as it can reduce or eliminate
    /// reallocations while vertices are added.
    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            adj: Vec::with_capacity(num_vertices),
            name_to_idx: HashMap::with_capacity(num_vertices),
            idx_to_name: Vec::with_capacity(num_vertices),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
