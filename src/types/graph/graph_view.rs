use crate::{Graph, GraphView};

impl GraphView for Graph {
    /// Checks if a vertex exists at the given index.
    /// The vertex list is compact, so a simple bounds check is sufficient.
    fn contains_vertex(&self, index: usize) -> bool {
        index < self.adj.len()
    }

    /// Returns the total number of vertices in the graph.
    fn number_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Retrieves the name of the vertex at the given index.
    fn vertex_name(&self, index: usize) -> Option<&str> {
        self.idx_to_name.get(index).map(String::as_str)
    }

    /// Pure lookup of a vertex index by name; an absent name yields `None`.
    fn find_vertex(&self, name: &str) -> Option<usize> {
        self.name_to_idx.get(name).copied()
    }

    /// Returns the ordered outgoing edges of a vertex.
    ///
    /// Iteration order matches insertion order; callers rely on this
    /// stability. An out-of-range index yields an empty slice.
    fn neighbors(&self, index: usize) -> &[(usize, u32)] {
        self.adj.get(index).map_or(&[], Vec::as_slice)
    }

    /// Returns the total number of edges in the graph.
    ///
    /// Note: this is an O(V) operation as it must sum the lengths of the
    /// per-vertex edge lists.
    fn number_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }
}
