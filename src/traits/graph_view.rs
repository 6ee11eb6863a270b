pub trait GraphView {
    // Vertex Inspection
    fn contains_vertex(&self, index: usize) -> bool;
    fn number_vertices(&self) -> usize;
    fn vertex_name(&self, index: usize) -> Option<&str>;
    fn find_vertex(&self, name: &str) -> Option<usize>;

    // Edge Inspection
    fn neighbors(&self, index: usize) -> &[(usize, u32)];
    fn number_edges(&self) -> usize;
}
