use crate::{GraphView, error::Result};

pub trait GraphMut: GraphView {
    // Vertex Mutation
    fn ensure_vertex(&mut self, name: &str) -> usize;

    // Edge Mutation
    fn add_edge(&mut self, u: usize, v: usize, weight: u32) -> Result<()>;

    // Graph-wide Mutation
    fn clear(&mut self);
}
