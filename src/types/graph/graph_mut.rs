use crate::error::{Error, Result};
use crate::{Graph, GraphMut, GraphView};

impl GraphMut for Graph {
    /// Returns the index of the named vertex, allocating the next free slot
    /// if the name has not been seen before. Idempotent.
    fn ensure_vertex(&mut self, name: &str) -> usize {
        if let Some(&index) = self.name_to_idx.get(name) {
            return index;
        }

        let index = self.adj.len();
        self.name_to_idx.insert(name.to_owned(), index);
        self.idx_to_name.push(name.to_owned());
        self.adj.push(Vec::new());

        index
    }

    /// Appends `(v, weight)` to `u`'s outgoing list.
    ///
    /// Both endpoints must already exist; an out-of-range index is a
    /// programming error on the caller's side and is reported as
    /// [`Error::OutOfRange`].
    fn add_edge(&mut self, u: usize, v: usize, weight: u32) -> Result<()> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return Err(Error::OutOfRange { u, v });
        }

        self.adj[u].push((v, weight));
        Ok(())
    }

    /// Removes every vertex and edge, leaving an empty graph.
    fn clear(&mut self) {
        self.adj.clear();
        self.name_to_idx.clear();
        self.idx_to_name.clear();
    }
}
