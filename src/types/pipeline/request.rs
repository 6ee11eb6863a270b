use std::path::PathBuf;

use crate::Graph;
use crate::types::solver::ShortestPathResult;

/// A work item as submitted by the generator: nothing resolved yet.
///
/// A request is owned by exactly one stage at a time; ownership moves
/// through the hand-off queues, and each stage wraps the previous form in
/// the next one rather than mutating shared state.
#[derive(Debug, Clone)]
pub struct Request {
    pub id: usize,
    pub graph_file: PathBuf,
    pub start_name: String,
    pub target_names: Vec<String>,
}

/// A request after the prepare stage loaded the graph and resolved every
/// name to an index.
pub struct PreparedRequest {
    pub request: Request,
    pub graph: Graph,
    pub start_index: usize,
    pub target_indices: Vec<usize>,
}

/// A request after the solve stage attached the engine output.
pub struct SolvedRequest {
    pub prepared: PreparedRequest,
    pub result: ShortestPathResult,
}
