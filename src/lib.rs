pub mod cli;
pub mod config;
mod error;
pub mod experiments;
mod traits;
pub mod types;
pub mod utils_test;

// errors
pub use error::{Error, Result};
// traits
pub use traits::graph_mut::GraphMut;
pub use traits::graph_view::GraphView;
pub use traits::shortest_path::ShortestPath;
// types
pub use types::graph::Graph;
pub use types::pipeline::{
    Event, EventKind, EventLog, Pipeline, PipelineConfig, PipelineReport, StageId,
};
pub use types::report::{Algo, RunResult, ShortestTarget, text_report};
pub use types::solver::{
    ParallelDijkstra, SequentialDijkstra, ShortestPathResult, reconstruct_path,
};
