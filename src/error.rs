use std::path::PathBuf;

/// The error type for every fallible operation in this crate.
///
/// All errors surface at the driver boundary, where they are rendered either
/// as a one-line JSON object or as a plain message, and the process exits
/// non-zero. The solvers themselves have no failure modes once invoked on a
/// valid graph with an in-range source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command line did not satisfy the documented invocation shapes.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The input graph file could not be opened or read.
    #[error("failed to open {}: {source}", .path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input was not a well-formed DOT-like digraph.
    #[error("malformed DOT input: {0}")]
    Parse(String),

    /// An edge weight did not fit into 32 bits.
    #[error("edge weight {0} exceeds the 32-bit range")]
    WeightOverflow(String),

    /// A start or target vertex name was absent after loading the graph.
    #[error("vertex not found: {0}")]
    NodeNotFound(String),

    /// An edge endpoint index was outside `[0, n)`.
    #[error("vertex index out of bounds: {u} or {v}")]
    OutOfRange { u: usize, v: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
