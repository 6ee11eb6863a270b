//! Numeric limits shared by the solvers and the report builders.

/// Sentinel distance for a vertex that has never been reached.
///
/// Kept at a quarter of the `u64` range so that `INF + w` can never wrap
/// past [`INF_LIKE`] for any 32-bit edge weight.
pub const INF: u64 = u64::MAX / 4;

/// Reporting threshold: any distance at or above this value is displayed
/// as unreachable.
pub const INF_LIKE: u64 = u64::MAX / 2;

/// Thread count used by the pipeline's solve stage unless configured.
pub const DEFAULT_THREADS: usize = 1;

/// Upper bound on worker threads accepted by the parallel engine.
pub const MAX_THREADS: usize = 64;
