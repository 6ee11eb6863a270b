//! Shared argument handling for the driver binaries.

use crate::error::{Error, Result};

/// Thread counts above this are rejected at the command line; the engine
/// itself clamps harder.
pub const MAX_CLI_THREADS: usize = 128;

/// Splits a comma-separated vertex list, trimming whitespace and dropping
/// empty items.
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Validates the target list of a run: at least one name, no duplicates.
pub fn validate_targets(targets: &[String]) -> Result<()> {
    if targets.is_empty() {
        return Err(Error::InvalidArguments(
            "at least one target vertex must be specified".into(),
        ));
    }

    for (i, target) in targets.iter().enumerate() {
        if targets[..i].contains(target) {
            return Err(Error::InvalidArguments(format!(
                "duplicate target vertex: {target}"
            )));
        }
    }

    Ok(())
}

/// Validates the thread argument of the single-run driver; 0 selects the
/// sequential engine and is always accepted.
pub fn validate_threads(threads: usize) -> Result<()> {
    if threads > MAX_CLI_THREADS {
        return Err(Error::InvalidArguments(format!(
            "thread count too high (max {MAX_CLI_THREADS})"
        )));
    }
    Ok(())
}
