use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::config::{INF, INF_LIKE};
use crate::types::solver::{ShortestPathResult, reconstruct_path};
use crate::{Graph, GraphView};

/// Which engine produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algo {
    Seq,
    Par,
}

/// The minimum-distance target and its reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestTarget {
    pub target: String,
    pub distance: u64,
    pub path: Vec<String>,
}

/// The JSON result artifact of a single solver run.
///
/// `distances` maps each target name to its distance, or to `null` when the
/// target is unreachable. `shortest` is `null` when every target is
/// unreachable; ties are broken by input order, first target wins.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub start: String,
    pub targets: Vec<String>,
    pub threads: usize,
    pub algo: Algo,
    pub time_ms: u64,
    pub distances: BTreeMap<String, Option<u64>>,
    pub shortest: Option<ShortestTarget>,
}

impl RunResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        graph: &Graph,
        start_name: &str,
        target_names: &[String],
        target_indices: &[usize],
        result: &ShortestPathResult,
        threads: usize,
        time_ms: u64,
        algo: Algo,
    ) -> Self {
        let distances = target_names
            .iter()
            .zip(target_indices)
            .map(|(name, &index)| {
                let d = result.dist[index];
                (name.clone(), (d < INF_LIKE).then_some(d))
            })
            .collect();

        let shortest = select_shortest(target_indices, &result.dist).map(|(pos, distance)| {
            ShortestTarget {
                target: target_names[pos].clone(),
                distance,
                path: path_names(graph, target_indices[pos], &result.parent),
            }
        });

        Self {
            start: start_name.to_owned(),
            targets: target_names.to_vec(),
            threads,
            algo,
            time_ms,
            distances,
            shortest,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("run result serializes to JSON")
    }
}

/// Renders the human-readable report written by the single-run driver and
/// by the pipeline's emit stage.
pub fn text_report(
    graph: &Graph,
    start_name: &str,
    target_names: &[String],
    target_indices: &[usize],
    result: &ShortestPathResult,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Start vertex: {start_name}");
    let _ = writeln!(out, "Marked vertices: {}", target_names.join(", "));
    let _ = writeln!(out);

    let _ = writeln!(out, "Distances to marked vertices:");
    for (name, &index) in target_names.iter().zip(target_indices) {
        let d = result.dist[index];
        if d >= INF {
            let _ = writeln!(out, "  {name}: INF");
        } else {
            let _ = writeln!(out, "  {name}: {d}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Shortest path among marked vertices:");
    match select_shortest(target_indices, &result.dist) {
        None => {
            let _ = writeln!(out, "  All marked vertices are unreachable.");
        }
        Some((pos, distance)) => {
            let path = path_names(graph, target_indices[pos], &result.parent);
            let _ = writeln!(out, "  Target vertex: {}", target_names[pos]);
            let _ = writeln!(out, "  Path length: {distance}");
            let _ = writeln!(out, "  Path: {}", path.join(" -> "));
        }
    }

    out
}

/// Finds the position and distance of the closest reachable target.
/// Ties are broken by input order: the first target wins.
fn select_shortest(target_indices: &[usize], dist: &[u64]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for (pos, &index) in target_indices.iter().enumerate() {
        let d = dist[index];
        if d >= INF_LIKE {
            continue;
        }
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((pos, d));
        }
    }
    best
}

fn path_names(graph: &Graph, target: usize, parent: &[i64]) -> Vec<String> {
    reconstruct_path(target, parent)
        .into_iter()
        .map(|vertex| graph.vertex_name(vertex).unwrap_or("?").to_owned())
        .collect()
}
