//! Comparative experiment harness: sweeps thread counts over generated
//! random graphs and records the measurements as CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use tracing::info;

use crate::error::{Error, Result};
use crate::utils_test::gen_utils::generate_random_graph;
use crate::{ParallelDijkstra, SequentialDijkstra, ShortestPath};

/// One measured configuration. `threads == 0` marks the sequential baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentResult {
    pub graph_size: usize,
    pub threads: usize,
    pub time_us: u64,
    pub sequential: bool,
}

/// Sweeps both engines across graph sizes and thread counts.
pub struct ExperimentRunner {
    sizes: Vec<usize>,
    runs: usize,
    csv_path: PathBuf,
}

impl Default for ExperimentRunner {
    fn default() -> Self {
        Self {
            sizes: vec![2_000, 4_000, 6_000, 8_000],
            runs: 3,
            csv_path: PathBuf::from("experiment_results.csv"),
        }
    }
}

impl ExperimentRunner {
    pub fn new(sizes: Vec<usize>, runs: usize, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            sizes,
            runs,
            csv_path: csv_path.into(),
        }
    }

    /// Runs the full sweep, writes the CSV and logs a per-size
    /// recommendation.
    ///
    /// Each configuration is measured `runs` times and the best time is
    /// kept, which filters out scheduler noise on a busy machine.
    pub fn run_comparative_analysis(&self) -> Result<Vec<ExperimentResult>> {
        let logical_cores = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        info!(logical_cores, "starting comparative analysis");

        let thread_counts = thread_counts(logical_cores);
        let mut results = Vec::new();

        for &size in &self.sizes {
            // Same generation parameters for every sweep, seeded per size
            // so the sequential and parallel engines see identical graphs.
            let graph = generate_random_graph(size, 5, 20, 42 + size as u64);
            info!(size, "graph generated");

            let seq_time = best_time_us(self.runs, || {
                SequentialDijkstra::new(&graph, 0).run();
            });
            info!(size, time_us = seq_time, "sequential baseline");
            results.push(ExperimentResult {
                graph_size: size,
                threads: 0,
                time_us: seq_time,
                sequential: true,
            });

            for &threads in &thread_counts {
                let time_us = best_time_us(self.runs, || {
                    ParallelDijkstra::new(&graph, 0, threads).run();
                });
                info!(size, threads, time_us, "parallel measurement");
                results.push(ExperimentResult {
                    graph_size: size,
                    threads,
                    time_us,
                    sequential: false,
                });
            }
        }

        self.write_csv(&results)?;
        recommend(&results);

        Ok(results)
    }

    fn write_csv(&self, results: &[ExperimentResult]) -> Result<()> {
        let open_failure = |source| Error::FileOpenFailure {
            path: self.csv_path.clone(),
            source,
        };

        let file = File::create(&self.csv_path).map_err(open_failure)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "graph_size,threads,time_us,algo").map_err(open_failure)?;
        for result in results {
            let algo = if result.sequential { "seq" } else { "par" };
            writeln!(
                out,
                "{},{},{},{}",
                result.graph_size, result.threads, result.time_us, algo
            )
            .map_err(open_failure)?;
        }
        out.flush().map_err(open_failure)?;

        info!(path = %self.csv_path.display(), "results written");
        Ok(())
    }
}

/// Powers of two from 1 up to twice the logical core count.
fn thread_counts(logical_cores: usize) -> Vec<usize> {
    let mut counts = Vec::new();
    let mut t = 1;
    while t <= logical_cores * 2 {
        counts.push(t);
        t *= 2;
    }
    counts
}

fn best_time_us(runs: usize, mut body: impl FnMut()) -> u64 {
    let mut best = u64::MAX;
    for _ in 0..runs.max(1) {
        let t0 = Instant::now();
        body();
        best = best.min(t0.elapsed().as_micros() as u64);
    }
    best
}

/// Logs the fastest parallel configuration per graph size next to the
/// sequential baseline.
fn recommend(results: &[ExperimentResult]) {
    let mut sizes: Vec<usize> = results.iter().map(|r| r.graph_size).collect();
    sizes.dedup();

    for size in sizes {
        let baseline = results
            .iter()
            .find(|r| r.graph_size == size && r.sequential)
            .map(|r| r.time_us);
        let best_par = results
            .iter()
            .filter(|r| r.graph_size == size && !r.sequential)
            .min_by_key(|r| r.time_us);

        if let (Some(baseline), Some(best)) = (baseline, best_par) {
            info!(
                size,
                baseline_us = baseline,
                best_threads = best.threads,
                best_us = best.time_us,
                "recommendation"
            );
        }
    }
}
