use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use tracing::{debug, info};

mod blocking_queue;
mod event;
mod request;

pub use blocking_queue::BlockingQueue;
pub use event::{Event, EventKind, EventLog, StageId};
pub use request::{PreparedRequest, Request, SolvedRequest};

use crate::config::DEFAULT_THREADS;
use crate::error::{Error, Result};
use crate::types::report::text_report;
use crate::{Graph, GraphView, ParallelDijkstra, ShortestPath};

/// Configuration for one pipeline run.
///
/// All `requests` copies carry the same graph file, start name and target
/// set; the input count is known up front.
pub struct PipelineConfig {
    pub graph_file: PathBuf,
    pub start_name: String,
    pub target_names: Vec<String>,
    /// Number of requests pushed by the generator.
    pub requests: usize,
    /// Worker threads handed to the solve stage's parallel engine.
    pub threads: usize,
    /// Directory receiving one report file per request.
    pub result_dir: PathBuf,
}

impl PipelineConfig {
    pub fn new(
        graph_file: impl Into<PathBuf>,
        start_name: impl Into<String>,
        target_names: Vec<String>,
        requests: usize,
    ) -> Self {
        Self {
            graph_file: graph_file.into(),
            start_name: start_name.into(),
            target_names,
            requests,
            threads: DEFAULT_THREADS,
            result_dir: PathBuf::from("result"),
        }
    }
}

/// Everything observable about a finished run.
#[derive(Debug)]
pub struct PipelineReport {
    /// All stage events, ascending by timestamp.
    pub events: Vec<Event>,
    /// Total wall time of the run in microseconds.
    pub total_us: u64,
    /// The report files written by the emit stage, in request order.
    pub outputs: Vec<PathBuf>,
}

/// The three-stage request pipeline.
///
/// One dedicated worker thread per stage, connected by unbounded blocking
/// FIFOs. The generator enqueues all requests before the stages start, and
/// every stage runs an exact-N loop, so shutdown is a plain join. Stages
/// overlap: the solve stage may start request `i` before the prepare stage
/// has finished request `i + 1` — that is the point of the pipeline, and
/// the event log exists to make the overlap visible.
///
/// Failures do not unwind a stage thread. The hand-off queues carry
/// `Result` items, so an error raised while processing one request travels
/// downstream in that request's slot, every stage still completes its N
/// iterations, and the join never hangs. `run` reports the first error.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs the generator and all three stages to completion.
    pub fn run(&self) -> Result<PipelineReport> {
        let n = self.config.requests;
        if n == 0 {
            return Err(Error::InvalidArguments(
                "request count must be at least 1".into(),
            ));
        }

        fs::create_dir_all(&self.config.result_dir).map_err(|source| Error::FileOpenFailure {
            path: self.config.result_dir.clone(),
            source,
        })?;

        info!(requests = n, threads = self.config.threads, "pipeline starting");

        let input: BlockingQueue<Request> = BlockingQueue::new();
        let prepared: BlockingQueue<Result<PreparedRequest>> = BlockingQueue::new();
        let solved: BlockingQueue<Result<SolvedRequest>> = BlockingQueue::new();
        let log = EventLog::new();

        // Generator: the input count is known up front, so every request is
        // enqueued before the first stage starts.
        for id in 0..n {
            input.push(Request {
                id,
                graph_file: self.config.graph_file.clone(),
                start_name: self.config.start_name.clone(),
                target_names: self.config.target_names.clone(),
            });
        }

        let (outputs, first_error) = thread::scope(|scope| {
            let stage1 = scope.spawn(|| stage_prepare(&input, &prepared, &log, n));
            let stage2 = scope.spawn(|| {
                stage_solve(&prepared, &solved, &log, n, self.config.threads)
            });
            let stage3 = scope.spawn(|| {
                stage_emit(
                    &solved,
                    &log,
                    n,
                    &self.config.graph_file,
                    &self.config.result_dir,
                )
            });

            stage1.join().expect("prepare stage panicked");
            stage2.join().expect("solve stage panicked");
            stage3.join().expect("emit stage panicked")
        });

        if let Some(error) = first_error {
            return Err(error);
        }

        let total_us = log.elapsed_us();
        info!(total_us, "pipeline finished");

        Ok(PipelineReport {
            events: log.into_sorted(),
            total_us,
            outputs,
        })
    }
}

/// Stage 1: load the graph from disk and resolve every name to an index.
fn stage_prepare(
    input: &BlockingQueue<Request>,
    output: &BlockingQueue<Result<PreparedRequest>>,
    log: &EventLog,
    n: usize,
) {
    for _ in 0..n {
        let request = input.pop();
        log.record(StageId::Prepare, request.id, EventKind::Start);

        let id = request.id;
        let prepared = prepare(request);
        if prepared.is_ok() {
            log.record(StageId::Prepare, id, EventKind::End);
        }
        output.push(prepared);
    }
}

fn prepare(request: Request) -> Result<PreparedRequest> {
    let graph = Graph::load_from_dot(&request.graph_file)?;

    let start_index = graph
        .find_vertex(&request.start_name)
        .ok_or_else(|| Error::NodeNotFound(request.start_name.clone()))?;

    let target_indices = request
        .target_names
        .iter()
        .map(|name| {
            graph
                .find_vertex(name)
                .ok_or_else(|| Error::NodeNotFound(name.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(request = request.id, "request prepared");

    Ok(PreparedRequest {
        request,
        graph,
        start_index,
        target_indices,
    })
}

/// Stage 2: run the parallel engine and attach its output.
fn stage_solve(
    input: &BlockingQueue<Result<PreparedRequest>>,
    output: &BlockingQueue<Result<SolvedRequest>>,
    log: &EventLog,
    n: usize,
    threads: usize,
) {
    for _ in 0..n {
        let item = input.pop().map(|prepared| {
            log.record(StageId::Solve, prepared.request.id, EventKind::Start);

            let result = ParallelDijkstra::new(&prepared.graph, prepared.start_index, threads).run();

            log.record(StageId::Solve, prepared.request.id, EventKind::End);
            SolvedRequest { prepared, result }
        });
        output.push(item);
    }
}

/// Stage 3: pick the closest target, reconstruct its path and write the
/// per-request report file. Returns the written paths and the first error
/// seen anywhere in the pipeline.
fn stage_emit(
    input: &BlockingQueue<Result<SolvedRequest>>,
    log: &EventLog,
    n: usize,
    graph_file: &Path,
    result_dir: &Path,
) -> (Vec<PathBuf>, Option<Error>) {
    let mut outputs = Vec::with_capacity(n);
    let mut first_error = None;

    for _ in 0..n {
        match input.pop().and_then(|solved| {
            let id = solved.prepared.request.id;
            log.record(StageId::Emit, id, EventKind::Start);

            let path = emit(&solved, graph_file, result_dir)?;

            log.record(StageId::Emit, id, EventKind::End);
            Ok(path)
        }) {
            Ok(path) => outputs.push(path),
            Err(error) => {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
    }

    (outputs, first_error)
}

fn emit(solved: &SolvedRequest, graph_file: &Path, result_dir: &Path) -> Result<PathBuf> {
    let prepared = &solved.prepared;

    let stem = graph_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("graph");
    let path = result_dir.join(format!("{stem}_result_{}.txt", prepared.request.id));

    let report = text_report(
        &prepared.graph,
        &prepared.request.start_name,
        &prepared.request.target_names,
        &prepared.target_indices,
        &solved.result,
    );

    fs::write(&path, report).map_err(|source| Error::FileOpenFailure {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
