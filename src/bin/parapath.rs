use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parapath::cli::{split_csv, validate_targets, validate_threads};
use parapath::experiments::ExperimentRunner;
use parapath::{
    Algo, Error, Graph, GraphView, ParallelDijkstra, RunResult, SequentialDijkstra, ShortestPath,
    text_report,
};

/// Single-source shortest paths over a DOT-like digraph.
#[derive(Debug, Parser)]
#[command(
    name = "parapath",
    version,
    about,
    after_help = "Examples:\n  parapath graph.dot A \"X,Y,Z\" 4\n  parapath graph.dot \"Node A\" \"Target 1,Target 2\" 0\n  parapath -e"
)]
struct Args {
    /// Path to the graph file in DOT format.
    input: Option<PathBuf>,
    /// Start vertex name.
    start: Option<String>,
    /// Comma-separated list of target vertex names.
    targets: Option<String>,
    /// Worker threads: 0 runs the sequential engine.
    threads: Option<usize>,

    /// Print the human-readable report instead of JSON.
    #[arg(long)]
    text: bool,

    /// Run the comparative experiment harness and exit.
    #[arg(short = 'e', long = "experiments")]
    experiments: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = args.text;

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if text {
                eprintln!("error: {error}");
            } else {
                println!("{}", serde_json::json!({ "error": error.to_string() }));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.experiments {
        ExperimentRunner::default().run_comparative_analysis()?;
        return Ok(());
    }

    let (Some(input), Some(start), Some(targets), Some(threads)) =
        (args.input, args.start, args.targets, args.threads)
    else {
        return Err(Error::InvalidArguments(
            "usage: parapath <input.dot> <start> <targets_csv> <threads> (or -e)".into(),
        )
        .into());
    };

    let targets = split_csv(&targets);
    validate_targets(&targets)?;
    validate_threads(threads)?;

    let graph = Graph::load_from_dot(&input)?;

    let start_index = graph
        .find_vertex(&start)
        .ok_or_else(|| Error::NodeNotFound(start.clone()))?;
    let target_indices = targets
        .iter()
        .map(|name| {
            graph
                .find_vertex(name)
                .ok_or_else(|| Error::NodeNotFound(name.clone()))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let t0 = Instant::now();
    let (result, algo) = if threads == 0 {
        (SequentialDijkstra::new(&graph, start_index).run(), Algo::Seq)
    } else {
        (
            ParallelDijkstra::new(&graph, start_index, threads).run(),
            Algo::Par,
        )
    };
    let time_ms = t0.elapsed().as_millis() as u64;

    if args.text {
        print!(
            "{}",
            text_report(&graph, &start, &targets, &target_indices, &result)
        );
    } else {
        let run_result = RunResult::new(
            &graph,
            &start,
            &targets,
            &target_indices,
            &result,
            threads,
            time_ms,
            algo,
        );
        println!("{}", run_result.to_json());
    }

    Ok(())
}
