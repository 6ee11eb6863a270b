use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parapath::cli::{split_csv, validate_targets};
use parapath::config::DEFAULT_THREADS;
use parapath::{Error, Pipeline, PipelineConfig};

/// Streams N copies of one shortest-path request through the three-stage
/// pipeline and prints the timestamped event log.
#[derive(Debug, Parser)]
#[command(
    name = "parapath-pipeline",
    version,
    about,
    after_help = "Example:\n  parapath-pipeline graph.dot A \"X,Y,Z\" 8"
)]
struct Args {
    /// Path to the graph file in DOT format.
    input: PathBuf,
    /// Start vertex name.
    start: String,
    /// Comma-separated list of marked vertex names.
    targets: String,
    /// Number of requests to generate.
    requests: usize,

    /// Worker threads for the solve stage's engine.
    #[arg(long, default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Directory receiving one report file per request.
    #[arg(long, default_value = "result")]
    result_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let targets = split_csv(&args.targets);
    validate_targets(&targets)?;
    if args.requests == 0 {
        return Err(Error::InvalidArguments("request count must be at least 1".into()).into());
    }

    let mut config = PipelineConfig::new(args.input, args.start, targets, args.requests);
    config.threads = args.threads;
    config.result_dir = args.result_dir;

    let report = Pipeline::new(config).run()?;

    for event in &report.events {
        println!("{event}");
    }
    println!("Total pipeline time: {} us", report.total_us);

    Ok(())
}
