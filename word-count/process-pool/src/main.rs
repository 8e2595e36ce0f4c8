use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use word_count_core::{init_logging, run_word_count, ChunkPolicy, RunConfig, WorkerEndpoint};
use word_count_process_pool::{count_chunk_stream, ProcessEndpoint, COUNT_CHUNK_SUBCOMMAND};

/// Single machine word count, one child process per worker
#[derive(Parser, Debug)]
#[command(name = "word-count-process-pool")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON configuration file
    #[arg(long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Corpus to count, overrides the configuration
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Number of worker processes, overrides the configuration
    #[arg(long, global = true)]
    workers: Option<usize>,

    #[arg(long, global = true)]
    chunk_policy: Option<ChunkPolicy>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the chunk read from stdin and print its table as JSON
    #[command(name = COUNT_CHUNK_SUBCOMMAND, hide = true)]
    CountChunk,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    if let Some(Command::CountChunk) = args.command {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return count_chunk_stream(stdin.lock(), stdout.lock()).context("counting chunk from stdin");
    }

    let mut config = RunConfig::load_or_default(&args.config);
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(workers) = args.workers {
        config.num_workers = workers;
    }
    if let Some(policy) = args.chunk_policy {
        config.chunk_policy = policy;
    }

    let program = std::env::current_exe().context("locating the worker executable")?;
    tracing::debug!("worker processes run {}", program.display());

    let workers: Vec<Arc<dyn WorkerEndpoint>> = (0..config.num_workers)
        .map(|id| Arc::new(ProcessEndpoint::new(id, program.clone())) as Arc<dyn WorkerEndpoint>)
        .collect();

    println!("Running multiprocessing word count...");
    let report = run_word_count(&config, &workers).await?;

    println!();
    print!("{}", report);
    Ok(())
}
