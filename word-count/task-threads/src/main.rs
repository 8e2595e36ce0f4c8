use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use word_count_core::{
    init_logging, run_word_count, ChunkPolicy, LocalEndpoint, RunConfig, WorkerEndpoint,
};

/// Single machine word count, one blocking thread per worker
#[derive(Parser, Debug)]
#[command(name = "word-count-task-threads")]
struct Args {
    /// JSON configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Corpus to count, overrides the configuration
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of worker threads, overrides the configuration
    #[arg(long)]
    workers: Option<usize>,

    #[arg(long)]
    chunk_policy: Option<ChunkPolicy>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

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

    let workers: Vec<Arc<dyn WorkerEndpoint>> = (0..config.num_workers)
        .map(|id| Arc::new(LocalEndpoint::new(id)) as Arc<dyn WorkerEndpoint>)
        .collect();

    println!("Running single-machine, multithreaded word count...");
    let report = run_word_count(&config, &workers).await?;

    println!();
    print!("{}", report);
    Ok(())
}
