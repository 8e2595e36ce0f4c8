use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use word_count_core::{init_logging, run_word_count, ChunkPolicy, RunConfig, WorkerEndpoint};
use word_count_process_rpc::{serve_worker, GrpcEndpoint};

const DEFAULT_WORKERS: &[&str] = &["localhost:6001", "localhost:6002"];

/// Distributed word count over gRPC
#[derive(Parser, Debug)]
#[command(name = "word-count-process-rpc")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the word counter until Ctrl+C
    Worker {
        #[arg(long, default_value_t = 6001)]
        port: u16,
    },
    /// Split the corpus across the configured workers and print the result
    Master {
        /// JSON configuration file
        #[arg(long, default_value = "config.json")]
        config: PathBuf,

        /// Corpus to count, overrides the configuration
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        chunk_policy: Option<ChunkPolicy>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    match Args::parse().command {
        Command::Worker { port } => run_worker(port).await,
        Command::Master {
            config,
            input,
            chunk_policy,
        } => run_master(config, input, chunk_policy).await,
    }
}

async fn run_worker(port: u16) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding worker port {}", port))?;

    let shutdown = CancellationToken::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, shutting down worker");
        }
        ctrl_c.cancel();
    });

    serve_worker(listener, shutdown).await?;
    Ok(())
}

async fn run_master(
    config_path: PathBuf,
    input: Option<PathBuf>,
    chunk_policy: Option<ChunkPolicy>,
) -> Result<()> {
    let mut config = RunConfig::load_or_default(&config_path);
    config.apply_env();
    if let Some(input) = input {
        config.input_path = input;
    }
    if let Some(policy) = chunk_policy {
        config.chunk_policy = policy;
    }

    let workers: Vec<Arc<dyn WorkerEndpoint>> = config
        .workers_or(DEFAULT_WORKERS)
        .into_iter()
        .map(|address| Arc::new(GrpcEndpoint::new(address)) as Arc<dyn WorkerEndpoint>)
        .collect();

    println!("Starting distributed word count...");
    let report = run_word_count(&config, &workers).await?;

    println!();
    print!("{}", report);
    Ok(())
}
