use crate::{ConfigError, Coordinator, CoordinatorError, RunConfig, RunReport, WorkerEndpoint};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),
}

/// Load the corpus named by `config`, count it across `workers` and build the report
pub async fn run_word_count(
    config: &RunConfig,
    workers: &[Arc<dyn WorkerEndpoint>],
) -> Result<RunReport, RunError> {
    let text = config.read_corpus()?;
    tracing::info!(
        "counting {} ({} bytes) with {} workers",
        config.input_path.display(),
        text.len(),
        workers.len()
    );

    let coordinator = Coordinator::new(config.chunk_policy);
    let count = coordinator.count_distributed(&text, workers).await?;

    Ok(RunReport::new(&count, text.len(), config.top_n))
}
