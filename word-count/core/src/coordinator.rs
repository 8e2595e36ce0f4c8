use crate::text_chunker::{dropped_line_count, split_into_chunks, ChunkPolicy};
use crate::{DispatchError, DispatchOutcome, WordCountTable, WorkerEndpoint};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;

/// A worker whose partial table was left out of the global table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerFailure {
    pub worker: String,
    pub reason: DispatchError,
}

/// Result of one distributed count
#[derive(Debug)]
pub struct DistributedCount {
    /// Merged table of every successful worker
    pub table: WordCountTable,
    /// Wall-clock time from the first dispatch until the last one resolved
    pub elapsed: Duration,
    pub succeeded: Vec<String>,
    pub failures: Vec<WorkerFailure>,
}

#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("no workers were given to the coordinator")]
    NoWorkers,
    #[error("all {} workers failed, no data was counted", failures.len())]
    NoData { failures: Vec<WorkerFailure> },
}

/// Coordinator fans chunks out to workers and folds their partial tables
/// back into a single global table
///
/// Workers are handed in on every call. Each call chunks the text once,
/// spawns one dispatch task per worker into a task group and drains the
/// completions on the calling task, so the global table is only ever touched
/// by one task.
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    chunk_policy: ChunkPolicy,
}

impl Coordinator {
    pub fn new(chunk_policy: ChunkPolicy) -> Self {
        Self { chunk_policy }
    }

    pub fn chunk_policy(&self) -> ChunkPolicy {
        self.chunk_policy
    }

    /// Count the words of `text` across `workers`, chunk `i` going to worker `i`
    ///
    /// A failing worker is logged and contributes nothing. The call only
    /// fails when there are no workers or when every worker failed.
    pub async fn count_distributed(
        &self,
        text: &str,
        workers: &[Arc<dyn WorkerEndpoint>],
    ) -> Result<DistributedCount, CoordinatorError> {
        let chunks = split_into_chunks(text, workers.len(), self.chunk_policy)
            .map_err(|_| CoordinatorError::NoWorkers)?;

        if self.chunk_policy == ChunkPolicy::Truncate {
            let dropped = dropped_line_count(text, workers.len());
            if dropped > 0 {
                tracing::warn!(
                    dropped_lines = dropped,
                    workers = workers.len(),
                    "trailing lines do not fit in the chunks and will not be counted"
                );
            }
        }

        tracing::info!("dispatching {} chunks to {} workers", chunks.len(), workers.len());

        // Dropping the set aborts every dispatch still in flight, so a caller
        // that gives up on the count stops all outstanding worker calls
        let mut dispatches = JoinSet::new();
        let start = Instant::now();

        for (slot, (worker, chunk)) in workers.iter().zip(chunks).enumerate() {
            let worker = Arc::clone(worker);
            dispatches.spawn(async move { (slot, dispatch(worker.as_ref(), chunk).await) });
        }

        let mut table = WordCountTable::new();
        let mut succeeded = Vec::new();
        let mut failures = Vec::new();
        let mut reported = vec![false; workers.len()];

        while let Some(joined) = dispatches.join_next().await {
            let (slot, outcome) = match joined {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::warn!(error = %e, "dispatch task did not complete");
                    continue;
                }
            };
            reported[slot] = true;
            tracing::trace!(worker = %outcome.worker(), slot, "dispatch resolved");

            match outcome {
                DispatchOutcome::Success {
                    worker,
                    table: partial,
                } => {
                    tracing::debug!(worker = %worker, tokens = partial.len(), "worker finished");
                    table.merge(partial);
                    succeeded.push(worker);
                }
                DispatchOutcome::Failure { worker, reason } => {
                    tracing::warn!(worker = %worker, error = %reason, "worker failed, its chunk is skipped");
                    failures.push(WorkerFailure { worker, reason });
                }
            }
        }

        let elapsed = start.elapsed();

        for (slot, _) in reported.iter().enumerate().filter(|(_, done)| !**done) {
            let worker = workers[slot].identity().to_string();
            tracing::warn!(worker = %worker, "dispatch task ended without reporting");
            failures.push(WorkerFailure {
                worker,
                reason: DispatchError::Panicked("dispatch task was cancelled".to_string()),
            });
        }

        if succeeded.is_empty() {
            return Err(CoordinatorError::NoData { failures });
        }

        Ok(DistributedCount {
            table,
            elapsed,
            succeeded,
            failures,
        })
    }
}

async fn dispatch(worker: &dyn WorkerEndpoint, chunk: String) -> DispatchOutcome {
    let identity = worker.identity().to_string();
    let result = AssertUnwindSafe(worker.submit_chunk(chunk))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| Err(DispatchError::Panicked(panic_message(payload.as_ref()))));
    DispatchOutcome::from_result(identity, result)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
