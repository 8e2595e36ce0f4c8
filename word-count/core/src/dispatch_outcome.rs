use crate::{DispatchError, WordCountTable};

/// Result of one dispatch, tagged with the worker that produced it
#[derive(Debug)]
pub enum DispatchOutcome {
    Success {
        worker: String,
        table: WordCountTable,
    },
    Failure {
        worker: String,
        reason: DispatchError,
    },
}

impl DispatchOutcome {
    pub fn from_result(worker: String, result: Result<WordCountTable, DispatchError>) -> Self {
        match result {
            Ok(table) => DispatchOutcome::Success { worker, table },
            Err(reason) => DispatchOutcome::Failure { worker, reason },
        }
    }

    pub fn worker(&self) -> &str {
        match self {
            DispatchOutcome::Success { worker, .. } => worker,
            DispatchOutcome::Failure { worker, .. } => worker,
        }
    }
}
