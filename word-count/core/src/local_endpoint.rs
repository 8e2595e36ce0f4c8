use crate::{count_words, DispatchError, WordCountTable, WorkerEndpoint};
use async_trait::async_trait;

/// In-process worker that counts its chunk on tokio's blocking thread pool
pub struct LocalEndpoint {
    identity: String,
}

impl LocalEndpoint {
    pub fn new(id: usize) -> Self {
        Self {
            identity: format!("thread-{}", id),
        }
    }
}

#[async_trait]
impl WorkerEndpoint for LocalEndpoint {
    fn identity(&self) -> &str {
        &self.identity
    }

    async fn submit_chunk(&self, chunk: String) -> Result<WordCountTable, DispatchError> {
        tokio::task::spawn_blocking(move || count_words(&chunk))
            .await
            .map_err(|e| DispatchError::Panicked(e.to_string()))
    }
}
