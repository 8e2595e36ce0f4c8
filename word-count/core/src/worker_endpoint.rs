use crate::{DispatchError, WordCountTable};
use async_trait::async_trait;

/// Trait for abstracting where a chunk gets counted
/// Implementations exist for blocking threads, child processes, gRPC and HTTP
#[async_trait]
pub trait WorkerEndpoint: Send + Sync {
    /// Name used in logs and failure reports (an address, a pid slot, ...)
    fn identity(&self) -> &str;

    /// Count the words of `chunk` on this worker and return its partial table
    async fn submit_chunk(&self, chunk: String) -> Result<WordCountTable, DispatchError>;
}
