use thiserror::Error;

/// Failure of a single dispatch to a worker
/// Contained by the coordinator, never returned from a distributed count
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("failed to reach worker: {0}")]
    Connect(String),
    #[error("worker returned an error status: {0}")]
    Status(String),
    #[error("malformed reply from worker: {0}")]
    Malformed(String),
    #[error("I/O error talking to worker: {0}")]
    Io(String),
    #[error("worker task panicked: {0}")]
    Panicked(String),
}

impl From<std::io::Error> for DispatchError {
    fn from(e: std::io::Error) -> Self {
        DispatchError::Io(e.to_string())
    }
}
