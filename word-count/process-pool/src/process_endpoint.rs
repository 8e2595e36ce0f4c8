use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use word_count_core::{DispatchError, WordCountTable, WorkerEndpoint};

/// Subcommand that turns the binary into a one-shot chunk counter
pub const COUNT_CHUNK_SUBCOMMAND: &str = "count-chunk";

/// Worker backed by a fresh child process per chunk
/// The chunk goes in on stdin, the table comes back as JSON on stdout
pub struct ProcessEndpoint {
    identity: String,
    program: PathBuf,
}

impl ProcessEndpoint {
    pub fn new(id: usize, program: PathBuf) -> Self {
        Self {
            identity: format!("process-{}", id),
            program,
        }
    }
}

#[async_trait]
impl WorkerEndpoint for ProcessEndpoint {
    fn identity(&self) -> &str {
        &self.identity
    }

    async fn submit_chunk(&self, chunk: String) -> Result<WordCountTable, DispatchError> {
        let mut child = Command::new(&self.program)
            .arg(COUNT_CHUNK_SUBCOMMAND)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DispatchError::Connect(format!("cannot start {}: {}", self.program.display(), e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(chunk.as_bytes()).await?;
            // Dropping stdin closes the pipe so the child sees end of input
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(DispatchError::Status(format!(
                "{} exited with {}",
                self.identity, output.status
            )));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| DispatchError::Malformed(e.to_string()))
    }
}
