use crate::rpc::word_count_client::WordCountClient;
use crate::rpc::{WordCountRequest, MAX_MESSAGE_BYTES};
use async_trait::async_trait;
use tonic::transport::Channel;
use word_count_core::{DispatchError, WordCountTable, WorkerEndpoint};

/// Coordinator side of a gRPC worker
/// Opens a fresh channel per chunk, one chunk is sent per run
pub struct GrpcEndpoint {
    address: String,
}

impl GrpcEndpoint {
    /// `address` is either `host:port` or a full `http://host:port` URI
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    fn uri(&self) -> String {
        if self.address.starts_with("http://") || self.address.starts_with("https://") {
            self.address.clone()
        } else {
            format!("http://{}", self.address)
        }
    }
}

#[async_trait]
impl WorkerEndpoint for GrpcEndpoint {
    fn identity(&self) -> &str {
        &self.address
    }

    async fn submit_chunk(&self, chunk: String) -> Result<WordCountTable, DispatchError> {
        let channel = Channel::from_shared(self.uri())
            .map_err(|e| DispatchError::Connect(format!("invalid address {}: {}", self.address, e)))?
            .connect()
            .await
            .map_err(|e| DispatchError::Connect(e.to_string()))?;

        let mut client = WordCountClient::new(channel)
            .max_decoding_message_size(MAX_MESSAGE_BYTES)
            .max_encoding_message_size(MAX_MESSAGE_BYTES);

        let reply = client
            .count_words(tonic::Request::new(WordCountRequest { text_chunk: chunk }))
            .await
            .map_err(|status| {
                DispatchError::Status(format!("{:?}: {}", status.code(), status.message()))
            })?;

        Ok(WordCountTable::from(reply.into_inner().counts))
    }
}
