use crate::wire::{WordCountReply, WordCountRequest, COUNT_WORDS_PATH};
use async_trait::async_trait;
use reqwest::Client;
use word_count_core::{DispatchError, WordCountTable, WorkerEndpoint};

/// Coordinator side of an HTTP worker
pub struct HttpEndpoint {
    base_url: String,
    client: Client,
}

impl HttpEndpoint {
    /// `base_url` is `http://host:port`, a bare `host:port` gets the `http` scheme
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        let base_url = if base_url.contains("://") {
            base_url
        } else {
            format!("http://{}", base_url)
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, COUNT_WORDS_PATH)
    }
}

#[async_trait]
impl WorkerEndpoint for HttpEndpoint {
    fn identity(&self) -> &str {
        &self.base_url
    }

    async fn submit_chunk(&self, chunk: String) -> Result<WordCountTable, DispatchError> {
        let response = self
            .client
            .post(self.url())
            .json(&WordCountRequest { text_chunk: chunk })
            .send()
            .await
            .map_err(|e| DispatchError::Connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Status(format!("{} {}", status, body)));
        }

        let reply: WordCountReply = response
            .json()
            .await
            .map_err(|e| DispatchError::Malformed(e.to_string()))?;
        Ok(reply.counts)
    }
}
