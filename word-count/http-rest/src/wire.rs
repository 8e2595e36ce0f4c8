use serde::{Deserialize, Serialize};
use word_count_core::WordCountTable;

/// Route the worker serves and the endpoint posts to
pub const COUNT_WORDS_PATH: &str = "/count_words";

/// Largest request body the worker accepts
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCountRequest {
    pub text_chunk: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCountReply {
    pub counts: WordCountTable,
}
