//! Wire types of the `wordcount.WordCount` service
//!
//! Messages are declared with prost derives and the client/server stubs are
//! generated by `build.rs`, so no `protoc` is needed at build time.

use std::collections::HashMap;

/// Largest request or reply either side will accept
pub const MAX_MESSAGE_BYTES: usize = 64 * 1024 * 1024;

#[derive(Clone, PartialEq, prost::Message)]
pub struct WordCountRequest {
    #[prost(string, tag = "1")]
    pub text_chunk: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct WordCountReply {
    #[prost(map = "string, uint64", tag = "1")]
    pub counts: HashMap<String, u64>,
}

include!(concat!(env!("OUT_DIR"), "/wordcount.WordCount.rs"));
