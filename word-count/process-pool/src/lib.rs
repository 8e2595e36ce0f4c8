mod chunk_worker;
pub use chunk_worker::count_chunk_stream;

mod process_endpoint;
pub use process_endpoint::{ProcessEndpoint, COUNT_CHUNK_SUBCOMMAND};
