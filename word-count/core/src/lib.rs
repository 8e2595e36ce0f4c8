mod word_count_table;
pub use word_count_table::WordCountTable;

mod word_counter;
pub use word_counter::count_words;

pub mod text_chunker;
pub use text_chunker::{split_into_chunks, ChunkError, ChunkPolicy};

mod dispatch_error;
pub use dispatch_error::DispatchError;

mod dispatch_outcome;
pub use dispatch_outcome::DispatchOutcome;

mod worker_endpoint;
pub use worker_endpoint::WorkerEndpoint;

mod coordinator;
pub use coordinator::{Coordinator, CoordinatorError, DistributedCount, WorkerFailure};

mod local_endpoint;
pub use local_endpoint::LocalEndpoint;

pub mod run_config;
pub use run_config::{ConfigError, RunConfig};

mod run_report;
pub use run_report::RunReport;

mod runner;
pub use runner::{run_word_count, RunError};

mod logging;
pub use logging::init_logging;
