pub mod rpc;

mod grpc_worker;
pub use grpc_worker::{serve_worker, WordCountService};

mod grpc_endpoint;
pub use grpc_endpoint::GrpcEndpoint;
