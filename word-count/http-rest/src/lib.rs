pub mod wire;

mod http_worker;
pub use http_worker::{router, serve_worker};

mod http_endpoint;
pub use http_endpoint::HttpEndpoint;
