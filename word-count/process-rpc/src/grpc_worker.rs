use crate::rpc::word_count_server::{WordCount, WordCountServer};
use crate::rpc::{WordCountReply, WordCountRequest, MAX_MESSAGE_BYTES};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use word_count_core::count_words;

/// gRPC servicer exposing the word counter
#[derive(Debug, Default, Clone, Copy)]
pub struct WordCountService;

#[tonic::async_trait]
impl WordCount for WordCountService {
    async fn count_words(
        &self,
        request: Request<WordCountRequest>,
    ) -> Result<Response<WordCountReply>, Status> {
        let chunk = request.into_inner().text_chunk;
        let table = tokio::task::spawn_blocking(move || count_words(&chunk))
            .await
            .map_err(|e| Status::internal(format!("counting task failed: {}", e)))?;

        Ok(Response::new(WordCountReply {
            counts: table.into_inner(),
        }))
    }
}

/// Serve `WordCountService` on an already bound listener until `shutdown` fires
pub async fn serve_worker(
    listener: TcpListener,
    shutdown: CancellationToken,
) -> Result<(), tonic::transport::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("gRPC worker listening on {}", addr);
    }

    let service = WordCountServer::new(WordCountService)
        .max_decoding_message_size(MAX_MESSAGE_BYTES)
        .max_encoding_message_size(MAX_MESSAGE_BYTES);

    Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown.cancelled())
        .await?;

    tracing::info!("gRPC worker stopped");
    Ok(())
}
