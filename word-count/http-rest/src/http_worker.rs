use crate::wire::{WordCountReply, WordCountRequest, COUNT_WORDS_PATH, MAX_BODY_BYTES};
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use word_count_core::count_words;

/// Router exposing `POST /count_words`
pub fn router() -> Router {
    Router::new()
        .route(COUNT_WORDS_PATH, post(count_words_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

async fn count_words_handler(
    Json(request): Json<WordCountRequest>,
) -> Result<Json<WordCountReply>, (StatusCode, String)> {
    let chunk = request.text_chunk;
    let counts = tokio::task::spawn_blocking(move || count_words(&chunk))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("counting task failed: {}", e),
            )
        })?;

    Ok(Json(WordCountReply { counts }))
}

/// Serve the router on an already bound listener until `shutdown` fires
pub async fn serve_worker(listener: TcpListener, shutdown: CancellationToken) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("HTTP worker listening on {}", addr);

    axum::serve(listener, router())
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
        })
        .await?;

    tracing::info!("HTTP worker stopped");
    Ok(())
}
