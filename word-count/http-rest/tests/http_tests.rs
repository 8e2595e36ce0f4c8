use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use word_count_core::{count_words, Coordinator, DispatchError, WorkerEndpoint};
use word_count_http_rest::{serve_worker, HttpEndpoint};

struct RunningWorker {
    base_url: String,
    shutdown: CancellationToken,
    handle: JoinHandle<std::io::Result<()>>,
}

impl RunningWorker {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(serve_worker(listener, shutdown.clone()));
        Self {
            base_url,
            shutdown,
            handle,
        }
    }

    async fn stop(self) {
        self.shutdown.cancel();
        self.handle.await.unwrap().unwrap();
    }
}

/// Serve a hand-written router in place of a real worker
async fn serve_fake(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    base_url
}

async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base_url
}

// ============================================================
// worker route
// ============================================================

#[tokio::test]
async fn test_route_speaks_the_json_contract() {
    let worker = RunningWorker::start().await;

    let reply: serde_json::Value = reqwest::Client::new()
        .post(format!("{}/count_words", worker.base_url))
        .json(&serde_json::json!({ "text_chunk": "All the world's a stage\nall" }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(reply["counts"]["all"], 2);
    assert_eq!(reply["counts"]["world"], 1);
    assert_eq!(reply["counts"]["s"], 1);

    worker.stop().await;
}

#[tokio::test]
async fn test_route_rejects_missing_field() {
    let worker = RunningWorker::start().await;

    let response = reqwest::Client::new()
        .post(format!("{}/count_words", worker.base_url))
        .json(&serde_json::json!({ "chunk": "wrong field" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    worker.stop().await;
}

// ============================================================
// endpoint
// ============================================================

#[tokio::test]
async fn test_endpoint_counts_over_http() {
    let worker = RunningWorker::start().await;
    let endpoint = HttpEndpoint::new(worker.base_url.clone(), reqwest::Client::new());

    let table = endpoint
        .submit_chunk("Now is the winter\nof our discontent".to_string())
        .await
        .unwrap();

    assert_eq!(table, count_words("now is the winter of our discontent"));
    assert_eq!(endpoint.identity(), worker.base_url);

    worker.stop().await;
}

#[tokio::test]
async fn test_endpoint_adds_scheme_and_trims_slash() {
    let worker = RunningWorker::start().await;
    let bare = format!("{}/", worker.base_url.trim_start_matches("http://"));
    let endpoint = HttpEndpoint::new(bare, reqwest::Client::new());

    assert_eq!(endpoint.identity(), worker.base_url);
    let table = endpoint.submit_chunk("a a".to_string()).await.unwrap();
    assert_eq!(table.get("a"), 2);

    worker.stop().await;
}

#[tokio::test]
async fn test_error_status_is_a_status_failure() {
    let base_url = serve_fake(Router::new().route(
        "/count_words",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "overloaded") }),
    ))
    .await;
    let endpoint = HttpEndpoint::new(base_url, reqwest::Client::new());

    let result = endpoint.submit_chunk("text".to_string()).await;

    match result {
        Err(DispatchError::Status(message)) => assert!(message.contains("500")),
        other => panic!("expected a status failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_a_malformed_failure() {
    let base_url = serve_fake(Router::new().route(
        "/count_words",
        post(|| async { "{\"totals\": 3}" }),
    ))
    .await;
    let endpoint = HttpEndpoint::new(base_url, reqwest::Client::new());

    let result = endpoint.submit_chunk("text".to_string()).await;

    assert!(matches!(result, Err(DispatchError::Malformed(_))));
}

#[tokio::test]
async fn test_unreachable_worker_is_a_connect_failure() {
    let endpoint = HttpEndpoint::new(closed_base_url().await, reqwest::Client::new());

    let result = endpoint.submit_chunk("hello".to_string()).await;

    assert!(matches!(result, Err(DispatchError::Connect(_))));
}

// ============================================================
// coordinator over HTTP
// ============================================================

#[tokio::test]
async fn test_coordinator_tolerates_one_failing_http_worker() {
    let healthy = RunningWorker::start().await;
    let broken = serve_fake(Router::new().route(
        "/count_words",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;
    let client = reqwest::Client::new();
    let workers: Vec<Arc<dyn WorkerEndpoint>> = vec![
        Arc::new(HttpEndpoint::new(healthy.base_url.clone(), client.clone())) as Arc<dyn WorkerEndpoint>,
        Arc::new(HttpEndpoint::new(broken.clone(), client.clone())) as Arc<dyn WorkerEndpoint>,
    ];

    let result = Coordinator::default()
        .count_distributed("first half\nsecond half", &workers)
        .await
        .unwrap();

    assert_eq!(result.table, count_words("first half"));
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].worker, broken);

    healthy.stop().await;
}
