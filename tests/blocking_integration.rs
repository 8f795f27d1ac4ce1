//! Exercises the thread-blocking surface against the same mock server the
//! async tests use. Compiled only with `--features blocking`.
#![cfg(feature = "blocking")]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc, Mutex,
    },
    time::Duration,
};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use hookrelay_http::{
    api::ApplicationListOptions, blocking::Client, ClientOptions, Error,
};
use serde_json::{json, Value as JsonValue};

#[derive(Clone)]
struct MockState {
    responses: Arc<Mutex<VecDeque<(StatusCode, JsonValue)>>>,
    hits: Arc<AtomicUsize>,
}

async fn api_handler(State(state): State<MockState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let (status, body) = state
        .responses
        .lock()
        .expect("response queue mutex must not be poisoned")
        .pop_front()
        .unwrap_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "no mock response available"}),
        ));
    (status, Json(body))
}

struct TestServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

/// Runs the axum server on a dedicated thread with its own runtime so the
/// blocking client can be driven from the test thread.
fn spawn_server(responses: Vec<(StatusCode, JsonValue)>) -> anyhow::Result<TestServer> {
    let state = MockState {
        responses: Arc::new(Mutex::new(responses.into())),
        hits: Arc::new(AtomicUsize::new(0)),
    };
    let hits = state.hits.clone();
    let (addr_tx, addr_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("must build runtime");
        runtime.block_on(async move {
            let app = Router::new().fallback(api_handler).with_state(state);
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("must bind test listener");
            let address = listener.local_addr().expect("must have local addr");
            addr_tx.send(address).expect("must report address");
            axum::serve(listener, app)
                .await
                .expect("mock server must run");
        });
    });

    let address = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .context("server thread must report its address")?;
    Ok(TestServer {
        base_url: format!("http://{address}"),
        hits,
    })
}

fn application_list_body() -> JsonValue {
    json!({
        "data": [{
            "createdAt": "2024-03-01T09:30:00Z",
            "id": "app_42",
            "metadata": {},
            "name": "x",
            "updatedAt": "2024-03-01T09:30:00Z"
        }],
        "done": true
    })
}

#[test]
fn blocking_list_decodes_response() -> anyhow::Result<()> {
    let server = spawn_server(vec![(StatusCode::OK, application_list_body())])?;
    let relay = Client::with_server_url("test-token", server.base_url.clone());

    let page = relay
        .application()
        .list(ApplicationListOptions::default())
        .expect("list must succeed");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "app_42");
    assert!(page.done);
    assert_eq!(server.hits.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn blocking_retries_server_errors_along_schedule() -> anyhow::Result<()> {
    let server = spawn_server(vec![
        (StatusCode::SERVICE_UNAVAILABLE, json!({"error": "down"})),
        (StatusCode::OK, application_list_body()),
    ])?;
    let options =
        ClientOptions::default().with_retry_schedule(vec![Duration::from_millis(1); 2]);
    let relay = Client::with_server_url("test-token", server.base_url.clone())
        .with_options(options)
        .expect("options must be valid");

    let page = relay
        .application()
        .list(ApplicationListOptions::default())
        .expect("list must succeed after retry");

    assert_eq!(page.data.len(), 1);
    assert_eq!(server.hits.load(Ordering::SeqCst), 2);
    Ok(())
}

#[test]
fn blocking_surfaces_http_error_for_terminal_4xx() -> anyhow::Result<()> {
    let server = spawn_server(vec![(
        StatusCode::NOT_FOUND,
        json!({"code": "not_found", "detail": "no such application"}),
    )])?;
    let relay = Client::with_server_url("test-token", server.base_url.clone());

    let err = relay
        .application()
        .get("app_missing")
        .expect_err("get must fail");

    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body.code, "not_found");
        }
        other => panic!("expected http error, got {other:?}"),
    }
    assert_eq!(server.hits.load(Ordering::SeqCst), 1);
    Ok(())
}
