use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use hookrelay_http::{
    api::{ApplicationCreateOptions, ApplicationListOptions, MessageListOptions},
    models::{ApplicationIn, MessageStatus},
    Client, ClientOptions, Error,
};
use serde_json::{json, Value as JsonValue};

#[derive(Clone)]
struct MockResponse {
    status: StatusCode,
    body: JsonValue,
    delay: Duration,
}

impl MockResponse {
    fn json(status: StatusCode, body: JsonValue) -> Self {
        Self {
            status,
            body,
            delay: Duration::from_millis(0),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Debug)]
struct RecordedRequest {
    method: String,
    path: String,
    query: Option<String>,
    headers: Vec<(String, String)>,
    body: String,
}

impl RecordedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone)]
struct MockState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    hits: Arc<AtomicUsize>,
}

async fn api_handler(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> axum::response::Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .requests
        .lock()
        .expect("request log mutex must not be poisoned")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_owned(),
            query: uri.query().map(ToOwned::to_owned),
            headers: headers
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_owned(),
                        value.to_str().unwrap_or_default().to_owned(),
                    )
                })
                .collect(),
            body,
        });

    let response = {
        let mut queue = state
            .responses
            .lock()
            .expect("response queue mutex must not be poisoned");
        queue.pop_front().unwrap_or_else(|| {
            MockResponse::json(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "no mock response available"}),
            )
        })
    };

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    if response.status == StatusCode::NO_CONTENT {
        return response.status.into_response();
    }
    (response.status, Json(response.body)).into_response()
}

struct TestServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    hits: Arc<AtomicUsize>,
    task: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl TestServer {
    fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("request log mutex must not be poisoned")
            .clone()
    }
}

async fn spawn_server(responses: Vec<MockResponse>) -> TestServer {
    let state = MockState {
        responses: Arc::new(Mutex::new(responses.into())),
        requests: Arc::new(Mutex::new(Vec::new())),
        hits: Arc::new(AtomicUsize::new(0)),
    };

    let app = Router::new().fallback(api_handler).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind test listener");
    let address = listener.local_addr().expect("must have local addr");
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock server must run");
    });

    TestServer {
        base_url: format!("http://{address}"),
        requests: state.requests,
        hits: state.hits,
        task,
    }
}

fn client_for(server: &TestServer) -> Client {
    Client::with_server_url("test-token", server.base_url.clone())
}

fn client_with_schedule(server: &TestServer, retries: usize) -> Client {
    let options = ClientOptions::default()
        .with_retry_schedule(vec![Duration::from_millis(1); retries])
        .with_timeout(Duration::from_secs(1));
    client_for(server)
        .with_options(options)
        .expect("options must be valid")
}

fn application_body(id: &str, name: &str) -> JsonValue {
    json!({
        "createdAt": "2024-03-01T09:30:00Z",
        "id": id,
        "metadata": {},
        "name": name,
        "updatedAt": "2024-03-01T09:30:00Z"
    })
}

fn application_list_body() -> JsonValue {
    json!({
        "data": [application_body("app_42", "x")],
        "done": true
    })
}

#[tokio::test]
async fn update_application_round_trips_url_method_and_body() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        application_body("app_42", "x"),
    )])
    .await;
    let relay = client_for(&server);

    let app = relay
        .application()
        .update(
            "app_42",
            ApplicationIn {
                name: "x".to_owned(),
                ..Default::default()
            },
        )
        .await
        .expect("update must succeed");

    assert_eq!(app.id, "app_42");
    assert_eq!(app.name, "x");

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, "PUT");
    assert_eq!(recorded[0].path, "/api/v1/app/app_42");
    assert_eq!(recorded[0].body, r#"{"name":"x"}"#);
    assert_eq!(
        recorded[0].header("content-type"),
        Some("application/json")
    );
}

#[tokio::test]
async fn create_application_sends_idempotency_key_and_query_flag() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::CREATED,
        application_body("app_42", "x"),
    )])
    .await;
    let relay = client_for(&server);

    relay
        .application()
        .create(
            ApplicationIn {
                name: "x".to_owned(),
                ..Default::default()
            },
            ApplicationCreateOptions {
                get_if_exists: Some(true),
                idempotency_key: Some("idk_1".to_owned()),
            },
        )
        .await
        .expect("create must succeed");

    let recorded = server.recorded();
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].query.as_deref(), Some("get_if_exists=true"));
    assert_eq!(recorded[0].header("idempotency-key"), Some("idk_1"));
}

#[tokio::test]
async fn absent_query_and_header_params_are_not_sent() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        application_list_body(),
    )])
    .await;
    let relay = client_for(&server);

    relay
        .application()
        .list(ApplicationListOptions::default())
        .await
        .expect("list must succeed");

    let recorded = server.recorded();
    assert_eq!(recorded[0].query, None);
    assert_eq!(recorded[0].header("idempotency-key"), None);
    assert_eq!(recorded[0].header("hookrelay-retry-count"), None);
}

#[tokio::test]
async fn bearer_prefix_and_auth_header_are_attached() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        application_list_body(),
    )])
    .await;
    let relay = client_for(&server);

    relay
        .application()
        .list(ApplicationListOptions::default())
        .await
        .expect("list must succeed");

    let recorded = server.recorded();
    assert_eq!(recorded[0].header("authorization"), Some("Bearer test-token"));
}

#[tokio::test]
async fn recovers_after_two_consecutive_server_errors() {
    let server = spawn_server(vec![
        MockResponse::json(StatusCode::SERVICE_UNAVAILABLE, json!({"error": "down"})),
        MockResponse::json(StatusCode::SERVICE_UNAVAILABLE, json!({"error": "down"})),
        MockResponse::json(StatusCode::OK, application_body("app_42", "x")),
    ])
    .await;
    let relay = client_with_schedule(&server, 2);

    let app = relay
        .application()
        .get("app_42")
        .await
        .expect("request must succeed after retries");

    assert_eq!(app.id, "app_42");
    assert_eq!(server.hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn exhausted_retry_schedule_surfaces_unexpected_status() {
    let server = spawn_server(vec![
        MockResponse::json(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"}));
        3
    ])
    .await;
    let relay = client_with_schedule(&server, 2);

    let err = relay
        .application()
        .get("app_42")
        .await
        .expect_err("request must fail");

    assert_eq!(server.hits.load(Ordering::SeqCst), 3);
    match err {
        Error::UnexpectedStatus { status, .. } => assert_eq!(status, 500),
        other => panic!("expected unexpected status, got {other:?}"),
    }
}

#[tokio::test]
async fn each_attempt_carries_fresh_request_id_and_retry_count() {
    let server = spawn_server(vec![
        MockResponse::json(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})),
        MockResponse::json(StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})),
        MockResponse::json(StatusCode::OK, application_body("app_42", "x")),
    ])
    .await;
    let relay = client_with_schedule(&server, 2);

    relay
        .application()
        .get("app_42")
        .await
        .expect("request must succeed after retries");

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 3);

    let ids: Vec<&str> = recorded
        .iter()
        .map(|request| request.header("hookrelay-req-id").expect("must carry id"))
        .collect();
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);

    assert_eq!(recorded[0].header("hookrelay-retry-count"), None);
    assert_eq!(recorded[1].header("hookrelay-retry-count"), Some("0"));
    assert_eq!(recorded[2].header("hookrelay-retry-count"), Some("1"));
}

#[tokio::test]
async fn declared_4xx_statuses_yield_http_error() {
    let statuses = [
        StatusCode::BAD_REQUEST,
        StatusCode::UNAUTHORIZED,
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
        StatusCode::CONFLICT,
        StatusCode::TOO_MANY_REQUESTS,
    ];
    let responses = statuses
        .iter()
        .map(|status| {
            MockResponse::json(*status, json!({"code": "oops", "detail": "broken"}))
        })
        .collect();
    let server = spawn_server(responses).await;
    let relay = client_for(&server);

    for status in statuses {
        let err = relay
            .application()
            .get("app_42")
            .await
            .expect_err("request must fail");
        match err {
            Error::Http { status: got, body } => {
                assert_eq!(got, status.as_u16());
                assert_eq!(body.code, "oops");
                assert_eq!(body.detail, "broken");
            }
            other => panic!("expected http error for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn status_422_yields_validation_error_not_http_error() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({
            "detail": [
                {"loc": ["body", "url"], "msg": "invalid or missing url", "type": "value_error.url"}
            ]
        }),
    )])
    .await;
    let relay = client_for(&server);

    let err = relay
        .application()
        .get("app_42")
        .await
        .expect_err("request must fail");

    match err {
        Error::Validation { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body.detail.len(), 1);
            assert_eq!(body.detail[0].msg, "invalid or missing url");
            assert_eq!(body.detail[0].kind, "value_error.url");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn undeclared_success_status_is_unexpected() {
    // get declares only 200; a 202 must not be decoded by range.
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::ACCEPTED,
        application_body("app_42", "x"),
    )])
    .await;
    let relay = client_for(&server);

    let err = relay
        .application()
        .get("app_42")
        .await
        .expect_err("request must fail");

    match err {
        Error::UnexpectedStatus { status, .. } => assert_eq!(status, 202),
        other => panic!("expected unexpected status, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_application_accepts_no_content() {
    let server = spawn_server(vec![MockResponse::json(StatusCode::NO_CONTENT, json!(null))]).await;
    let relay = client_for(&server);

    relay
        .application()
        .delete("app_42")
        .await
        .expect("delete must succeed");

    let recorded = server.recorded();
    assert_eq!(recorded[0].method, "DELETE");
    assert_eq!(recorded[0].path, "/api/v1/app/app_42");
}

#[tokio::test]
async fn message_list_serializes_filters_into_query() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        json!({"data": [], "done": true}),
    )])
    .await;
    let relay = client_for(&server);

    relay
        .message()
        .list(
            "app_42",
            MessageListOptions {
                limit: Some(25),
                channel: Some("project_x".to_owned()),
                ..Default::default()
            },
        )
        .await
        .expect("list must succeed");

    let recorded = server.recorded();
    assert_eq!(recorded[0].path, "/api/v1/app/app_42/msg");
    assert_eq!(
        recorded[0].query.as_deref(),
        Some("limit=25&channel=project_x")
    );
}

#[tokio::test]
async fn attempt_status_filter_uses_integer_code() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        json!({"data": [], "done": true}),
    )])
    .await;
    let relay = client_for(&server);

    relay
        .message_attempt()
        .list_by_msg(
            "app_42",
            "msg_7",
            hookrelay_http::api::MessageAttemptListOptions {
                status: Some(MessageStatus::Fail),
                ..Default::default()
            },
        )
        .await
        .expect("list must succeed");

    let recorded = server.recorded();
    assert_eq!(recorded[0].path, "/api/v1/app/app_42/attempt/msg/msg_7");
    assert_eq!(recorded[0].query.as_deref(), Some("status=2"));
}

#[tokio::test]
async fn request_timeout_surfaces_transport_error_without_retry() {
    let server = spawn_server(vec![MockResponse::json(
        StatusCode::OK,
        application_body("app_42", "x"),
    )
    .with_delay(Duration::from_millis(150))])
    .await;
    let options = ClientOptions::default()
        .with_timeout(Duration::from_millis(20))
        .with_retry_schedule(vec![Duration::from_millis(1); 2]);
    let relay = client_for(&server)
        .with_options(options)
        .expect("options must be valid");

    let err = relay
        .application()
        .get("app_42")
        .await
        .expect_err("request must time out");

    match err {
        Error::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("expected transport timeout error, got {other:?}"),
    }
    assert_eq!(server.hits.load(Ordering::SeqCst), 1);
}
