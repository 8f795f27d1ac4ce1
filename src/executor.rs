use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{operation::Operation, ClientOptions, Error, Result};

/// Carries a fresh unique value on every individual attempt.
pub(crate) const REQUEST_ID_HEADER: &str = "hookrelay-req-id";
/// Carries the 0-based retry index on retried attempts only.
pub(crate) const RETRY_COUNT_HEADER: &str = "hookrelay-retry-count";
/// Caller-supplied idempotency key, passed through unchanged.
pub(crate) const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

const USER_AGENT: &str = concat!("hookrelay-libs/", env!("CARGO_PKG_VERSION"), "/rust");

/// Shared request executor: expands an [`Operation`] into an HTTP request,
/// retries 5xx responses along the configured schedule and classifies the
/// terminal response.
pub(crate) struct Executor {
    http: reqwest::Client,
    base_url: String,
    authorization: String,
    options: ClientOptions,
}

impl Executor {
    pub fn new(
        http: reqwest::Client,
        base_url: String,
        authorization: String,
        options: ClientOptions,
    ) -> Self {
        Self {
            http,
            base_url,
            authorization,
            options,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Executes the operation and decodes the terminal body as `T`.
    pub async fn send<T: DeserializeOwned>(&self, op: Operation) -> Result<T> {
        let (status, body) = self.send_terminal(&op).await?;
        classify(&op, status, body)
    }

    /// Executes an operation whose success responses carry no body.
    pub async fn send_no_content(&self, op: Operation) -> Result<()> {
        let (status, body) = self.send_terminal(&op).await?;
        classify_no_content(&op, status, body)
    }

    /// Issues attempts until a status < 500 is observed or the retry
    /// schedule is exhausted, whichever comes first. Transport failures
    /// propagate immediately and consume no schedule entries.
    async fn send_terminal(&self, op: &Operation) -> Result<(u16, Vec<u8>)> {
        let url = format!("{}{}", self.base_url, op.expand_path()?);
        let mut attempt = 0usize;
        loop {
            let request = build_request(&self.http, op, &url, &self.authorization, attempt, &self.options)?;
            let response = request.send().await.map_err(Error::Transport)?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(Error::Transport)?.to_vec();

            if status >= 500 {
                if let Some(wait) = self.options.retry_schedule.get(attempt).copied() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%url, status, retry = attempt, "retrying after {:?}", wait);
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    continue;
                }
            }

            return Ok((status, body));
        }
    }
}

/// Blocking counterpart of [`Executor`], identical other than the
/// thread-blocking sleep and transport.
#[cfg(feature = "blocking")]
pub(crate) struct BlockingExecutor {
    http: reqwest::blocking::Client,
    base_url: String,
    authorization: String,
    options: ClientOptions,
}

#[cfg(feature = "blocking")]
impl BlockingExecutor {
    pub fn new(
        http: reqwest::blocking::Client,
        base_url: String,
        authorization: String,
        options: ClientOptions,
    ) -> Self {
        Self {
            http,
            base_url,
            authorization,
            options,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn send<T: DeserializeOwned>(&self, op: Operation) -> Result<T> {
        let (status, body) = self.send_terminal(&op)?;
        classify(&op, status, body)
    }

    pub fn send_no_content(&self, op: Operation) -> Result<()> {
        let (status, body) = self.send_terminal(&op)?;
        classify_no_content(&op, status, body)
    }

    fn send_terminal(&self, op: &Operation) -> Result<(u16, Vec<u8>)> {
        let url = format!("{}{}", self.base_url, op.expand_path()?);
        let mut attempt = 0usize;
        loop {
            let headers = attempt_headers(&self.authorization, op, attempt)?;
            let mut request = self
                .http
                .request(op.method.clone(), &url)
                .headers(headers)
                .timeout(self.options.timeout);
            if !op.query_params.is_empty() {
                request = request.query(&op.query_params);
            }
            if let Some(body) = &op.body {
                request = request.body(body.clone());
            }

            let response = request.send().map_err(Error::Transport)?;
            let status = response.status().as_u16();
            let body = response.bytes().map_err(Error::Transport)?.to_vec();

            if status >= 500 {
                if let Some(wait) = self.options.retry_schedule.get(attempt).copied() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%url, status, retry = attempt, "retrying after {:?}", wait);
                    std::thread::sleep(wait);
                    attempt += 1;
                    continue;
                }
            }

            return Ok((status, body));
        }
    }
}

fn build_request(
    http: &reqwest::Client,
    op: &Operation,
    url: &str,
    authorization: &str,
    attempt: usize,
    options: &ClientOptions,
) -> Result<reqwest::RequestBuilder> {
    let headers = attempt_headers(authorization, op, attempt)?;
    let mut request = http
        .request(op.method.clone(), url)
        .headers(headers)
        .timeout(options.timeout);
    if !op.query_params.is_empty() {
        request = request.query(&op.query_params);
    }
    if let Some(body) = &op.body {
        request = request.body(body.clone());
    }
    Ok(request)
}

/// Builds the full header set for one attempt: client defaults first, then
/// per-operation headers (which win on conflict), then the per-attempt
/// request id and retry counter.
fn attempt_headers(authorization: &str, op: &Operation, attempt: usize) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(authorization)
            .map_err(|_| Error::Config("authorization value contains invalid characters".to_owned()))?,
    );
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    if op.body.is_some() {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    for (name, value) in &op.header_params {
        let value = HeaderValue::from_str(value).map_err(|_| {
            Error::MalformedOperation(format!("invalid value for header '{name}'"))
        })?;
        headers.insert(HeaderName::from_static(name), value);
    }

    // A fresh id per attempt; retries never reuse the previous one.
    let request_id = Uuid::new_v4().simple().to_string();
    headers.insert(
        HeaderName::from_static(REQUEST_ID_HEADER),
        HeaderValue::from_str(&request_id)
            .map_err(|_| Error::Config("generated request id is not a valid header value".to_owned()))?,
    );
    if attempt > 0 {
        headers.insert(
            HeaderName::from_static(RETRY_COUNT_HEADER),
            HeaderValue::from((attempt - 1) as u64),
        );
    }
    Ok(headers)
}

fn classify<T: DeserializeOwned>(op: &Operation, status: u16, body: Vec<u8>) -> Result<T> {
    if op.success.contains(&status) {
        return serde_json::from_slice(&body).map_err(|err| {
            Error::Decode(format!("invalid response body for status {status}: {err}"))
        });
    }
    Err(classify_error(status, body))
}

fn classify_no_content(op: &Operation, status: u16, body: Vec<u8>) -> Result<()> {
    if op.success.contains(&status) {
        return Ok(());
    }
    Err(classify_error(status, body))
}

/// Maps a terminal non-success status to the error taxonomy. Retries never
/// apply here; they are exhausted before classification begins.
fn classify_error(status: u16, body: Vec<u8>) -> Error {
    match status {
        400 | 401 | 403 | 404 | 409 | 429 => match serde_json::from_slice(&body) {
            Ok(parsed) => Error::Http {
                status,
                body: parsed,
            },
            Err(err) => Error::Decode(format!("invalid error payload for status {status}: {err}")),
        },
        422 => match serde_json::from_slice(&body) {
            Ok(parsed) => Error::Validation {
                status,
                body: parsed,
            },
            Err(err) => Error::Decode(format!("invalid validation payload for status 422: {err}")),
        },
        _ => Error::UnexpectedStatus { status, body },
    }
}
