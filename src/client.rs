use std::fmt;

use crate::{
    api::{
        Application, Authentication, Endpoint, Integration, Message, MessageAttempt, Stream,
    },
    executor::Executor,
    ClientOptions, Error, Result,
};

/// Derives the default server URL from the region suffix of an auth token.
///
/// Example: `"tok_abc.eu"` → `"https://api.eu.hookrelay.com"`
pub fn server_url_from_token(token: &str) -> String {
    let region = token.rsplit('.').next().unwrap_or("");
    match region {
        "us" | "eu" | "in" => format!("https://api.{region}.hookrelay.com"),
        _ => "https://api.hookrelay.com".to_owned(),
    }
}

/// HTTP client for the HookRelay webhook management API.
///
/// One `Client` is shared by all resource APIs; calls are independent of
/// each other and the configuration is read-only once constructed.
pub struct Client {
    executor: Executor,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("server_url", &self.executor.base_url())
            .field("authorization", &"<redacted>")
            .field("options", self.executor.options())
            .finish()
    }
}

impl Client {
    /// Creates a client from a bearer token, deriving the server URL from
    /// the token's region suffix.
    ///
    /// If the token is missing the `Bearer ` prefix, it is added
    /// automatically.
    pub fn new(token: impl AsRef<str>) -> Self {
        let server_url = server_url_from_token(token.as_ref());
        Self::with_server_url(token, server_url)
    }

    /// Creates a client against an explicit server URL.
    pub fn with_server_url(token: impl AsRef<str>, server_url: impl Into<String>) -> Self {
        let authorization = normalize_bearer_authorization(token.as_ref());
        let base_url = normalize_server_url(&server_url.into());
        Self {
            executor: Executor::new(
                reqwest::Client::new(),
                base_url,
                authorization,
                ClientOptions::default(),
            ),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `HOOKRELAY_AUTH_TOKEN` — access token (Bearer prefix optional)
    /// - `HOOKRELAY_SERVER_URL` — optional server URL override; when unset
    ///   the URL is derived from the token's region suffix
    ///
    /// Returns an error if the token is missing or empty.
    pub fn from_env() -> std::result::Result<Self, String> {
        let token = std::env::var("HOOKRELAY_AUTH_TOKEN")
            .map_err(|_| "missing HOOKRELAY_AUTH_TOKEN environment variable".to_owned())?;
        if token.trim().is_empty() {
            return Err("HOOKRELAY_AUTH_TOKEN is set but empty".to_owned());
        }
        match std::env::var("HOOKRELAY_SERVER_URL") {
            Ok(url) if !url.trim().is_empty() => Ok(Self::with_server_url(token, url)),
            _ => Ok(Self::new(token)),
        }
    }

    /// Applies client options such as timeout, redirect policy and the
    /// retry schedule, rebuilding the underlying HTTP client.
    pub fn with_options(self, options: ClientOptions) -> Result<Self> {
        validate_options(&options)?;
        let http = reqwest::Client::builder()
            .redirect(redirect_policy(options.follow_redirects))
            .danger_accept_invalid_certs(options.danger_accept_invalid_certs)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            executor: Executor::new(
                http,
                self.executor.base_url().to_owned(),
                self.executor.authorization().to_owned(),
                options,
            ),
        })
    }

    pub fn application(&self) -> Application<'_> {
        Application::new(self)
    }

    pub fn authentication(&self) -> Authentication<'_> {
        Authentication::new(self)
    }

    pub fn endpoint(&self) -> Endpoint<'_> {
        Endpoint::new(self)
    }

    pub fn integration(&self) -> Integration<'_> {
        Integration::new(self)
    }

    pub fn message(&self) -> Message<'_> {
        Message::new(self)
    }

    pub fn message_attempt(&self) -> MessageAttempt<'_> {
        MessageAttempt::new(self)
    }

    pub fn stream(&self) -> Stream<'_> {
        Stream::new(self)
    }

    pub(crate) fn executor(&self) -> &Executor {
        &self.executor
    }
}

pub(crate) fn validate_options(options: &ClientOptions) -> Result<()> {
    if options.retry_schedule.len() > ClientOptions::MAX_RETRIES {
        return Err(Error::Config(format!(
            "retry schedule must not exceed {} entries",
            ClientOptions::MAX_RETRIES
        )));
    }
    Ok(())
}

pub(crate) fn redirect_policy(follow: bool) -> reqwest::redirect::Policy {
    if follow {
        reqwest::redirect::Policy::default()
    } else {
        reqwest::redirect::Policy::none()
    }
}

pub(crate) fn normalize_server_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

pub(crate) fn normalize_bearer_authorization(token: &str) -> String {
    let trimmed = token.trim();
    let prefix = trimmed.get(..7);
    if prefix.is_some_and(|value| value.eq_ignore_ascii_case("bearer ")) {
        trimmed.to_owned()
    } else {
        format!("Bearer {trimmed}")
    }
}
