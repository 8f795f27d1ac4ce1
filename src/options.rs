use std::time::Duration;

/// Configures HTTP timeout, redirect, TLS and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Wait duration before each retry, one entry per retry attempt.
    ///
    /// Retries apply to 5xx responses only; exhausting the schedule stops
    /// retrying regardless of status. At most [`ClientOptions::MAX_RETRIES`]
    /// entries are accepted.
    pub retry_schedule: Vec<Duration>,
    /// Whether redirects are followed automatically.
    pub follow_redirects: bool,
    /// Disables TLS certificate verification. Intended for tests against
    /// self-signed local servers only.
    pub danger_accept_invalid_certs: bool,
}

impl ClientOptions {
    /// Upper bound on the number of retry schedule entries.
    pub const MAX_RETRIES: usize = 5;

    /// Replaces the retry schedule.
    pub fn with_retry_schedule(mut self, schedule: impl Into<Vec<Duration>>) -> Self {
        self.retry_schedule = schedule.into();
        self
    }

    /// Replaces the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            retry_schedule: vec![
                Duration::from_millis(50),
                Duration::from_millis(100),
                Duration::from_millis(200),
            ],
            follow_redirects: true,
            danger_accept_invalid_certs: false,
        }
    }
}
