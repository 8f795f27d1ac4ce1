use serde::{Deserialize, Serialize};

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or request execution error from `reqwest`.
    ///
    /// Transport failures surface unmodified and are never retried.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// The operation descriptor could not be turned into a request,
    /// e.g. a path template placeholder was left unresolved.
    #[error("malformed operation: {0}")]
    MalformedOperation(String),
    /// Client construction or option validation failure.
    #[error("configuration error: {0}")]
    Config(String),
    /// Declared 4xx status with a decoded error payload.
    #[error("http error {status}: {}", .body.detail)]
    Http {
        /// HTTP status code of the terminal response.
        status: u16,
        /// Structured error payload returned by the API.
        body: ApiErrorBody,
    },
    /// 422 response carrying field-level validation detail.
    #[error("validation error ({} issues)", .body.detail.len())]
    Validation {
        /// HTTP status code of the terminal response, always 422.
        status: u16,
        /// Structured validation payload returned by the API.
        body: ValidationErrorBody,
    },
    /// Any status outside the operation's declared set, kept as raw bytes
    /// since the payload shape is unknown.
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16, body: Vec<u8> },
    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl Error {
    /// Returns the HTTP status of the terminal response, if the error
    /// originated from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. }
            | Self::Validation { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Generic error payload returned with 400, 401, 403, 404, 409 and 429.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error description.
    pub detail: String,
}

/// Validation payload returned with 422.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    #[serde(default)]
    pub detail: Vec<ValidationIssue>,
}

/// One field-level validation failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Location of the failing field, e.g. `["body", "url"]`.
    pub loc: Vec<serde_json::Value>,
    /// Human-readable description of the failure.
    pub msg: String,
    /// Validation error kind identifier.
    #[serde(rename = "type")]
    pub kind: String,
}
