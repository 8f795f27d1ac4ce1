//! `hookrelay-http` is an async HTTP client for the HookRelay webhook
//! management API.
//!
//! A [`Client`] exposes one accessor per API resource:
//! - [`Client::application`]
//! - [`Client::endpoint`]
//! - [`Client::message`]
//! - [`Client::message_attempt`]
//! - [`Client::authentication`]
//! - [`Client::integration`]
//! - [`Client::stream`]
//!
//! Server-side failures (5xx) are retried along a configurable schedule;
//! terminal responses are decoded into typed models or typed errors.
//! A thread-blocking surface is available behind the `blocking` feature.
//!
//! # Example
//!
//! ```no_run
//! use hookrelay_http::{models::ApplicationIn, Client};
//!
//! # async fn run() -> hookrelay_http::Result<()> {
//! let relay = Client::new("tok_abc123.eu");
//! let app = relay
//!     .application()
//!     .update(
//!         "app_42",
//!         ApplicationIn {
//!             name: "x".to_owned(),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! println!("updated {}", app.id);
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod error;
mod executor;
pub mod models;
mod operation;
mod options;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::{server_url_from_token, Client};
pub use error::{ApiErrorBody, Error, ValidationErrorBody, ValidationIssue};
pub use options::ClientOptions;

pub type Result<T> = std::result::Result<T, Error>;
