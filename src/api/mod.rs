//! Per-resource API surfaces.
//!
//! Each resource module pairs a lightweight accessor struct (borrowed from
//! [`crate::Client`]) with the operation descriptors its endpoints feed to
//! the shared executor. The blocking surface reuses the same descriptors.

pub(crate) mod application;
pub(crate) mod authentication;
pub(crate) mod endpoint;
pub(crate) mod integration;
pub(crate) mod message;
pub(crate) mod message_attempt;
pub(crate) mod stream;

pub use application::{Application, ApplicationCreateOptions, ApplicationListOptions};
pub use authentication::{Authentication, AuthenticationOptions};
pub use endpoint::{
    Endpoint, EndpointCreateOptions, EndpointListOptions, EndpointRotateSecretOptions,
};
pub use integration::{
    Integration, IntegrationCreateOptions, IntegrationListOptions, IntegrationRotateKeyOptions,
};
pub use message::{Message, MessageCreateOptions, MessageListOptions};
pub use message_attempt::{
    MessageAttempt, MessageAttemptListOptions, MessageAttemptResendOptions,
};
pub use stream::{Stream, StreamCreateOptions, StreamListOptions};
