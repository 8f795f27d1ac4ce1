//! Typed request and response models, one module per API resource.
//!
//! All wire JSON is camelCase; optional request fields are omitted from
//! the payload entirely when unset.

mod application;
mod authentication;
mod common;
mod endpoint;
mod integration;
mod message;
mod message_attempt;
mod stream;

pub use application::{ApplicationIn, ApplicationOut, ApplicationPatch};
pub use authentication::{
    AppPortalAccessIn, AppPortalAccessOut, ApplicationTokenExpireIn, DashboardAccessOut,
};
pub use common::{ListResponse, MaybeSet, Ordering};
pub use endpoint::{
    EndpointHeadersIn, EndpointHeadersOut, EndpointIn, EndpointOut, EndpointSecretOut,
    EndpointSecretRotateIn, EndpointUpdate,
};
pub use integration::{IntegrationIn, IntegrationKeyOut, IntegrationOut, IntegrationUpdate};
pub use message::{MessageIn, MessageOut};
pub use message_attempt::{AttemptTriggerType, MessageAttemptOut, MessageStatus};
pub use stream::{
    StreamEventTypeIn, StreamEventTypeOut, StreamEventTypePatch, StreamIn, StreamOut, StreamPatch,
};
