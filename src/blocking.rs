//! Blocking client surface, enabled with the `blocking` feature.
//!
//! Behaves identically to the async surface other than concurrency
//! mechanics: suspension between retries is a thread-blocking sleep and
//! every call runs to completion on the calling thread. Endpoint methods
//! share their operation descriptors with the async surface.

use std::fmt;

use crate::{
    api::{
        application, authentication, endpoint, integration, message, message_attempt, stream,
        ApplicationCreateOptions, ApplicationListOptions, AuthenticationOptions,
        EndpointCreateOptions, EndpointListOptions, EndpointRotateSecretOptions,
        IntegrationCreateOptions, IntegrationListOptions, IntegrationRotateKeyOptions,
        MessageAttemptListOptions, MessageAttemptResendOptions, MessageCreateOptions,
        MessageListOptions, StreamCreateOptions, StreamListOptions,
    },
    client::{
        normalize_bearer_authorization, normalize_server_url, redirect_policy, server_url_from_token,
        validate_options,
    },
    executor::BlockingExecutor,
    models::{
        AppPortalAccessIn, AppPortalAccessOut, ApplicationIn, ApplicationOut, ApplicationPatch,
        ApplicationTokenExpireIn, DashboardAccessOut, EndpointHeadersIn, EndpointHeadersOut,
        EndpointIn, EndpointOut, EndpointSecretOut, EndpointSecretRotateIn, EndpointUpdate,
        IntegrationIn, IntegrationKeyOut, IntegrationOut, IntegrationUpdate, ListResponse,
        MessageAttemptOut, MessageIn, MessageOut, StreamEventTypeIn, StreamEventTypeOut,
        StreamEventTypePatch, StreamIn, StreamOut, StreamPatch,
    },
    ClientOptions, Error, Result,
};

/// Blocking HTTP client for the HookRelay webhook management API.
///
/// Must not be used inside an async runtime; use [`crate::Client`] there.
pub struct Client {
    executor: BlockingExecutor,
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
    pub fn new(token: impl AsRef<str>) -> Self {
        let server_url = server_url_from_token(token.as_ref());
        Self::with_server_url(token, server_url)
    }

    /// Creates a client against an explicit server URL.
    pub fn with_server_url(token: impl AsRef<str>, server_url: impl Into<String>) -> Self {
        let authorization = normalize_bearer_authorization(token.as_ref());
        let base_url = normalize_server_url(&server_url.into());
        Self {
            executor: BlockingExecutor::new(
                reqwest::blocking::Client::new(),
                base_url,
                authorization,
                ClientOptions::default(),
            ),
        }
    }

    /// Applies client options, rebuilding the underlying HTTP client.
    pub fn with_options(self, options: ClientOptions) -> Result<Self> {
        validate_options(&options)?;
        let http = reqwest::blocking::Client::builder()
            .redirect(redirect_policy(options.follow_redirects))
            .danger_accept_invalid_certs(options.danger_accept_invalid_certs)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            executor: BlockingExecutor::new(
                http,
                self.executor.base_url().to_owned(),
                self.executor.authorization().to_owned(),
                options,
            ),
        })
    }

    pub fn application(&self) -> Application<'_> {
        Application { client: self }
    }

    pub fn authentication(&self) -> Authentication<'_> {
        Authentication { client: self }
    }

    pub fn endpoint(&self) -> Endpoint<'_> {
        Endpoint { client: self }
    }

    pub fn integration(&self) -> Integration<'_> {
        Integration { client: self }
    }

    pub fn message(&self) -> Message<'_> {
        Message { client: self }
    }

    pub fn message_attempt(&self) -> MessageAttempt<'_> {
        MessageAttempt { client: self }
    }

    pub fn stream(&self) -> Stream<'_> {
        Stream { client: self }
    }

    fn executor(&self) -> &BlockingExecutor {
        &self.executor
    }
}

pub struct Application<'a> {
    client: &'a Client,
}

impl Application<'_> {
    /// List of all the organization's applications.
    pub fn list(&self, options: ApplicationListOptions) -> Result<ListResponse<ApplicationOut>> {
        self.client
            .executor()
            .send(application::list_operation(&options))
    }

    /// Create a new application.
    pub fn create(
        &self,
        application_in: ApplicationIn,
        options: ApplicationCreateOptions,
    ) -> Result<ApplicationOut> {
        self.client
            .executor()
            .send(application::create_operation(&application_in, &options)?)
    }

    /// Get an application.
    pub fn get(&self, app_id: &str) -> Result<ApplicationOut> {
        self.client.executor().send(application::get_operation(app_id))
    }

    /// Update an application.
    pub fn update(&self, app_id: &str, application_in: ApplicationIn) -> Result<ApplicationOut> {
        self.client
            .executor()
            .send(application::update_operation(app_id, &application_in)?)
    }

    /// Partially update an application.
    pub fn patch(
        &self,
        app_id: &str,
        application_patch: ApplicationPatch,
    ) -> Result<ApplicationOut> {
        self.client
            .executor()
            .send(application::patch_operation(app_id, &application_patch)?)
    }

    /// Delete an application.
    pub fn delete(&self, app_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(application::delete_operation(app_id))
    }
}

pub struct Authentication<'a> {
    client: &'a Client,
}

impl Authentication<'_> {
    /// Get magic links (and authentication codes) for connecting your users
    /// to the Consumer Application Portal.
    pub fn app_portal_access(
        &self,
        app_id: &str,
        app_portal_access_in: AppPortalAccessIn,
        options: AuthenticationOptions,
    ) -> Result<AppPortalAccessOut> {
        self.client
            .executor()
            .send(authentication::app_portal_access_operation(
                app_id,
                &app_portal_access_in,
                &options,
            )?)
    }

    /// Expire all of the tokens associated with a specific application.
    pub fn expire_all(
        &self,
        app_id: &str,
        application_token_expire_in: ApplicationTokenExpireIn,
        options: AuthenticationOptions,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(authentication::expire_all_operation(
                app_id,
                &application_token_expire_in,
                &options,
            )?)
    }

    /// Get magic links (and authentication codes) for connecting your users
    /// to the Consumer Application Portal.
    #[deprecated(note = "Use `app_portal_access` instead.")]
    pub fn dashboard_access(
        &self,
        app_id: &str,
        options: AuthenticationOptions,
    ) -> Result<DashboardAccessOut> {
        self.client
            .executor()
            .send(authentication::dashboard_access_operation(app_id, &options))
    }

    /// Logout an app token.
    pub fn logout(&self, options: AuthenticationOptions) -> Result<()> {
        self.client
            .executor()
            .send_no_content(authentication::logout_operation(&options))
    }
}

pub struct Endpoint<'a> {
    client: &'a Client,
}

impl Endpoint<'_> {
    /// List the application's endpoints.
    pub fn list(
        &self,
        app_id: &str,
        options: EndpointListOptions,
    ) -> Result<ListResponse<EndpointOut>> {
        self.client
            .executor()
            .send(endpoint::list_operation(app_id, &options))
    }

    /// Create a new endpoint for the application.
    pub fn create(
        &self,
        app_id: &str,
        endpoint_in: EndpointIn,
        options: EndpointCreateOptions,
    ) -> Result<EndpointOut> {
        self.client
            .executor()
            .send(endpoint::create_operation(app_id, &endpoint_in, &options)?)
    }

    /// Get an endpoint.
    pub fn get(&self, app_id: &str, endpoint_id: &str) -> Result<EndpointOut> {
        self.client
            .executor()
            .send(endpoint::get_operation(app_id, endpoint_id))
    }

    /// Update an endpoint.
    pub fn update(
        &self,
        app_id: &str,
        endpoint_id: &str,
        endpoint_update: EndpointUpdate,
    ) -> Result<EndpointOut> {
        self.client.executor().send(endpoint::update_operation(
            app_id,
            endpoint_id,
            &endpoint_update,
        )?)
    }

    /// Delete an endpoint.
    pub fn delete(&self, app_id: &str, endpoint_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(endpoint::delete_operation(app_id, endpoint_id))
    }

    /// Get the endpoint's signing secret.
    pub fn get_secret(&self, app_id: &str, endpoint_id: &str) -> Result<EndpointSecretOut> {
        self.client
            .executor()
            .send(endpoint::get_secret_operation(app_id, endpoint_id))
    }

    /// Rotate the endpoint's signing secret.
    pub fn rotate_secret(
        &self,
        app_id: &str,
        endpoint_id: &str,
        secret_rotate_in: EndpointSecretRotateIn,
        options: EndpointRotateSecretOptions,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(endpoint::rotate_secret_operation(
                app_id,
                endpoint_id,
                &secret_rotate_in,
                &options,
            )?)
    }

    /// Get the additional headers sent with the endpoint's webhooks.
    pub fn get_headers(&self, app_id: &str, endpoint_id: &str) -> Result<EndpointHeadersOut> {
        self.client
            .executor()
            .send(endpoint::get_headers_operation(app_id, endpoint_id))
    }

    /// Set the additional headers sent with the endpoint's webhooks.
    pub fn update_headers(
        &self,
        app_id: &str,
        endpoint_id: &str,
        headers_in: EndpointHeadersIn,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(endpoint::update_headers_operation(
                app_id,
                endpoint_id,
                &headers_in,
            )?)
    }
}

pub struct Integration<'a> {
    client: &'a Client,
}

impl Integration<'_> {
    /// List the application's integrations.
    pub fn list(
        &self,
        app_id: &str,
        options: IntegrationListOptions,
    ) -> Result<ListResponse<IntegrationOut>> {
        self.client
            .executor()
            .send(integration::list_operation(app_id, &options))
    }

    /// Create an integration.
    pub fn create(
        &self,
        app_id: &str,
        integration_in: IntegrationIn,
        options: IntegrationCreateOptions,
    ) -> Result<IntegrationOut> {
        self.client.executor().send(integration::create_operation(
            app_id,
            &integration_in,
            &options,
        )?)
    }

    /// Get an integration.
    pub fn get(&self, app_id: &str, integ_id: &str) -> Result<IntegrationOut> {
        self.client
            .executor()
            .send(integration::get_operation(app_id, integ_id))
    }

    /// Update an integration.
    pub fn update(
        &self,
        app_id: &str,
        integ_id: &str,
        integration_update: IntegrationUpdate,
    ) -> Result<IntegrationOut> {
        self.client.executor().send(integration::update_operation(
            app_id,
            integ_id,
            &integration_update,
        )?)
    }

    /// Delete an integration.
    pub fn delete(&self, app_id: &str, integ_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(integration::delete_operation(app_id, integ_id))
    }

    /// Get an integration's key.
    #[deprecated(note = "Use `rotate_key` to obtain a fresh key instead.")]
    pub fn get_key(&self, app_id: &str, integ_id: &str) -> Result<IntegrationKeyOut> {
        self.client
            .executor()
            .send(integration::get_key_operation(app_id, integ_id))
    }

    /// Rotate the integration's key.
    pub fn rotate_key(
        &self,
        app_id: &str,
        integ_id: &str,
        options: IntegrationRotateKeyOptions,
    ) -> Result<IntegrationKeyOut> {
        self.client
            .executor()
            .send(integration::rotate_key_operation(app_id, integ_id, &options))
    }
}

pub struct Message<'a> {
    client: &'a Client,
}

impl Message<'_> {
    /// List all of the application's messages.
    pub fn list(
        &self,
        app_id: &str,
        options: MessageListOptions,
    ) -> Result<ListResponse<MessageOut>> {
        self.client
            .executor()
            .send(message::list_operation(app_id, &options))
    }

    /// Creates a new message and dispatches it to all of the application's
    /// endpoints.
    pub fn create(
        &self,
        app_id: &str,
        message_in: MessageIn,
        options: MessageCreateOptions,
    ) -> Result<MessageOut> {
        self.client
            .executor()
            .send(message::create_operation(app_id, &message_in, &options)?)
    }

    /// Get a message by its ID or event ID.
    pub fn get(&self, app_id: &str, msg_id: &str) -> Result<MessageOut> {
        self.client
            .executor()
            .send(message::get_operation(app_id, msg_id))
    }

    /// Delete the given message's payload.
    pub fn expunge_content(&self, app_id: &str, msg_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(message::expunge_content_operation(app_id, msg_id))
    }
}

pub struct MessageAttempt<'a> {
    client: &'a Client,
}

impl MessageAttempt<'_> {
    /// List attempts by message ID.
    pub fn list_by_msg(
        &self,
        app_id: &str,
        msg_id: &str,
        options: MessageAttemptListOptions,
    ) -> Result<ListResponse<MessageAttemptOut>> {
        self.client
            .executor()
            .send(message_attempt::list_by_msg_operation(
                app_id, msg_id, &options,
            ))
    }

    /// List attempts by endpoint ID.
    pub fn list_by_endpoint(
        &self,
        app_id: &str,
        endpoint_id: &str,
        options: MessageAttemptListOptions,
    ) -> Result<ListResponse<MessageAttemptOut>> {
        self.client
            .executor()
            .send(message_attempt::list_by_endpoint_operation(
                app_id,
                endpoint_id,
                &options,
            ))
    }

    /// Get an attempt.
    pub fn get(&self, app_id: &str, msg_id: &str, attempt_id: &str) -> Result<MessageAttemptOut> {
        self.client
            .executor()
            .send(message_attempt::get_operation(app_id, msg_id, attempt_id))
    }

    /// Resend a message to the specified endpoint.
    pub fn resend(
        &self,
        app_id: &str,
        msg_id: &str,
        endpoint_id: &str,
        options: MessageAttemptResendOptions,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(message_attempt::resend_operation(
                app_id,
                msg_id,
                endpoint_id,
                &options,
            ))
    }
}

pub struct Stream<'a> {
    client: &'a Client,
}

impl Stream<'_> {
    /// List of the organization's streams.
    pub fn list(&self, options: StreamListOptions) -> Result<ListResponse<StreamOut>> {
        self.client.executor().send(stream::list_operation(&options))
    }

    /// Creates a new stream.
    pub fn create(&self, stream_in: StreamIn, options: StreamCreateOptions) -> Result<StreamOut> {
        self.client
            .executor()
            .send(stream::create_operation(&stream_in, &options)?)
    }

    /// Get a stream by ID or UID.
    pub fn get(&self, stream_id: &str) -> Result<StreamOut> {
        self.client.executor().send(stream::get_operation(stream_id))
    }

    /// Partially update a stream.
    pub fn patch(&self, stream_id: &str, stream_patch: StreamPatch) -> Result<StreamOut> {
        self.client
            .executor()
            .send(stream::patch_operation(stream_id, &stream_patch)?)
    }

    /// Delete a stream.
    pub fn delete(&self, stream_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(stream::delete_operation(stream_id))
    }

    /// List the stream's event types.
    pub fn event_type_list(
        &self,
        stream_id: &str,
        options: StreamListOptions,
    ) -> Result<ListResponse<StreamEventTypeOut>> {
        self.client
            .executor()
            .send(stream::event_type_list_operation(stream_id, &options))
    }

    /// Create an event type for the stream.
    pub fn event_type_create(
        &self,
        stream_id: &str,
        event_type_in: StreamEventTypeIn,
        options: StreamCreateOptions,
    ) -> Result<StreamEventTypeOut> {
        self.client
            .executor()
            .send(stream::event_type_create_operation(
                stream_id,
                &event_type_in,
                &options,
            )?)
    }

    /// Get an event type by name.
    pub fn event_type_get(&self, stream_id: &str, name: &str) -> Result<StreamEventTypeOut> {
        self.client
            .executor()
            .send(stream::event_type_get_operation(stream_id, name))
    }

    /// Partially update an event type.
    pub fn event_type_patch(
        &self,
        stream_id: &str,
        name: &str,
        event_type_patch: StreamEventTypePatch,
    ) -> Result<StreamEventTypeOut> {
        self.client
            .executor()
            .send(stream::event_type_patch_operation(
                stream_id,
                name,
                &event_type_patch,
            )?)
    }

    /// Delete an event type.
    pub fn event_type_delete(&self, stream_id: &str, name: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(stream::event_type_delete_operation(stream_id, name))
    }
}
