use reqwest::Method;

use crate::{
    executor::IDEMPOTENCY_KEY_HEADER,
    models::{
        EndpointHeadersIn, EndpointHeadersOut, EndpointIn, EndpointOut, EndpointSecretOut,
        EndpointSecretRotateIn, EndpointUpdate, ListResponse, Ordering,
    },
    operation::Operation,
    Client, Result,
};

#[derive(Clone, Debug, Default)]
pub struct EndpointListOptions {
    /// The iterator returned from a prior invocation.
    pub iterator: Option<String>,
    /// Limit the number of returned items.
    pub limit: Option<u64>,
    /// The sorting order of the returned items.
    pub order: Option<Ordering>,
}

#[derive(Clone, Debug, Default)]
pub struct EndpointCreateOptions {
    pub idempotency_key: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct EndpointRotateSecretOptions {
    pub idempotency_key: Option<String>,
}

pub struct Endpoint<'a> {
    client: &'a Client,
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the application's endpoints.
    pub async fn list(
        &self,
        app_id: &str,
        options: EndpointListOptions,
    ) -> Result<ListResponse<EndpointOut>> {
        self.client
            .executor()
            .send(list_operation(app_id, &options))
            .await
    }

    /// Create a new endpoint for the application.
    ///
    /// When `secret` is unset, the endpoint's signing secret is generated
    /// server-side.
    pub async fn create(
        &self,
        app_id: &str,
        endpoint_in: EndpointIn,
        options: EndpointCreateOptions,
    ) -> Result<EndpointOut> {
        self.client
            .executor()
            .send(create_operation(app_id, &endpoint_in, &options)?)
            .await
    }

    /// Get an endpoint.
    pub async fn get(&self, app_id: &str, endpoint_id: &str) -> Result<EndpointOut> {
        self.client
            .executor()
            .send(get_operation(app_id, endpoint_id))
            .await
    }

    /// Update an endpoint.
    pub async fn update(
        &self,
        app_id: &str,
        endpoint_id: &str,
        endpoint_update: EndpointUpdate,
    ) -> Result<EndpointOut> {
        self.client
            .executor()
            .send(update_operation(app_id, endpoint_id, &endpoint_update)?)
            .await
    }

    /// Delete an endpoint.
    pub async fn delete(&self, app_id: &str, endpoint_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(delete_operation(app_id, endpoint_id))
            .await
    }

    /// Get the endpoint's signing secret.
    ///
    /// This is used to verify the authenticity of delivered webhooks.
    pub async fn get_secret(&self, app_id: &str, endpoint_id: &str) -> Result<EndpointSecretOut> {
        self.client
            .executor()
            .send(get_secret_operation(app_id, endpoint_id))
            .await
    }

    /// Rotate the endpoint's signing secret.
    ///
    /// The previous secret remains valid for a grace period so in-flight
    /// deliveries can still be verified.
    pub async fn rotate_secret(
        &self,
        app_id: &str,
        endpoint_id: &str,
        secret_rotate_in: EndpointSecretRotateIn,
        options: EndpointRotateSecretOptions,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(rotate_secret_operation(
                app_id,
                endpoint_id,
                &secret_rotate_in,
                &options,
            )?)
            .await
    }

    /// Get the additional headers sent with the endpoint's webhooks.
    pub async fn get_headers(&self, app_id: &str, endpoint_id: &str) -> Result<EndpointHeadersOut> {
        self.client
            .executor()
            .send(get_headers_operation(app_id, endpoint_id))
            .await
    }

    /// Set the additional headers sent with the endpoint's webhooks.
    pub async fn update_headers(
        &self,
        app_id: &str,
        endpoint_id: &str,
        headers_in: EndpointHeadersIn,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(update_headers_operation(app_id, endpoint_id, &headers_in)?)
            .await
    }
}

pub(crate) fn list_operation(app_id: &str, options: &EndpointListOptions) -> Operation {
    Operation::new(Method::GET, "/api/v1/app/{app_id}/endpoint")
        .path_param("app_id", app_id)
        .query_param("iterator", options.iterator.clone())
        .query_param("limit", options.limit.map(|limit| limit.to_string()))
        .query_param("order", options.order.map(|order| order.as_str().to_owned()))
}

pub(crate) fn create_operation(
    app_id: &str,
    endpoint_in: &EndpointIn,
    options: &EndpointCreateOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/app/{app_id}/endpoint")
        .path_param("app_id", app_id)
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[200, 201])
        .json_body(endpoint_in)
}

pub(crate) fn get_operation(app_id: &str, endpoint_id: &str) -> Operation {
    Operation::new(Method::GET, "/api/v1/app/{app_id}/endpoint/{endpoint_id}")
        .path_param("app_id", app_id)
        .path_param("endpoint_id", endpoint_id)
}

pub(crate) fn update_operation(
    app_id: &str,
    endpoint_id: &str,
    endpoint_update: &EndpointUpdate,
) -> Result<Operation> {
    Operation::new(Method::PUT, "/api/v1/app/{app_id}/endpoint/{endpoint_id}")
        .path_param("app_id", app_id)
        .path_param("endpoint_id", endpoint_id)
        .success(&[200, 201])
        .json_body(endpoint_update)
}

pub(crate) fn delete_operation(app_id: &str, endpoint_id: &str) -> Operation {
    Operation::new(Method::DELETE, "/api/v1/app/{app_id}/endpoint/{endpoint_id}")
        .path_param("app_id", app_id)
        .path_param("endpoint_id", endpoint_id)
        .success(&[204])
}

pub(crate) fn get_secret_operation(app_id: &str, endpoint_id: &str) -> Operation {
    Operation::new(
        Method::GET,
        "/api/v1/app/{app_id}/endpoint/{endpoint_id}/secret",
    )
    .path_param("app_id", app_id)
    .path_param("endpoint_id", endpoint_id)
}

pub(crate) fn rotate_secret_operation(
    app_id: &str,
    endpoint_id: &str,
    secret_rotate_in: &EndpointSecretRotateIn,
    options: &EndpointRotateSecretOptions,
) -> Result<Operation> {
    Operation::new(
        Method::POST,
        "/api/v1/app/{app_id}/endpoint/{endpoint_id}/secret/rotate",
    )
    .path_param("app_id", app_id)
    .path_param("endpoint_id", endpoint_id)
    .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
    .success(&[204])
    .json_body(secret_rotate_in)
}

pub(crate) fn get_headers_operation(app_id: &str, endpoint_id: &str) -> Operation {
    Operation::new(
        Method::GET,
        "/api/v1/app/{app_id}/endpoint/{endpoint_id}/headers",
    )
    .path_param("app_id", app_id)
    .path_param("endpoint_id", endpoint_id)
}

pub(crate) fn update_headers_operation(
    app_id: &str,
    endpoint_id: &str,
    headers_in: &EndpointHeadersIn,
) -> Result<Operation> {
    Operation::new(
        Method::PUT,
        "/api/v1/app/{app_id}/endpoint/{endpoint_id}/headers",
    )
    .path_param("app_id", app_id)
    .path_param("endpoint_id", endpoint_id)
    .success(&[204])
    .json_body(headers_in)
}
