use reqwest::Method;

use crate::{
    executor::IDEMPOTENCY_KEY_HEADER,
    models::{
        IntegrationIn, IntegrationKeyOut, IntegrationOut, IntegrationUpdate, ListResponse,
        Ordering,
    },
    operation::Operation,
    Client, Result,
};

#[derive(Clone, Debug, Default)]
pub struct IntegrationListOptions {
    /// The iterator returned from a prior invocation.
    pub iterator: Option<String>,
    /// Limit the number of returned items.
    pub limit: Option<u64>,
    /// The sorting order of the returned items.
    pub order: Option<Ordering>,
}

#[derive(Clone, Debug, Default)]
pub struct IntegrationCreateOptions {
    pub idempotency_key: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct IntegrationRotateKeyOptions {
    pub idempotency_key: Option<String>,
}

pub struct Integration<'a> {
    client: &'a Client,
}

impl<'a> Integration<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the application's integrations.
    pub async fn list(
        &self,
        app_id: &str,
        options: IntegrationListOptions,
    ) -> Result<ListResponse<IntegrationOut>> {
        self.client
            .executor()
            .send(list_operation(app_id, &options))
            .await
    }

    /// Create an integration.
    pub async fn create(
        &self,
        app_id: &str,
        integration_in: IntegrationIn,
        options: IntegrationCreateOptions,
    ) -> Result<IntegrationOut> {
        self.client
            .executor()
            .send(create_operation(app_id, &integration_in, &options)?)
            .await
    }

    /// Get an integration.
    pub async fn get(&self, app_id: &str, integ_id: &str) -> Result<IntegrationOut> {
        self.client
            .executor()
            .send(get_operation(app_id, integ_id))
            .await
    }

    /// Update an integration.
    pub async fn update(
        &self,
        app_id: &str,
        integ_id: &str,
        integration_update: IntegrationUpdate,
    ) -> Result<IntegrationOut> {
        self.client
            .executor()
            .send(update_operation(app_id, integ_id, &integration_update)?)
            .await
    }

    /// Delete an integration.
    pub async fn delete(&self, app_id: &str, integ_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(delete_operation(app_id, integ_id))
            .await
    }

    /// Get an integration's key.
    #[deprecated(note = "Use `rotate_key` to obtain a fresh key instead.")]
    pub async fn get_key(&self, app_id: &str, integ_id: &str) -> Result<IntegrationKeyOut> {
        self.client
            .executor()
            .send(get_key_operation(app_id, integ_id))
            .await
    }

    /// Rotate the integration's key. The previous key is immediately
    /// revoked.
    pub async fn rotate_key(
        &self,
        app_id: &str,
        integ_id: &str,
        options: IntegrationRotateKeyOptions,
    ) -> Result<IntegrationKeyOut> {
        self.client
            .executor()
            .send(rotate_key_operation(app_id, integ_id, &options))
            .await
    }
}

pub(crate) fn list_operation(app_id: &str, options: &IntegrationListOptions) -> Operation {
    Operation::new(Method::GET, "/api/v1/app/{app_id}/integration")
        .path_param("app_id", app_id)
        .query_param("iterator", options.iterator.clone())
        .query_param("limit", options.limit.map(|limit| limit.to_string()))
        .query_param("order", options.order.map(|order| order.as_str().to_owned()))
}

pub(crate) fn create_operation(
    app_id: &str,
    integration_in: &IntegrationIn,
    options: &IntegrationCreateOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/app/{app_id}/integration")
        .path_param("app_id", app_id)
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[200, 201])
        .json_body(integration_in)
}

pub(crate) fn get_operation(app_id: &str, integ_id: &str) -> Operation {
    Operation::new(Method::GET, "/api/v1/app/{app_id}/integration/{integ_id}")
        .path_param("app_id", app_id)
        .path_param("integ_id", integ_id)
}

pub(crate) fn update_operation(
    app_id: &str,
    integ_id: &str,
    integration_update: &IntegrationUpdate,
) -> Result<Operation> {
    Operation::new(Method::PUT, "/api/v1/app/{app_id}/integration/{integ_id}")
        .path_param("app_id", app_id)
        .path_param("integ_id", integ_id)
        .json_body(integration_update)
}

pub(crate) fn delete_operation(app_id: &str, integ_id: &str) -> Operation {
    Operation::new(
        Method::DELETE,
        "/api/v1/app/{app_id}/integration/{integ_id}",
    )
    .path_param("app_id", app_id)
    .path_param("integ_id", integ_id)
    .success(&[204])
}

pub(crate) fn get_key_operation(app_id: &str, integ_id: &str) -> Operation {
    Operation::new(
        Method::GET,
        "/api/v1/app/{app_id}/integration/{integ_id}/key",
    )
    .path_param("app_id", app_id)
    .path_param("integ_id", integ_id)
}

pub(crate) fn rotate_key_operation(
    app_id: &str,
    integ_id: &str,
    options: &IntegrationRotateKeyOptions,
) -> Operation {
    Operation::new(
        Method::POST,
        "/api/v1/app/{app_id}/integration/{integ_id}/key/rotate",
    )
    .path_param("app_id", app_id)
    .path_param("integ_id", integ_id)
    .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
}
