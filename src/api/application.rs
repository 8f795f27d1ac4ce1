use reqwest::Method;

use crate::{
    executor::IDEMPOTENCY_KEY_HEADER,
    models::{ApplicationIn, ApplicationOut, ApplicationPatch, ListResponse, Ordering},
    operation::Operation,
    Client, Result,
};

#[derive(Clone, Debug, Default)]
pub struct ApplicationListOptions {
    /// The iterator returned from a prior invocation.
    pub iterator: Option<String>,
    /// Limit the number of returned items.
    pub limit: Option<u64>,
    /// The sorting order of the returned items.
    pub order: Option<Ordering>,
}

#[derive(Clone, Debug, Default)]
pub struct ApplicationCreateOptions {
    /// Returns the existing application instead of failing when the UID is
    /// already taken.
    pub get_if_exists: Option<bool>,
    pub idempotency_key: Option<String>,
}

pub struct Application<'a> {
    client: &'a Client,
}

impl<'a> Application<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List of all the organization's applications.
    pub async fn list(
        &self,
        options: ApplicationListOptions,
    ) -> Result<ListResponse<ApplicationOut>> {
        self.client.executor().send(list_operation(&options)).await
    }

    /// Create a new application.
    pub async fn create(
        &self,
        application_in: ApplicationIn,
        options: ApplicationCreateOptions,
    ) -> Result<ApplicationOut> {
        self.client
            .executor()
            .send(create_operation(&application_in, &options)?)
            .await
    }

    /// Get an application.
    pub async fn get(&self, app_id: &str) -> Result<ApplicationOut> {
        self.client.executor().send(get_operation(app_id)).await
    }

    /// Update an application.
    pub async fn update(
        &self,
        app_id: &str,
        application_in: ApplicationIn,
    ) -> Result<ApplicationOut> {
        self.client
            .executor()
            .send(update_operation(app_id, &application_in)?)
            .await
    }

    /// Partially update an application.
    pub async fn patch(
        &self,
        app_id: &str,
        application_patch: ApplicationPatch,
    ) -> Result<ApplicationOut> {
        self.client
            .executor()
            .send(patch_operation(app_id, &application_patch)?)
            .await
    }

    /// Delete an application.
    pub async fn delete(&self, app_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(delete_operation(app_id))
            .await
    }
}

pub(crate) fn list_operation(options: &ApplicationListOptions) -> Operation {
    Operation::new(Method::GET, "/api/v1/app")
        .query_param("iterator", options.iterator.clone())
        .query_param("limit", options.limit.map(|limit| limit.to_string()))
        .query_param("order", options.order.map(|order| order.as_str().to_owned()))
}

pub(crate) fn create_operation(
    application_in: &ApplicationIn,
    options: &ApplicationCreateOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/app")
        .query_param(
            "get_if_exists",
            options.get_if_exists.map(|flag| flag.to_string()),
        )
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[200, 201])
        .json_body(application_in)
}

pub(crate) fn get_operation(app_id: &str) -> Operation {
    Operation::new(Method::GET, "/api/v1/app/{app_id}").path_param("app_id", app_id)
}

pub(crate) fn update_operation(app_id: &str, application_in: &ApplicationIn) -> Result<Operation> {
    Operation::new(Method::PUT, "/api/v1/app/{app_id}")
        .path_param("app_id", app_id)
        .success(&[200, 201])
        .json_body(application_in)
}

pub(crate) fn patch_operation(
    app_id: &str,
    application_patch: &ApplicationPatch,
) -> Result<Operation> {
    Operation::new(Method::PATCH, "/api/v1/app/{app_id}")
        .path_param("app_id", app_id)
        .json_body(application_patch)
}

pub(crate) fn delete_operation(app_id: &str) -> Operation {
    Operation::new(Method::DELETE, "/api/v1/app/{app_id}")
        .path_param("app_id", app_id)
        .success(&[204])
}
