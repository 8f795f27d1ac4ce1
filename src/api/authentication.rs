use reqwest::Method;

use crate::{
    executor::IDEMPOTENCY_KEY_HEADER,
    models::{
        AppPortalAccessIn, AppPortalAccessOut, ApplicationTokenExpireIn, DashboardAccessOut,
    },
    operation::Operation,
    Client, Result,
};

#[derive(Clone, Debug, Default)]
pub struct AuthenticationOptions {
    pub idempotency_key: Option<String>,
}

pub struct Authentication<'a> {
    client: &'a Client,
}

impl<'a> Authentication<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get magic links (and authentication codes) for connecting your users
    /// to the Consumer Application Portal.
    pub async fn app_portal_access(
        &self,
        app_id: &str,
        app_portal_access_in: AppPortalAccessIn,
        options: AuthenticationOptions,
    ) -> Result<AppPortalAccessOut> {
        self.client
            .executor()
            .send(app_portal_access_operation(
                app_id,
                &app_portal_access_in,
                &options,
            )?)
            .await
    }

    /// Expire all of the tokens associated with a specific application.
    pub async fn expire_all(
        &self,
        app_id: &str,
        application_token_expire_in: ApplicationTokenExpireIn,
        options: AuthenticationOptions,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(expire_all_operation(
                app_id,
                &application_token_expire_in,
                &options,
            )?)
            .await
    }

    /// Get magic links (and authentication codes) for connecting your users
    /// to the Consumer Application Portal.
    #[deprecated(note = "Use `app_portal_access` instead.")]
    pub async fn dashboard_access(
        &self,
        app_id: &str,
        options: AuthenticationOptions,
    ) -> Result<DashboardAccessOut> {
        self.client
            .executor()
            .send(dashboard_access_operation(app_id, &options))
            .await
    }

    /// Logout an app token.
    ///
    /// Trying to log out other tokens will fail.
    pub async fn logout(&self, options: AuthenticationOptions) -> Result<()> {
        self.client
            .executor()
            .send_no_content(logout_operation(&options))
            .await
    }
}

pub(crate) fn app_portal_access_operation(
    app_id: &str,
    app_portal_access_in: &AppPortalAccessIn,
    options: &AuthenticationOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/auth/app-portal-access/{app_id}")
        .path_param("app_id", app_id)
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .json_body(app_portal_access_in)
}

pub(crate) fn expire_all_operation(
    app_id: &str,
    application_token_expire_in: &ApplicationTokenExpireIn,
    options: &AuthenticationOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/auth/app/{app_id}/expire-all")
        .path_param("app_id", app_id)
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[204])
        .json_body(application_token_expire_in)
}

pub(crate) fn dashboard_access_operation(
    app_id: &str,
    options: &AuthenticationOptions,
) -> Operation {
    Operation::new(Method::POST, "/api/v1/auth/dashboard-access/{app_id}")
        .path_param("app_id", app_id)
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
}

pub(crate) fn logout_operation(options: &AuthenticationOptions) -> Operation {
    Operation::new(Method::POST, "/api/v1/auth/logout")
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[204])
}
