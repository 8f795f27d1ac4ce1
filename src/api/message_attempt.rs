use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;

use crate::{
    executor::IDEMPOTENCY_KEY_HEADER,
    models::{ListResponse, MessageAttemptOut, MessageStatus},
    operation::Operation,
    Client, Result,
};

#[derive(Clone, Debug, Default)]
pub struct MessageAttemptListOptions {
    /// The iterator returned from a prior invocation.
    pub iterator: Option<String>,
    /// Limit the number of returned items.
    pub limit: Option<u64>,
    /// Filter the returned items by delivery status.
    pub status: Option<MessageStatus>,
    /// Only include items created before this time.
    pub before: Option<DateTime<Utc>>,
    /// Only include items created after this time.
    pub after: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default)]
pub struct MessageAttemptResendOptions {
    pub idempotency_key: Option<String>,
}

pub struct MessageAttempt<'a> {
    client: &'a Client,
}

impl<'a> MessageAttempt<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List attempts by message ID.
    pub async fn list_by_msg(
        &self,
        app_id: &str,
        msg_id: &str,
        options: MessageAttemptListOptions,
    ) -> Result<ListResponse<MessageAttemptOut>> {
        self.client
            .executor()
            .send(list_by_msg_operation(app_id, msg_id, &options))
            .await
    }

    /// List attempts by endpoint ID.
    pub async fn list_by_endpoint(
        &self,
        app_id: &str,
        endpoint_id: &str,
        options: MessageAttemptListOptions,
    ) -> Result<ListResponse<MessageAttemptOut>> {
        self.client
            .executor()
            .send(list_by_endpoint_operation(app_id, endpoint_id, &options))
            .await
    }

    /// Get an attempt.
    pub async fn get(
        &self,
        app_id: &str,
        msg_id: &str,
        attempt_id: &str,
    ) -> Result<MessageAttemptOut> {
        self.client
            .executor()
            .send(get_operation(app_id, msg_id, attempt_id))
            .await
    }

    /// Resend a message to the specified endpoint.
    pub async fn resend(
        &self,
        app_id: &str,
        msg_id: &str,
        endpoint_id: &str,
        options: MessageAttemptResendOptions,
    ) -> Result<()> {
        self.client
            .executor()
            .send_no_content(resend_operation(app_id, msg_id, endpoint_id, &options))
            .await
    }
}

fn rfc3339(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|dt| dt.to_rfc3339_opts(SecondsFormat::Micros, true))
}

fn attempt_list_query(op: Operation, options: &MessageAttemptListOptions) -> Operation {
    op.query_param("iterator", options.iterator.clone())
        .query_param("limit", options.limit.map(|limit| limit.to_string()))
        .query_param(
            "status",
            options.status.map(|status| u8::from(status).to_string()),
        )
        .query_param("before", rfc3339(options.before))
        .query_param("after", rfc3339(options.after))
}

pub(crate) fn list_by_msg_operation(
    app_id: &str,
    msg_id: &str,
    options: &MessageAttemptListOptions,
) -> Operation {
    let op = Operation::new(Method::GET, "/api/v1/app/{app_id}/attempt/msg/{msg_id}")
        .path_param("app_id", app_id)
        .path_param("msg_id", msg_id);
    attempt_list_query(op, options)
}

pub(crate) fn list_by_endpoint_operation(
    app_id: &str,
    endpoint_id: &str,
    options: &MessageAttemptListOptions,
) -> Operation {
    let op = Operation::new(
        Method::GET,
        "/api/v1/app/{app_id}/attempt/endpoint/{endpoint_id}",
    )
    .path_param("app_id", app_id)
    .path_param("endpoint_id", endpoint_id);
    attempt_list_query(op, options)
}

pub(crate) fn get_operation(app_id: &str, msg_id: &str, attempt_id: &str) -> Operation {
    Operation::new(
        Method::GET,
        "/api/v1/app/{app_id}/msg/{msg_id}/attempt/{attempt_id}",
    )
    .path_param("app_id", app_id)
    .path_param("msg_id", msg_id)
    .path_param("attempt_id", attempt_id)
}

pub(crate) fn resend_operation(
    app_id: &str,
    msg_id: &str,
    endpoint_id: &str,
    options: &MessageAttemptResendOptions,
) -> Operation {
    Operation::new(
        Method::POST,
        "/api/v1/app/{app_id}/msg/{msg_id}/endpoint/{endpoint_id}/resend",
    )
    .path_param("app_id", app_id)
    .path_param("msg_id", msg_id)
    .path_param("endpoint_id", endpoint_id)
    .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
    .success(&[202, 204])
}

#[cfg(test)]
mod tests {
    use super::{list_by_msg_operation, MessageAttemptListOptions};
    use crate::models::MessageStatus;

    #[test]
    fn status_filter_uses_integer_code() {
        let op = list_by_msg_operation(
            "app_42",
            "msg_7",
            &MessageAttemptListOptions {
                status: Some(MessageStatus::Fail),
                ..Default::default()
            },
        );
        assert_eq!(op.query_params, vec![("status", "2".to_owned())]);
    }
}
