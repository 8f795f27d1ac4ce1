use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;

use crate::{
    executor::IDEMPOTENCY_KEY_HEADER,
    models::{ListResponse, MessageIn, MessageOut},
    operation::Operation,
    Client, Result,
};

#[derive(Clone, Debug, Default)]
pub struct MessageListOptions {
    /// The iterator returned from a prior invocation.
    pub iterator: Option<String>,
    /// Limit the number of returned items.
    pub limit: Option<u64>,
    /// Filter the returned items to a delivery channel.
    pub channel: Option<String>,
    /// Only include items created before this time.
    pub before: Option<DateTime<Utc>>,
    /// Only include items created after this time.
    pub after: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default)]
pub struct MessageCreateOptions {
    /// When false, the payload is not stored and `payload` reads back as
    /// an empty object.
    pub with_content: Option<bool>,
    pub idempotency_key: Option<String>,
}

pub struct Message<'a> {
    client: &'a Client,
}

impl<'a> Message<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List all of the application's messages.
    pub async fn list(
        &self,
        app_id: &str,
        options: MessageListOptions,
    ) -> Result<ListResponse<MessageOut>> {
        self.client
            .executor()
            .send(list_operation(app_id, &options))
            .await
    }

    /// Creates a new message and dispatches it to all of the application's
    /// endpoints.
    pub async fn create(
        &self,
        app_id: &str,
        message_in: MessageIn,
        options: MessageCreateOptions,
    ) -> Result<MessageOut> {
        self.client
            .executor()
            .send(create_operation(app_id, &message_in, &options)?)
            .await
    }

    /// Get a message by its ID or event ID.
    pub async fn get(&self, app_id: &str, msg_id: &str) -> Result<MessageOut> {
        self.client
            .executor()
            .send(get_operation(app_id, msg_id))
            .await
    }

    /// Delete the given message's payload.
    ///
    /// Useful when a message was accidentally sent with sensitive content.
    pub async fn expunge_content(&self, app_id: &str, msg_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(expunge_content_operation(app_id, msg_id))
            .await
    }
}

fn rfc3339(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|dt| dt.to_rfc3339_opts(SecondsFormat::Micros, true))
}

pub(crate) fn list_operation(app_id: &str, options: &MessageListOptions) -> Operation {
    Operation::new(Method::GET, "/api/v1/app/{app_id}/msg")
        .path_param("app_id", app_id)
        .query_param("iterator", options.iterator.clone())
        .query_param("limit", options.limit.map(|limit| limit.to_string()))
        .query_param("channel", options.channel.clone())
        .query_param("before", rfc3339(options.before))
        .query_param("after", rfc3339(options.after))
}

pub(crate) fn create_operation(
    app_id: &str,
    message_in: &MessageIn,
    options: &MessageCreateOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/app/{app_id}/msg")
        .path_param("app_id", app_id)
        .query_param(
            "with_content",
            options.with_content.map(|flag| flag.to_string()),
        )
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[200, 202])
        .json_body(message_in)
}

pub(crate) fn get_operation(app_id: &str, msg_id: &str) -> Operation {
    Operation::new(Method::GET, "/api/v1/app/{app_id}/msg/{msg_id}")
        .path_param("app_id", app_id)
        .path_param("msg_id", msg_id)
}

pub(crate) fn expunge_content_operation(app_id: &str, msg_id: &str) -> Operation {
    Operation::new(Method::DELETE, "/api/v1/app/{app_id}/msg/{msg_id}/content")
        .path_param("app_id", app_id)
        .path_param("msg_id", msg_id)
        .success(&[204])
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{list_operation, MessageListOptions};

    #[test]
    fn datetime_query_params_use_rfc3339_utc() {
        let before = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let op = list_operation(
            "app_42",
            &MessageListOptions {
                before: Some(before),
                ..Default::default()
            },
        );
        assert_eq!(
            op.query_params,
            vec![("before", "2024-03-01T09:30:00.000000Z".to_owned())]
        );
    }
}
