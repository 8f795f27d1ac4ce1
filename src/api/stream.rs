use reqwest::Method;

use crate::{
    executor::IDEMPOTENCY_KEY_HEADER,
    models::{
        ListResponse, Ordering, StreamEventTypeIn, StreamEventTypeOut, StreamEventTypePatch,
        StreamIn, StreamOut, StreamPatch,
    },
    operation::Operation,
    Client, Result,
};

#[derive(Clone, Debug, Default)]
pub struct StreamListOptions {
    /// The iterator returned from a prior invocation.
    pub iterator: Option<String>,
    /// Limit the number of returned items.
    pub limit: Option<u64>,
    /// The sorting order of the returned items.
    pub order: Option<Ordering>,
}

#[derive(Clone, Debug, Default)]
pub struct StreamCreateOptions {
    pub idempotency_key: Option<String>,
}

pub struct Stream<'a> {
    client: &'a Client,
}

impl<'a> Stream<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List of the organization's streams.
    pub async fn list(&self, options: StreamListOptions) -> Result<ListResponse<StreamOut>> {
        self.client.executor().send(list_operation(&options)).await
    }

    /// Creates a new stream.
    pub async fn create(
        &self,
        stream_in: StreamIn,
        options: StreamCreateOptions,
    ) -> Result<StreamOut> {
        self.client
            .executor()
            .send(create_operation(&stream_in, &options)?)
            .await
    }

    /// Get a stream by ID or UID.
    pub async fn get(&self, stream_id: &str) -> Result<StreamOut> {
        self.client.executor().send(get_operation(stream_id)).await
    }

    /// Partially update a stream.
    pub async fn patch(&self, stream_id: &str, stream_patch: StreamPatch) -> Result<StreamOut> {
        self.client
            .executor()
            .send(patch_operation(stream_id, &stream_patch)?)
            .await
    }

    /// Delete a stream.
    pub async fn delete(&self, stream_id: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(delete_operation(stream_id))
            .await
    }

    /// List the stream's event types.
    pub async fn event_type_list(
        &self,
        stream_id: &str,
        options: StreamListOptions,
    ) -> Result<ListResponse<StreamEventTypeOut>> {
        self.client
            .executor()
            .send(event_type_list_operation(stream_id, &options))
            .await
    }

    /// Create an event type for the stream.
    pub async fn event_type_create(
        &self,
        stream_id: &str,
        event_type_in: StreamEventTypeIn,
        options: StreamCreateOptions,
    ) -> Result<StreamEventTypeOut> {
        self.client
            .executor()
            .send(event_type_create_operation(
                stream_id,
                &event_type_in,
                &options,
            )?)
            .await
    }

    /// Get an event type by name.
    pub async fn event_type_get(
        &self,
        stream_id: &str,
        name: &str,
    ) -> Result<StreamEventTypeOut> {
        self.client
            .executor()
            .send(event_type_get_operation(stream_id, name))
            .await
    }

    /// Partially update an event type.
    pub async fn event_type_patch(
        &self,
        stream_id: &str,
        name: &str,
        event_type_patch: StreamEventTypePatch,
    ) -> Result<StreamEventTypeOut> {
        self.client
            .executor()
            .send(event_type_patch_operation(stream_id, name, &event_type_patch)?)
            .await
    }

    /// Delete an event type.
    pub async fn event_type_delete(&self, stream_id: &str, name: &str) -> Result<()> {
        self.client
            .executor()
            .send_no_content(event_type_delete_operation(stream_id, name))
            .await
    }
}

pub(crate) fn list_operation(options: &StreamListOptions) -> Operation {
    Operation::new(Method::GET, "/api/v1/stream")
        .query_param("iterator", options.iterator.clone())
        .query_param("limit", options.limit.map(|limit| limit.to_string()))
        .query_param("order", options.order.map(|order| order.as_str().to_owned()))
}

pub(crate) fn create_operation(
    stream_in: &StreamIn,
    options: &StreamCreateOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/stream")
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[200, 201])
        .json_body(stream_in)
}

pub(crate) fn get_operation(stream_id: &str) -> Operation {
    Operation::new(Method::GET, "/api/v1/stream/{stream_id}").path_param("stream_id", stream_id)
}

pub(crate) fn patch_operation(stream_id: &str, stream_patch: &StreamPatch) -> Result<Operation> {
    Operation::new(Method::PATCH, "/api/v1/stream/{stream_id}")
        .path_param("stream_id", stream_id)
        .json_body(stream_patch)
}

pub(crate) fn delete_operation(stream_id: &str) -> Operation {
    Operation::new(Method::DELETE, "/api/v1/stream/{stream_id}")
        .path_param("stream_id", stream_id)
        .success(&[204])
}

pub(crate) fn event_type_list_operation(
    stream_id: &str,
    options: &StreamListOptions,
) -> Operation {
    Operation::new(Method::GET, "/api/v1/stream/{stream_id}/event-type")
        .path_param("stream_id", stream_id)
        .query_param("iterator", options.iterator.clone())
        .query_param("limit", options.limit.map(|limit| limit.to_string()))
        .query_param("order", options.order.map(|order| order.as_str().to_owned()))
}

pub(crate) fn event_type_create_operation(
    stream_id: &str,
    event_type_in: &StreamEventTypeIn,
    options: &StreamCreateOptions,
) -> Result<Operation> {
    Operation::new(Method::POST, "/api/v1/stream/{stream_id}/event-type")
        .path_param("stream_id", stream_id)
        .header_param(IDEMPOTENCY_KEY_HEADER, options.idempotency_key.clone())
        .success(&[200, 201])
        .json_body(event_type_in)
}

pub(crate) fn event_type_get_operation(stream_id: &str, name: &str) -> Operation {
    Operation::new(Method::GET, "/api/v1/stream/{stream_id}/event-type/{name}")
        .path_param("stream_id", stream_id)
        .path_param("name", name)
}

pub(crate) fn event_type_patch_operation(
    stream_id: &str,
    name: &str,
    event_type_patch: &StreamEventTypePatch,
) -> Result<Operation> {
    Operation::new(Method::PATCH, "/api/v1/stream/{stream_id}/event-type/{name}")
        .path_param("stream_id", stream_id)
        .path_param("name", name)
        .json_body(event_type_patch)
}

pub(crate) fn event_type_delete_operation(stream_id: &str, name: &str) -> Operation {
    Operation::new(
        Method::DELETE,
        "/api/v1/stream/{stream_id}/event-type/{name}",
    )
    .path_param("stream_id", stream_id)
    .path_param("name", name)
    .success(&[204])
}
