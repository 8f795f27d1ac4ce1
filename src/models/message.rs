use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageIn {
    /// Channels to restrict delivery to; empty means all endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    /// Optional unique, client-chosen identifier for the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub event_type: String,
    /// Arbitrary JSON payload delivered to matching endpoints.
    pub payload: serde_json::Value,
    /// Retention period for the payload, in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_retention_period: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOut {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub event_type: String,
    /// The message's ID.
    pub id: String,
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{MessageIn, MessageOut};

    #[test]
    fn message_in_carries_payload_verbatim() {
        let json = serde_json::to_value(MessageIn {
            event_type: "invoice.paid".to_owned(),
            payload: json!({"amount": 1250, "currency": "eur"}),
            ..Default::default()
        })
        .expect("must serialize");
        assert_eq!(
            json,
            json!({
                "eventType": "invoice.paid",
                "payload": {"amount": 1250, "currency": "eur"}
            })
        );
    }

    #[test]
    fn message_out_parses_timestamp_as_utc() {
        let parsed: MessageOut = serde_json::from_value(json!({
            "eventType": "invoice.paid",
            "id": "msg_1",
            "payload": {},
            "timestamp": "2024-03-01T09:30:00+02:00"
        }))
        .expect("must parse");
        assert_eq!(parsed.timestamp.to_rfc3339(), "2024-03-01T07:30:00+00:00");
    }
}
