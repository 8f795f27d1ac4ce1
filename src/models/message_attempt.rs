use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery state of a message attempt, integer-coded on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MessageStatus {
    Success = 0,
    Pending = 1,
    Fail = 2,
    Sending = 3,
}

impl From<MessageStatus> for u8 {
    fn from(status: MessageStatus) -> Self {
        status as Self
    }
}

impl TryFrom<u8> for MessageStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Pending),
            2 => Ok(Self::Fail),
            3 => Ok(Self::Sending),
            other => Err(format!("unknown message status code {other}")),
        }
    }
}

/// What caused an attempt to be issued, integer-coded on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AttemptTriggerType {
    Scheduled = 0,
    Manual = 1,
}

impl From<AttemptTriggerType> for u8 {
    fn from(trigger: AttemptTriggerType) -> Self {
        trigger as Self
    }
}

impl TryFrom<u8> for AttemptTriggerType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Scheduled),
            1 => Ok(Self::Manual),
            other => Err(format!("unknown attempt trigger type code {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAttemptOut {
    /// The endpoint's ID.
    pub endpoint_id: String,
    /// The attempt's ID.
    pub id: String,
    /// The message's ID.
    pub msg_id: String,
    /// Response body received from the endpoint.
    pub response: String,
    pub response_status_code: i16,
    pub status: MessageStatus,
    pub timestamp: DateTime<Utc>,
    pub trigger_type: AttemptTriggerType,
    /// The URL the attempt was delivered to.
    pub url: String,
}
