use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MaybeSet;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamIn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    /// Optional unique identifier for the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamOut {
    pub created_at: DateTime<Utc>,
    /// The stream's ID.
    pub id: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields are left unchanged, `null` clears.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "MaybeSet::is_absent")]
    pub uid: MaybeSet<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEventTypeIn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEventTypeOut {
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields are left unchanged, `null` clears.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEventTypePatch {
    #[serde(default, skip_serializing_if = "MaybeSet::is_absent")]
    pub description: MaybeSet<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{StreamEventTypePatch, StreamOut};
    use crate::models::MaybeSet;

    #[test]
    fn stream_out_parses_wire_shape() {
        let parsed: StreamOut = serde_json::from_value(json!({
            "createdAt": "2024-03-01T09:30:00Z",
            "id": "strm_1",
            "metadata": {"env": "prod"},
            "updatedAt": "2024-03-01T09:30:00Z"
        }))
        .expect("must parse");
        assert_eq!(parsed.id, "strm_1");
        assert_eq!(parsed.metadata["env"], "prod");
    }

    #[test]
    fn event_type_patch_clears_description_with_null() {
        let json = serde_json::to_value(StreamEventTypePatch {
            description: MaybeSet::Null,
        })
        .expect("must serialize");
        assert_eq!(json, json!({"description": null}));
    }
}
