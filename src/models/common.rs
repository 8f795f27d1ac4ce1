use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_iterator: Option<String>,
}

/// Sort order for listing operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    Ascending,
    Descending,
}

impl Ordering {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Tri-state value for PATCH bodies where the wire format distinguishes
/// "key omitted" (leave unchanged) from "key present with null" (clear).
///
/// `Absent` fields are skipped during serialization via
/// `#[serde(default, skip_serializing_if = "MaybeSet::is_absent")]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MaybeSet<T> {
    /// Key omitted from the payload; the server leaves the field unchanged.
    #[default]
    Absent,
    /// Key present with `null`; the server clears the field.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> MaybeSet<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<T> From<Option<T>> for MaybeSet<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Self::Null,
            Some(value) => Self::Value(value),
        }
    }
}

impl<T: Serialize> Serialize for MaybeSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent fields are skipped at the struct level; if one is
            // serialized anyway it degrades to null.
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MaybeSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
