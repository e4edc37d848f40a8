use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Room label as sent in a `join` message's `data` field.
///
/// Strings are taken as-is; numbers and booleans are coerced to their JSON
/// text. Matching between labels is exact: no trimming, no case folding. An
/// empty label deserializes fine and is rejected later by the registry.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RoomLabel(String);

impl RoomLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for RoomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RoomLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RoomLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            Value::Bool(b) => Ok(Self(b.to_string())),
            other => Err(de::Error::custom(format!(
                "room label must be a string, number or bool, got {other}"
            ))),
        }
    }
}
