use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a property bag entry.
///
/// Only [`PropertyKey::Text`] keys are custom game properties; the numeric
/// variants carry protocol-reserved codes and are skipped by the string-key
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyKey {
    Byte(u8),
    Integer(i32),
    Text(String),
}

impl PropertyKey {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Byte(_) | Self::Integer(_) => None,
        }
    }

    /// Short type label used by the debug dump.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Byte(_) => "byte",
            Self::Integer(_) => "int",
            Self::Text(_) => "string",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(value) => write!(f, "{}", value),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u8> for PropertyKey {
    fn from(value: u8) -> Self {
        Self::Byte(value)
    }
}

impl From<i32> for PropertyKey {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}
