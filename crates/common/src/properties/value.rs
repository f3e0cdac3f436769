use serde::{Deserialize, Serialize};

use super::bag::PropertyBag;
use crate::error::PropertyError;
use crate::math::{Quaternion, Vec2, Vec3};

/// Value of a property bag entry.
///
/// `Null` is the deletion marker: setting a property to `Null` and sending
/// it tells every peer to remove that property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Byte(u8),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(String),
    IntArray(Vec<i32>),
    Vector2(Vec2),
    Vector3(Vec3),
    Quaternion(Quaternion),
    List(Vec<PropertyValue>),
    Bag(PropertyBag),
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short type label used by the debug dump and in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Byte(_) => "byte",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Text(_) => "string",
            Self::IntArray(_) => "int[]",
            Self::Vector2(_) => "vector2",
            Self::Vector3(_) => "vector3",
            Self::Quaternion(_) => "quaternion",
            Self::List(_) => "list",
            Self::Bag(_) => "bag",
        }
    }

    /// Integer view; bytes widen, longs narrow only when they fit.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Byte(value) => Some(i32::from(*value)),
            Self::Int(value) => Some(*value),
            Self::Long(value) => (*value).try_into().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Double(value) => Some(*value as f32),
            _ => None,
        }
    }

    pub fn as_bag(&self) -> Option<&PropertyBag> {
        match self {
            Self::Bag(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u8> for PropertyValue {
    fn from(value: u8) -> Self {
        Self::Byte(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<i32>> for PropertyValue {
    fn from(value: Vec<i32>) -> Self {
        Self::IntArray(value)
    }
}

impl From<Vec2> for PropertyValue {
    fn from(value: Vec2) -> Self {
        Self::Vector2(value)
    }
}

impl From<Vec3> for PropertyValue {
    fn from(value: Vec3) -> Self {
        Self::Vector3(value)
    }
}

impl From<Quaternion> for PropertyValue {
    fn from(value: Quaternion) -> Self {
        Self::Quaternion(value)
    }
}

impl From<PropertyBag> for PropertyValue {
    fn from(value: PropertyBag) -> Self {
        Self::Bag(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<PropertyValue> for i32 {
    type Error = PropertyError;

    fn try_from(value: PropertyValue) -> Result<Self, Self::Error> {
        value
            .as_i32()
            .ok_or_else(|| PropertyError::unexpected_type("int", value.type_name()))
    }
}

impl TryFrom<PropertyValue> for bool {
    type Error = PropertyError;

    fn try_from(value: PropertyValue) -> Result<Self, Self::Error> {
        value
            .as_bool()
            .ok_or_else(|| PropertyError::unexpected_type("bool", value.type_name()))
    }
}

impl TryFrom<PropertyValue> for f32 {
    type Error = PropertyError;

    fn try_from(value: PropertyValue) -> Result<Self, Self::Error> {
        value
            .as_f32()
            .ok_or_else(|| PropertyError::unexpected_type("float", value.type_name()))
    }
}

impl TryFrom<PropertyValue> for String {
    type Error = PropertyError;

    fn try_from(value: PropertyValue) -> Result<Self, Self::Error> {
        match value {
            PropertyValue::Text(text) => Ok(text),
            other => Err(PropertyError::unexpected_type("string", other.type_name())),
        }
    }
}
