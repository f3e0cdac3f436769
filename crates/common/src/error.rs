//! Error types for typed property access and tolerance validation.
//!
//! The bag operations themselves never fail; these errors only surface when a
//! caller asks for a value as a specific type or loads a tolerance config.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropertyError {
    /// The stored value has a different type than the one requested
    #[error("Unexpected property type: expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// A tolerance must be finite and not negative
    #[error("Invalid tolerance for {field}: {value}")]
    InvalidTolerance { field: &'static str, value: f32 },
}

impl PropertyError {
    /// Create a type mismatch error
    pub fn unexpected_type(expected: &'static str, found: &'static str) -> Self {
        Self::UnexpectedType { expected, found }
    }

    /// Create an invalid tolerance error
    pub fn invalid_tolerance(field: &'static str, value: f32) -> Self {
        Self::InvalidTolerance { field, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_type_message() {
        let err = PropertyError::unexpected_type("int", "string");
        assert_eq!(
            err.to_string(),
            "Unexpected property type: expected int, found string"
        );
    }

    #[test]
    fn test_invalid_tolerance_message() {
        let err = PropertyError::invalid_tolerance("rotation_degrees", -1.0);
        assert_eq!(err.to_string(), "Invalid tolerance for rotation_degrees: -1");
    }
}
