//! Error types for schema conversion and lookup
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while converting SDL or reading the converted schema
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The SDL text could not be parsed
    #[error("Failed to parse GraphQL schema: {0}")]
    Parse(#[from] async_graphql_parser::Error),

    /// The requested root type has no definition in the schema
    #[error("Unknown root type '{0}' in schema")]
    UnknownRootType(String),

    /// A serialized field descriptor does not describe a primitive, array or reference
    #[error("Invalid descriptor for field '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },
}

impl SchemaError {
    /// Create an unknown root type error
    pub fn unknown_root_type(name: impl Into<String>) -> Self {
        Self::UnknownRootType(name.into())
    }

    /// Create an invalid descriptor error
    pub fn invalid_descriptor(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SchemaError::unknown_root_type("Person");
        assert_eq!(err.to_string(), "Unknown root type 'Person' in schema");

        let err = SchemaError::invalid_descriptor("age", "missing items");
        assert_eq!(err.to_string(), "Invalid descriptor for field 'age': missing items");
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = async_graphql_parser::parse_schema("type {").unwrap_err();
        let err = SchemaError::from(parse_err);
        assert!(matches!(err, SchemaError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse GraphQL schema"));
    }
}
