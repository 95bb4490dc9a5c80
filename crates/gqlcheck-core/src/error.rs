//! Error types for validator configuration and resolution
//!
//! Field-level validation failures are never errors in this sense: they are
//! returned as data. The types here signal a setup defect (a misconfigured
//! capability table or an unusable schema) and always reach the caller.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use gqlcheck_schemas::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gqlcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Misconfigured capability bindings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The schema references a type with no binding
    #[error("Please specify how to handle '{0}' in your config to use it in your schema.")]
    MissingBinding(String),

    /// A binding exists but cannot act as a validator
    #[error("{0} must be a valid validator.")]
    NotAValidator(String),

    /// The `array` binding cannot compose element validators
    #[error("'{0}' binding cannot validate list elements")]
    NotAnArrayValidator(String),

    /// A declared binding is well-formed but unusable (bad regex, ...)
    #[error("Invalid binding '{name}': {reason}")]
    InvalidBinding { name: String, reason: String },

    /// Bindings file could not be read
    #[error("Failed to read bindings file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Bindings content could not be parsed
    #[error("Failed to parse bindings from '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    /// Bindings file extension is not recognized
    #[error("Unsupported bindings format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    pub fn missing_binding(name: impl Into<String>) -> Self {
        Self::MissingBinding(name.into())
    }

    pub fn not_a_validator(name: impl Into<String>) -> Self {
        Self::NotAValidator(name.into())
    }

    pub fn invalid_binding(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBinding {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn parse(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::Parse {
            path,
            reason: reason.into(),
        }
    }
}

/// Top-level error for building or running a GraphQL validator
#[derive(Error, Debug)]
pub enum Error {
    /// Capability bindings cannot serve the schema
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// SDL could not be converted, or the root type is unknown
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl Error {
    /// Whether this error comes from the capability bindings
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether this error comes from the schema text or root type lookup
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}
