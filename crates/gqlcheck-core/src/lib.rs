//! gqlcheck Core - Validate JSON payloads against GraphQL type definitions
//!
//! This crate turns a GraphQL type into a composed validator and runs it over
//! a `serde_json::Value`, reporting every failing field as a readable message.
//!
//! # Main Components
//!
//! - **Capability bindings**: how each primitive and custom type is validated
//! - **Resolver / assembler**: field descriptors to validator nodes
//! - **Validation engine**: strict type checks, required, lists and objects
//! - **Entry point**: [`configure`] and the partially applicable [`GqlValidate`]
//!
//! # Example
//!
//! ```
//! use gqlcheck_core::gql_validate;
//! use serde_json::json;
//!
//! let schema = "type Person { name: String! age: Int height: Float knowsJS: Boolean! }";
//! let errors = gql_validate()
//!     .validate_sync(schema, "Person", &json!({"age": 3.5}))
//!     .unwrap();
//!
//! assert_eq!(
//!     errors,
//!     vec![
//!         "name is a required field",
//!         "age must be an integer",
//!         "knowsJS is a required field",
//!     ]
//! );
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod assembler;
pub mod config;
pub mod custom_types;
pub mod error;
pub mod executor;
pub mod gql_validate;
pub mod legacy;
pub mod resolver;
pub mod validation;

// Re-export main types for convenience
pub use assembler::assemble;
pub use config::{Binding, BindingsLoader, CapabilityBindings, ValidationConfig};
pub use error::{ConfigError, Error, Result};
pub use executor::execute;
pub use gql_validate::{configure, configure_with, gql_validate, GqlValidate, Prepared, WithSchema};
pub use resolver::resolve;
pub use validation::{
    FieldError, FieldErrors, SharedValidator, ValidationContext, Validator, ValidatorExt,
};

// Schema types callers need to drive the pipeline by hand
pub use gqlcheck_schemas::{FieldDescriptor, FieldKind, NormalizedSchema, SchemaError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
