//! gqlcheck Schemas - GraphQL SDL to intermediate schema conversion
//!
//! This crate turns GraphQL type definitions into the intermediate,
//! JSON-schema-like structure that the gqlcheck validator builder consumes:
//!
//! - **Conversion**: SDL text to `{ definitions: { Type: { properties } } }`
//! - **Normalization**: tagging the converted schema with a `$schema` marker
//! - **Extraction**: the ordered field descriptors of a root type
//!
//! ## Quick Start
//!
//! ```rust
//! use gqlcheck_schemas::{convert, extract_fields, migrate, FieldKind, PrimitiveType};
//!
//! let schema = migrate(convert("type Person { name: String! age: Int }").unwrap());
//! let fields = extract_fields(&schema, "Person").unwrap();
//!
//! assert_eq!(fields[0].0, "name");
//! assert!(fields[0].1.required);
//! assert_eq!(fields[1].1.kind, FieldKind::Primitive(PrimitiveType::Integer));
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod convert;
pub mod descriptor;
pub mod error;
pub mod extract;
pub mod schema;

pub use convert::convert;
pub use descriptor::{FieldDescriptor, FieldKind, PrimitiveType, REF_PREFIX};
pub use error::{SchemaError, SchemaResult};
pub use extract::extract_fields;
pub use schema::{migrate, IntermediateSchema, NormalizedSchema, TypeDefinition, DRAFT_07};
