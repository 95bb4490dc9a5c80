//! Intermediate and normalized schema types
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::FieldDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version marker stamped on every normalized schema
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// One object-like GraphQL type with its fields in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub title: String,
    #[serde(default)]
    pub properties: IndexMap<String, FieldDescriptor>,
}

impl TypeDefinition {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            properties: IndexMap::new(),
        }
    }

    /// Names of the required fields, in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, d)| d.required)
            .map(|(name, _)| name.as_str())
    }
}

/// Output of the SDL converter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermediateSchema {
    #[serde(default)]
    pub definitions: IndexMap<String, TypeDefinition>,
}

/// A converted schema tagged with its version marker
///
/// Fields are read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSchema {
    #[serde(rename = "$schema")]
    version: String,
    #[serde(flatten)]
    schema: IntermediateSchema,
}

impl NormalizedSchema {
    /// The `$schema` marker
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn definitions(&self) -> &IndexMap<String, TypeDefinition> {
        &self.schema.definitions
    }

    pub fn definition(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.schema.definitions.get(type_name)
    }
}

/// Tag a converted schema with the draft-07 `$schema` marker
pub fn migrate(schema: IntermediateSchema) -> NormalizedSchema {
    NormalizedSchema {
        version: DRAFT_07.to_string(),
        schema,
    }
}
