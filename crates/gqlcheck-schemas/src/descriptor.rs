//! Field descriptors of the intermediate schema
//!
//! A descriptor records one field's requiredness and shape: a primitive,
//! a list of another descriptor, or a reference to a named type. On the wire
//! descriptors keep the JSON-schema flavour of the converted schema
//! (`type`, `items`, `$ref`), so a converted schema can be stored and
//! reloaded as plain JSON.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of `$ref` markers pointing into the schema definitions
pub const REF_PREFIX: &str = "#/definitions/";

/// Primitive JSON types a GraphQL scalar maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Integer,
    Number,
    Boolean,
}

impl PrimitiveType {
    /// All primitive types, in binding-table order
    pub const ALL: [PrimitiveType; 4] = [
        PrimitiveType::String,
        PrimitiveType::Integer,
        PrimitiveType::Number,
        PrimitiveType::Boolean,
    ];

    /// Key used for this primitive in a capability binding table
    pub fn key(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
        }
    }

    /// Map a built-in GraphQL scalar name to its primitive type
    pub fn from_graphql(name: &str) -> Option<Self> {
        match name {
            "String" | "ID" => Some(PrimitiveType::String),
            "Int" => Some(PrimitiveType::Integer),
            "Float" => Some(PrimitiveType::Number),
            "Boolean" => Some(PrimitiveType::Boolean),
            _ => None,
        }
    }

    /// Parse a primitive from its binding key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Shape of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A built-in scalar
    Primitive(PrimitiveType),
    /// A list whose elements follow the inner descriptor
    ArrayOf(Box<FieldDescriptor>),
    /// A named type outside the primitives, bound through the config
    CustomRef(String),
}

/// One field of a type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor", into = "RawDescriptor")]
pub struct FieldDescriptor {
    pub name: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn primitive(name: impl Into<String>, primitive: PrimitiveType, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            kind: FieldKind::Primitive(primitive),
        }
    }

    pub fn array_of(name: impl Into<String>, items: FieldDescriptor, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            kind: FieldKind::ArrayOf(Box::new(items)),
        }
    }

    pub fn custom(name: impl Into<String>, type_name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            kind: FieldKind::CustomRef(type_name.into()),
        }
    }

    /// The JSON-schema `type` of this descriptor, if it has one
    pub fn type_name(&self) -> Option<&'static str> {
        match &self.kind {
            FieldKind::Primitive(p) => Some(p.key()),
            FieldKind::ArrayOf(_) => Some("array"),
            FieldKind::CustomRef(_) => None,
        }
    }

    /// The referenced type name, for custom references
    pub fn custom_type_ref(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::CustomRef(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDescriptor {
    title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    type_name: Option<String>,
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Box<RawDescriptor>>,
    #[serde(default)]
    required: bool,
}

impl TryFrom<RawDescriptor> for FieldDescriptor {
    type Error = SchemaError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let kind = match raw.type_name.as_deref() {
            Some("array") => {
                let items = raw
                    .items
                    .ok_or_else(|| SchemaError::invalid_descriptor(&raw.title, "array without items"))?;
                FieldKind::ArrayOf(Box::new(FieldDescriptor::try_from(*items)?))
            }
            Some(other) => PrimitiveType::from_key(other)
                .map(FieldKind::Primitive)
                .ok_or_else(|| {
                    SchemaError::invalid_descriptor(&raw.title, format!("unsupported type '{}'", other))
                })?,
            None => {
                let reference = raw
                    .reference
                    .ok_or_else(|| SchemaError::invalid_descriptor(&raw.title, "neither type nor $ref"))?;
                let name = reference.strip_prefix(REF_PREFIX).unwrap_or(&reference);
                FieldKind::CustomRef(name.to_string())
            }
        };

        Ok(Self {
            name: raw.title,
            required: raw.required,
            kind,
        })
    }
}

impl From<FieldDescriptor> for RawDescriptor {
    fn from(descriptor: FieldDescriptor) -> Self {
        let (type_name, reference, items) = match descriptor.kind {
            FieldKind::Primitive(p) => (Some(p.key().to_string()), None, None),
            FieldKind::ArrayOf(inner) => (
                Some("array".to_string()),
                None,
                Some(Box::new(RawDescriptor::from(*inner))),
            ),
            FieldKind::CustomRef(name) => (None, Some(format!("{}{}", REF_PREFIX, name)), None),
        };

        Self {
            title: descriptor.name,
            type_name,
            reference,
            items,
            required: descriptor.required,
        }
    }
}
