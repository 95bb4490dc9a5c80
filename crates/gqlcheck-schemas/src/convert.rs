//! GraphQL SDL to intermediate schema conversion
//!
//! Object, interface and input object definitions become entries in
//! `definitions`; their fields become descriptors. Enums, unions, scalars,
//! directives and schema definitions carry no field shape and are skipped.
//! Named types other than the built-in scalars are kept as opaque references,
//! whether or not the SDL defines them.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::{FieldDescriptor, FieldKind, PrimitiveType};
use crate::error::SchemaResult;
use crate::schema::{IntermediateSchema, TypeDefinition};
use async_graphql_parser::types::{BaseType, Type, TypeKind, TypeSystemDefinition};
use tracing::{debug, warn};

/// Convert SDL text into the intermediate schema
pub fn convert(sdl: &str) -> SchemaResult<IntermediateSchema> {
    let document = async_graphql_parser::parse_schema(sdl)?;
    let mut schema = IntermediateSchema::default();

    for definition in document.definitions {
        let TypeSystemDefinition::Type(type_definition) = definition else {
            continue;
        };
        let type_definition = type_definition.node;
        let type_name = type_definition.name.node.to_string();

        let fields: Vec<(String, &Type)> = match &type_definition.kind {
            TypeKind::Object(object) => object
                .fields
                .iter()
                .map(|f| (f.node.name.node.to_string(), &f.node.ty.node))
                .collect(),
            TypeKind::Interface(interface) => interface
                .fields
                .iter()
                .map(|f| (f.node.name.node.to_string(), &f.node.ty.node))
                .collect(),
            TypeKind::InputObject(input) => input
                .fields
                .iter()
                .map(|f| (f.node.name.node.to_string(), &f.node.ty.node))
                .collect(),
            _ => continue,
        };

        if !type_definition.extend {
            if schema.definitions.contains_key(&type_name) {
                warn!(type_name = %type_name, "Duplicate type definition, later definition wins");
            }
            schema
                .definitions
                .insert(type_name.clone(), TypeDefinition::new(&type_name));
        }
        let entry = schema
            .definitions
            .entry(type_name.clone())
            .or_insert_with(|| TypeDefinition::new(&type_name));

        for (field_name, ty) in fields {
            let descriptor = describe(&field_name, ty);
            entry.properties.insert(field_name, descriptor);
        }
    }

    debug!(types = schema.definitions.len(), "Converted GraphQL schema");
    Ok(schema)
}

/// Build the descriptor of one (possibly nested list) GraphQL type
fn describe(name: &str, ty: &Type) -> FieldDescriptor {
    let kind = match &ty.base {
        BaseType::Named(type_name) => match PrimitiveType::from_graphql(type_name.as_str()) {
            Some(primitive) => FieldKind::Primitive(primitive),
            None => FieldKind::CustomRef(type_name.to_string()),
        },
        BaseType::List(inner) => FieldKind::ArrayOf(Box::new(describe(name, inner))),
    };

    FieldDescriptor {
        name: name.to_string(),
        required: !ty.nullable,
        kind,
    }
}
