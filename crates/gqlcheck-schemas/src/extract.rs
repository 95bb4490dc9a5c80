//! Root type field extraction
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::FieldDescriptor;
use crate::error::{SchemaError, SchemaResult};
use crate::schema::NormalizedSchema;

/// The `(field name, descriptor)` pairs of `root_type`, in declaration order
pub fn extract_fields<'a>(
    schema: &'a NormalizedSchema,
    root_type: &str,
) -> SchemaResult<Vec<(&'a str, &'a FieldDescriptor)>> {
    let definition = schema
        .definition(root_type)
        .ok_or_else(|| SchemaError::unknown_root_type(root_type))?;

    Ok(definition
        .properties
        .iter()
        .map(|(name, descriptor)| (name.as_str(), descriptor))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, migrate, IntermediateSchema, TypeDefinition};

    #[test]
    fn test_extract_preserves_order() {
        let schema = migrate(convert("type T { z: Int a: String! m: Boolean }").unwrap());
        let names: Vec<_> = extract_fields(&schema, "T")
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_extract_unknown_root_type() {
        let schema = migrate(convert("type T { a: Int }").unwrap());
        let err = extract_fields(&schema, "Missing").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownRootType(ref name) if name == "Missing"));
    }

    #[test]
    fn test_extract_empty_type() {
        let mut intermediate = IntermediateSchema::default();
        intermediate
            .definitions
            .insert("Marker".to_string(), TypeDefinition::new("Marker"));
        let schema = migrate(intermediate);
        assert!(extract_fields(&schema, "Marker").unwrap().is_empty());
    }
}
