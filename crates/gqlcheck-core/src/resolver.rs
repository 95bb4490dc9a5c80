//! Field descriptor to validator resolution
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::CapabilityBindings;
use crate::error::ConfigError;
use crate::validation::{SharedValidator, ValidatorExt};
use gqlcheck_schemas::{FieldDescriptor, FieldKind};

/// Binding key of the list capability
pub const ARRAY_KEY: &str = "array";

/// Resolve a descriptor into a validator node
///
/// Lists resolve their element first, then compose the `array` binding
/// around it. Required descriptors get a fresh required wrap; bindings are
/// never modified.
pub fn resolve(
    bindings: &CapabilityBindings,
    descriptor: &FieldDescriptor,
) -> Result<SharedValidator, ConfigError> {
    let validator = match &descriptor.kind {
        FieldKind::ArrayOf(items) => {
            let items = resolve(bindings, items)?;
            let array = lookup(bindings, ARRAY_KEY)?;
            array
                .of(items)
                .ok_or_else(|| ConfigError::NotAnArrayValidator(ARRAY_KEY.to_string()))?
        }
        FieldKind::CustomRef(type_name) => lookup(bindings, type_name)?,
        FieldKind::Primitive(primitive) => lookup(bindings, primitive.key())?,
    };

    Ok(if descriptor.required {
        validator.required()
    } else {
        validator
    })
}

fn lookup(bindings: &CapabilityBindings, name: &str) -> Result<SharedValidator, ConfigError> {
    bindings
        .get(name)
        .ok_or_else(|| ConfigError::missing_binding(name))?
        .resolve(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{StringValidator, Validator};
    use gqlcheck_schemas::PrimitiveType;
    use serde_json::json;

    fn messages(validator: &SharedValidator, value: serde_json::Value) -> Vec<String> {
        let mut errors = crate::validation::FieldErrors::new();
        let ctx = crate::validation::ValidationContext::root().child("field");
        validator.validate_at(Some(&value), &ctx, &mut errors);
        errors.into_messages()
    }

    #[test]
    fn test_resolve_primitive() {
        let bindings = CapabilityBindings::defaults();
        let descriptor = FieldDescriptor::primitive("field", PrimitiveType::Integer, true);
        let validator = resolve(&bindings, &descriptor).unwrap();

        assert!(messages(&validator, json!(3)).is_empty());
        assert_eq!(messages(&validator, json!(3.5)), vec!["field must be an integer"]);
        assert_eq!(
            messages(&validator, json!(null)),
            vec![format!(
                "field must be a `number` type, but the final value was: `null`.{}",
                crate::validation::message::NULLABLE_HINT
            )]
        );
    }

    #[test]
    fn test_resolve_nested_array() {
        let bindings = CapabilityBindings::defaults();
        let descriptor = FieldDescriptor::array_of(
            "field",
            FieldDescriptor::array_of(
                "field",
                FieldDescriptor::primitive("field", PrimitiveType::Boolean, true),
                true,
            ),
            false,
        );
        let validator = resolve(&bindings, &descriptor).unwrap();

        assert!(messages(&validator, json!([[true], [false, true]])).is_empty());
        assert_eq!(
            messages(&validator, json!([[true], [], [1]])),
            vec![
                "field[1] is a required field",
                "field[2][0] must be a `boolean` type, but the final value was: `1`."
            ]
        );
    }

    #[test]
    fn test_missing_custom_binding() {
        let bindings = CapabilityBindings::defaults();
        let descriptor = FieldDescriptor::custom("id", "EthereumAddress", true);
        let err = resolve(&bindings, &descriptor).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please specify how to handle 'EthereumAddress' in your config to use it in your schema."
        );
    }

    #[test]
    fn test_declared_binding_without_validator() {
        let bindings = CapabilityBindings::defaults().with("Wrong", json!({}));
        let descriptor = FieldDescriptor::custom("wrong", "Wrong", true);
        let err = resolve(&bindings, &descriptor).unwrap_err();
        assert_eq!(err.to_string(), "Wrong must be a valid validator.");
    }

    #[test]
    fn test_missing_array_binding() {
        let mut bindings = CapabilityBindings::defaults();
        bindings.remove(ARRAY_KEY);
        let descriptor = FieldDescriptor::array_of(
            "tags",
            FieldDescriptor::primitive("tags", PrimitiveType::String, false),
            false,
        );
        assert!(matches!(
            resolve(&bindings, &descriptor),
            Err(ConfigError::MissingBinding(name)) if name == "array"
        ));
    }

    #[test]
    fn test_array_binding_must_compose() {
        let bindings =
            CapabilityBindings::defaults().with_validator(ARRAY_KEY, StringValidator::new());
        let descriptor = FieldDescriptor::array_of(
            "tags",
            FieldDescriptor::primitive("tags", PrimitiveType::String, false),
            false,
        );
        assert!(matches!(
            resolve(&bindings, &descriptor),
            Err(ConfigError::NotAnArrayValidator(_))
        ));
    }

    #[test]
    fn test_required_wrap_is_independent() {
        let bindings = CapabilityBindings::defaults()
            .with_validator("Email", StringValidator::new().email());
        let required = resolve(&bindings, &FieldDescriptor::custom("a", "Email", true)).unwrap();
        let optional = resolve(&bindings, &FieldDescriptor::custom("b", "Email", false)).unwrap();

        let mut errors = crate::validation::FieldErrors::new();
        let ctx = crate::validation::ValidationContext::root().child("field");
        required.validate_at(None, &ctx, &mut errors);
        optional.validate_at(None, &ctx, &mut errors);
        assert_eq!(errors.into_messages(), vec!["field is a required field"]);
        assert!(optional.validate(&json!("a@b.co")).is_ok());
    }
}
