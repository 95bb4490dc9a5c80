//! Required-only validation
//!
//! The first generation of the validator: it only checks that required
//! fields carry a truthy value, ignoring types and custom references, and
//! needs no bindings.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use gqlcheck_schemas::{convert, extract_fields, migrate, SchemaResult};
use serde_json::Value;

/// Report `"<field> is required"` for each required field without a value
///
/// A value is missing when it is absent or falsy: `null`, `false`, `0` or
/// `""`.
pub fn validate(sdl: &str, root_type: &str, data: &Value) -> SchemaResult<Vec<String>> {
    if sdl.is_empty() {
        return Ok(Vec::new());
    }

    let schema = migrate(convert(sdl)?);
    let errors = extract_fields(&schema, root_type)?
        .into_iter()
        .filter(|(name, descriptor)| descriptor.required && !is_truthy(data.get(name)))
        .map(|(name, _)| format!("{} is required", name))
        .collect();

    Ok(errors)
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlcheck_schemas::SchemaError;
    use serde_json::json;

    const REGISTER_FORM: &str = "
        interface RegisterForm {
            name: String!
            email: String!
            organization: String
            jobTitle: String
        }";

    #[test]
    fn test_missing_required() {
        assert_eq!(
            validate(REGISTER_FORM, "RegisterForm", &json!({})).unwrap(),
            vec!["name is required", "email is required"]
        );
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        let data = json!({"name": "", "email": 0});
        assert_eq!(validate(REGISTER_FORM, "RegisterForm", &data).unwrap().len(), 2);

        let data = json!({"name": false, "email": null});
        assert_eq!(validate(REGISTER_FORM, "RegisterForm", &data).unwrap().len(), 2);
    }

    #[test]
    fn test_types_are_ignored() {
        let data = json!({"name": 42, "email": ["not", "a", "string"]});
        assert!(validate(REGISTER_FORM, "RegisterForm", &data).unwrap().is_empty());
    }

    #[test]
    fn test_no_required_fields() {
        let sdl = "interface RegisterForm { name: String email: String }";
        assert!(validate(sdl, "RegisterForm", &json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_custom_references_need_no_bindings() {
        let sdl = "type Wallet { owner: EthereumAddress! }";
        assert_eq!(validate(sdl, "Wallet", &json!({})).unwrap(), vec!["owner is required"]);
    }

    #[test]
    fn test_unknown_root_type() {
        let err = validate(REGISTER_FORM, "Missing", &json!({})).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownRootType(_)));
    }
}
