//! Running an assembled validator against data
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::ValidationConfig;
use crate::validation::{FieldErrors, ObjectValidator, ValidationContext, Validator};
use serde_json::{Map, Value};

/// Validate `data` and return the failure messages
///
/// Absent data is validated as an empty object. An empty list means the
/// data is valid.
pub fn execute(
    validator: &ObjectValidator,
    data: Option<&Value>,
    config: &ValidationConfig,
) -> Vec<String> {
    let empty = Value::Object(Map::new());
    let data = data.unwrap_or(&empty);

    let mut errors = FieldErrors::with_limit(config.error_limit());
    validator.check(data, &ValidationContext::root(), &mut errors);

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "Validation failed");
    }
    errors.into_messages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{message, SharedValidator, StringValidator, ValidatorExt};
    use serde_json::json;
    use std::sync::Arc;

    fn person() -> ObjectValidator {
        let string: SharedValidator = Arc::new(StringValidator::new());
        ObjectValidator::new()
            .field("name", string.required())
            .field("nickname", string.clone())
            .field("city", string.required())
    }

    #[test]
    fn test_absent_data_is_empty_object() {
        let config = ValidationConfig::default();
        assert_eq!(
            execute(&person(), None, &config),
            vec!["name is a required field", "city is a required field"]
        );
        assert_eq!(
            execute(&person(), None, &config),
            execute(&person(), Some(&json!({})), &config)
        );
    }

    #[test]
    fn test_null_data_is_a_type_error() {
        assert_eq!(
            execute(&person(), Some(&Value::Null), &ValidationConfig::default()),
            vec![format!(
                "this must be a `object` type, but the final value was: `null`.{}",
                message::NULLABLE_HINT
            )]
        );
    }

    #[test]
    fn test_abort_early() {
        let config = ValidationConfig::default().with_abort_early();
        assert_eq!(execute(&person(), None, &config), vec!["name is a required field"]);
    }

    #[test]
    fn test_valid_data() {
        let data = json!({"name": "Ada", "city": "London", "extra": 1});
        assert!(execute(&person(), Some(&data), &ValidationConfig::default()).is_empty());
    }
}
