//! Tests for the required-only validator

use gqlcheck_core::legacy;
use pretty_assertions::assert_eq;
use serde_json::json;

const REGISTER_FORM: &str = "
    interface RegisterForm {
        name: String!
        email: String!
        organization: String
        jobTitle: String
    }
";

#[test]
fn test_missing_required_props() {
    let errors = legacy::validate(REGISTER_FORM, "RegisterForm", &json!({})).unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors, vec!["name is required", "email is required"]);
}

#[test]
fn test_no_required_props() {
    let schema = "
        interface RegisterForm {
            name: String
            email: String
            organization: String
            jobTitle: String
        }
    ";
    assert!(legacy::validate(schema, "RegisterForm", &json!({})).unwrap().is_empty());
}

#[test]
fn test_present_values_pass() {
    let data = json!({"name": "Ada", "email": "ada@example.com"});
    assert!(legacy::validate(REGISTER_FORM, "RegisterForm", &data).unwrap().is_empty());
}

#[test]
fn test_empty_schema() {
    assert!(legacy::validate("", "RegisterForm", &json!({})).unwrap().is_empty());
}
