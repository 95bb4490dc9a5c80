//! Declarative validator descriptions
//!
//! Lets bindings live in a JSON or YAML file:
//!
//! ```yaml
//! Email:
//!   type: string
//!   format: email
//! TokenData:
//!   type: object
//!   fields:
//!     name: { type: string, required: true }
//!     id: { type: string, required: true }
//! ```
//!
//! A description that does not parse as a validator is reported as
//! [`ConfigError::NotAValidator`] for the binding name.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::custom_types::{is_address, is_hex};
use crate::error::ConfigError;
use crate::validation::{
    ArrayValidator, BooleanValidator, NumberValidator, ObjectValidator, SharedValidator,
    StringValidator, ValidatorExt,
};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Kind of declared validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

/// Built-in string formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Email,
    Hex,
    EthereumAddress,
}

/// One declared validator
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingSpec {
    #[serde(rename = "type")]
    pub kind: SpecKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub format: Option<StringFormat>,
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub pattern: Option<String>,
    /// Message for a failing `pattern`; `${path}` is interpolated
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Option<Box<BindingSpec>>,
    #[serde(default)]
    pub fields: IndexMap<String, BindingSpec>,
}

/// Build the validator declared for `name`
pub fn build(name: &str, value: &Value) -> Result<SharedValidator, ConfigError> {
    let spec: BindingSpec = serde_json::from_value(value.clone()).map_err(|e| {
        tracing::debug!(binding = name, error = %e, "Binding is not a validator description");
        ConfigError::not_a_validator(name)
    })?;
    spec.build(name)
}

impl BindingSpec {
    /// Build this description into a validator node
    pub fn build(&self, name: &str) -> Result<SharedValidator, ConfigError> {
        let has_string_options = self.format.is_some()
            || self.length.is_some()
            || self.pattern.is_some()
            || self.message.is_some();
        if has_string_options && self.kind != SpecKind::String {
            return Err(ConfigError::invalid_binding(
                name,
                "format, length, pattern and message apply to strings only",
            ));
        }
        if self.items.is_some() && self.kind != SpecKind::Array {
            return Err(ConfigError::invalid_binding(name, "items apply to arrays only"));
        }
        if !self.fields.is_empty() && self.kind != SpecKind::Object {
            return Err(ConfigError::invalid_binding(name, "fields apply to objects only"));
        }

        let validator: SharedValidator = match self.kind {
            SpecKind::String => Arc::new(self.build_string(name)?),
            SpecKind::Integer => Arc::new(NumberValidator::new().integer()),
            SpecKind::Number => Arc::new(NumberValidator::new()),
            SpecKind::Boolean => Arc::new(BooleanValidator::new()),
            SpecKind::Array => match &self.items {
                Some(items) => items.build(name)?.array_of(),
                None => Arc::new(ArrayValidator::new()),
            },
            SpecKind::Object => {
                let mut object = ObjectValidator::new();
                for (field, spec) in &self.fields {
                    object = object.field(field, spec.build(&format!("{}.{}", name, field))?);
                }
                Arc::new(object)
            }
        };

        Ok(if self.required {
            validator.required()
        } else {
            validator
        })
    }

    fn build_string(&self, name: &str) -> Result<StringValidator, ConfigError> {
        let mut validator = StringValidator::new();

        match self.format {
            Some(StringFormat::Email) => validator = validator.email(),
            Some(StringFormat::Hex) => {
                validator = validator.test("is-hex", "${path} must be a valid hex value", is_hex)
            }
            Some(StringFormat::EthereumAddress) => {
                validator = validator.test(
                    "is-address",
                    "${path} must be a valid Ethereum address",
                    is_address,
                )
            }
            None => {}
        }

        if let Some(pattern) = &self.pattern {
            let regex = Regex::new(pattern)
                .map_err(|e| ConfigError::invalid_binding(name, format!("invalid pattern: {}", e)))?;
            validator = match &self.message {
                Some(message) => validator.test("matches", message.clone(), move |s| regex.is_match(s)),
                None => validator.matches(regex),
            };
        } else if self.message.is_some() {
            return Err(ConfigError::invalid_binding(name, "message requires a pattern"));
        }

        if let Some(length) = self.length {
            validator = validator.length(length);
        }

        Ok(validator)
    }
}
