//! Capability bindings and validation settings
//!
//! A capability binding tells the validator builder how to check one type:
//! a primitive key (`string`, `integer`, `number`, `boolean`, `array`) or
//! the name of a custom type referenced by the schema. Bindings are either
//! live [`Validator`]s or declarative descriptions loaded from JSON/YAML;
//! declarative bindings are only interpreted when a schema needs them.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod declarative;
pub mod loader;

use crate::error::ConfigError;
use crate::validation::{
    ArrayValidator, BooleanValidator, NumberValidator, SharedValidator, StringValidator, Validator,
};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

pub use declarative::BindingSpec;
pub use loader::{BindingsLoader, Format};

/// How one type is validated
#[derive(Debug, Clone)]
pub enum Binding {
    /// A ready validator
    Validator(SharedValidator),
    /// A declarative description, interpreted at resolution time
    Declared(Value),
}

impl Binding {
    pub fn validator<V: Validator + 'static>(validator: V) -> Self {
        Self::Validator(Arc::new(validator))
    }

    /// The validator for this binding, building declared ones on demand
    pub fn resolve(&self, name: &str) -> Result<SharedValidator, ConfigError> {
        match self {
            Binding::Validator(validator) => Ok(Arc::clone(validator)),
            Binding::Declared(value) => declarative::build(name, value),
        }
    }
}

impl From<SharedValidator> for Binding {
    fn from(validator: SharedValidator) -> Self {
        Self::Validator(validator)
    }
}

impl From<Value> for Binding {
    fn from(value: Value) -> Self {
        Self::Declared(value)
    }
}

/// Mapping from type key to binding
#[derive(Debug, Clone, Default)]
pub struct CapabilityBindings {
    bindings: IndexMap<String, Binding>,
}

impl CapabilityBindings {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict bindings for the primitive keys and `array`
    pub fn defaults() -> Self {
        Self::new()
            .with_validator("string", StringValidator::new())
            .with_validator("integer", NumberValidator::new().integer())
            .with_validator("number", NumberValidator::new())
            .with_validator("boolean", BooleanValidator::new())
            .with_validator("array", ArrayValidator::new())
    }

    pub fn with(mut self, name: impl Into<String>, binding: impl Into<Binding>) -> Self {
        self.insert(name, binding);
        self
    }

    pub fn with_validator<V: Validator + 'static>(self, name: impl Into<String>, validator: V) -> Self {
        self.with(name, Binding::validator(validator))
    }

    pub fn insert(&mut self, name: impl Into<String>, binding: impl Into<Binding>) -> Option<Binding> {
        self.bindings.insert(name.into(), binding.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Overlay these bindings on `base`; entries here win
    pub fn merge_over(self, base: CapabilityBindings) -> Self {
        let mut merged = base;
        merged.bindings.extend(self.bindings);
        merged
    }

    /// Declared bindings from a JSON object of `name → description`
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let Value::Object(map) = value else {
            return Err(ConfigError::invalid_binding(
                "<root>",
                "bindings must be a mapping of type names to validator descriptions",
            ));
        };
        Ok(Self {
            bindings: map
                .into_iter()
                .map(|(name, spec)| (name, Binding::Declared(spec)))
                .collect(),
        })
    }
}

/// Validation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Stop at the first failing field
    pub abort_early: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            abort_early: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Collect every error
    pub fn collect_all() -> Self {
        Self::default()
    }

    /// Stop at the first error
    pub fn with_abort_early(mut self) -> Self {
        self.abort_early = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Error cap to apply, 0 meaning unlimited
    pub fn error_limit(&self) -> usize {
        if self.abort_early {
            1
        } else {
            self.max_errors
        }
    }
}
