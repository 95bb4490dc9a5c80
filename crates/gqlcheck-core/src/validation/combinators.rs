//! Composite validators: required wrap, list and object shape
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{SharedValidator, ValidationContext, Validator};
use crate::validation::error::FieldErrors;
use crate::validation::message;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Rejects absent and blank values, then defers to the inner validator
#[derive(Debug, Clone)]
pub struct Required {
    inner: SharedValidator,
}

impl Required {
    pub fn new(inner: SharedValidator) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &SharedValidator {
        &self.inner
    }
}

impl Validator for Required {
    fn type_label(&self) -> &str {
        self.inner.type_label()
    }

    fn check(&self, value: &Value, ctx: &ValidationContext, errors: &mut FieldErrors) {
        if self.inner.is_blank(value) {
            ctx.report(errors, "required", message::required(ctx.path()));
        } else {
            self.inner.check(value, ctx, errors);
        }
    }

    fn is_blank(&self, value: &Value) -> bool {
        self.inner.is_blank(value)
    }

    fn of(&self, items: SharedValidator) -> Option<SharedValidator> {
        let array = self.inner.of(items)?;
        Some(Arc::new(Required::new(array)))
    }

    fn validate_at(&self, value: Option<&Value>, ctx: &ValidationContext, errors: &mut FieldErrors) {
        match value {
            None => ctx.report(errors, "required", message::required(ctx.path())),
            Some(value) => self.check(value, ctx, errors),
        }
    }
}

/// Strict list validator with an optional element validator
///
/// An empty list counts as missing when the list is required.
#[derive(Debug, Clone, Default)]
pub struct ArrayValidator {
    items: Option<SharedValidator>,
}

impl ArrayValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list validator whose elements follow `items`
    pub fn of_items(items: SharedValidator) -> Self {
        Self { items: Some(items) }
    }

    pub fn items(&self) -> Option<&SharedValidator> {
        self.items.as_ref()
    }
}

impl Validator for ArrayValidator {
    fn type_label(&self) -> &str {
        "array"
    }

    fn check(&self, value: &Value, ctx: &ValidationContext, errors: &mut FieldErrors) {
        let Value::Array(elements) = value else {
            ctx.type_error(errors, self.type_label(), value);
            return;
        };
        let Some(items) = &self.items else {
            return;
        };
        for (index, element) in elements.iter().enumerate() {
            if errors.is_full() {
                break;
            }
            items.validate_at(Some(element), &ctx.child_index(index), errors);
        }
    }

    fn is_blank(&self, value: &Value) -> bool {
        matches!(value, Value::Array(elements) if elements.is_empty())
    }

    fn of(&self, items: SharedValidator) -> Option<SharedValidator> {
        Some(Arc::new(Self::of_items(items)))
    }
}

/// Object shape validator keyed by field name
///
/// Fields are checked in insertion order; keys without a validator are ignored.
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    fields: IndexMap<String, SharedValidator>,
}

impl ObjectValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the validator of `name`
    pub fn field(mut self, name: impl Into<String>, validator: SharedValidator) -> Self {
        self.fields.insert(name.into(), validator);
        self
    }

    pub fn fields(&self) -> &IndexMap<String, SharedValidator> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Validator for ObjectValidator {
    fn type_label(&self) -> &str {
        "object"
    }

    fn check(&self, value: &Value, ctx: &ValidationContext, errors: &mut FieldErrors) {
        let Value::Object(map) = value else {
            ctx.type_error(errors, self.type_label(), value);
            return;
        };
        for (name, validator) in &self.fields {
            if errors.is_full() {
                break;
            }
            validator.validate_at(map.get(name), &ctx.child(name), errors);
        }
    }
}
