//! Base validator trait and validation context
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::validation::combinators::{ArrayValidator, Required};
use crate::validation::error::{FieldError, FieldErrors};
use crate::validation::message;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Path of the value currently being validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    path: String,
}

impl ValidationContext {
    /// Context for the validated document itself
    pub fn root() -> Self {
        Self::default()
    }

    /// Child context for an object field
    pub fn child<P: AsRef<str>>(&self, field: P) -> Self {
        let path = if self.path.is_empty() {
            field.as_ref().to_string()
        } else {
            format!("{}.{}", self.path, field.as_ref())
        };
        Self { path }
    }

    /// Child context for an array element
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    /// Path as shown in messages; the document itself is `this`
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "this"
        } else {
            &self.path
        }
    }

    /// Record a failure at this path
    pub fn report(&self, errors: &mut FieldErrors, rule: &str, message: String) {
        errors.push(FieldError::new(self.path(), message, rule));
    }

    /// Record a type mismatch at this path
    pub fn type_error(&self, errors: &mut FieldErrors, expected: &str, value: &Value) {
        self.report(errors, "typeError", message::type_error(self.path(), expected, value));
    }
}

/// Validator shared between fields, schemas and concurrent calls
pub type SharedValidator = Arc<dyn Validator>;

/// A node of a composed validator tree
///
/// Absent values are accepted unless the node is wrapped with
/// [`ValidatorExt::required`]. Nodes are not nullable: `null` reaches
/// [`Validator::check`] and fails its type check.
pub trait Validator: fmt::Debug + Send + Sync {
    /// Type label used in type errors (`string`, `number`, ...)
    fn type_label(&self) -> &str;

    /// Check a present value, `null` included
    fn check(&self, value: &Value, ctx: &ValidationContext, errors: &mut FieldErrors);

    /// Whether a present value still counts as missing for a required wrap
    fn is_blank(&self, _value: &Value) -> bool {
        false
    }

    /// Compose this validator as the list validator of `items`
    ///
    /// Returns `None` for validators that do not validate lists.
    fn of(&self, _items: SharedValidator) -> Option<SharedValidator> {
        None
    }

    /// Validate a possibly absent value
    fn validate_at(&self, value: Option<&Value>, ctx: &ValidationContext, errors: &mut FieldErrors) {
        if let Some(value) = value {
            self.check(value, ctx, errors);
        }
    }

    /// Validate a document, collecting every failure
    fn validate(&self, value: &Value) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        self.check(value, &ValidationContext::root(), &mut errors);
        errors.into_result()
    }
}

/// Wrappers producing new validator nodes from shared ones
pub trait ValidatorExt {
    /// A new node that also rejects absent and blank values
    fn required(&self) -> SharedValidator;

    /// A new list node whose elements follow this validator
    fn array_of(&self) -> SharedValidator;
}

impl ValidatorExt for SharedValidator {
    fn required(&self) -> SharedValidator {
        Arc::new(Required::new(Arc::clone(self)))
    }

    fn array_of(&self) -> SharedValidator {
        Arc::new(ArrayValidator::of_items(Arc::clone(self)))
    }
}
