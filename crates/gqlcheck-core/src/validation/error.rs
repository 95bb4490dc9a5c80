//! Field-level validation failures
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One failed check on one field
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the offending value, e.g. `tokens[0].name`
    pub path: String,
    /// Human-readable message
    pub message: String,
    /// Name of the check that failed (`required`, `typeError`, `email`, ...)
    pub rule: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl FieldError {
    pub fn new<P, M, R>(path: P, message: M, rule: R) -> Self
    where
        P: Into<String>,
        M: Into<String>,
        R: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
            rule: rule.into(),
        }
    }
}

/// Ordered collection of field errors
///
/// A non-zero `limit` caps how many errors are kept; validators stop
/// descending once the collection is full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
    limit: usize,
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s) occurred:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl FieldErrors {
    /// Create an unbounded collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection keeping at most `limit` errors (0 = unlimited)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            errors: Vec::new(),
            limit,
        }
    }

    /// Add an error unless the collection is full
    pub fn push(&mut self, error: FieldError) {
        if !self.is_full() {
            self.errors.push(error);
        }
    }

    pub fn is_full(&self) -> bool {
        self.limit > 0 && self.errors.len() >= self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// The messages, in the order they were reported
    pub fn into_messages(self) -> Vec<String> {
        self.errors.into_iter().map(|e| e.message).collect()
    }

    /// Ok if no errors, Err otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors, limit: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_caps_errors() {
        let mut errors = FieldErrors::with_limit(1);
        errors.push(FieldError::new("a", "a is a required field", "required"));
        assert!(errors.is_full());
        errors.push(FieldError::new("b", "b is a required field", "required"));
        assert_eq!(errors.into_messages(), vec!["a is a required field"]);
    }

    #[test]
    fn test_unlimited_keeps_order() {
        let mut errors = FieldErrors::new();
        errors.push(FieldError::new("a", "first", "required"));
        errors.push(FieldError::new("b", "second", "required"));
        assert!(!errors.is_full());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.into_messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let errors = FieldErrors::from(vec![FieldError::new("a", "boom", "custom")]);
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.to_string(), "1 validation error(s) occurred:\n1. boom");
    }
}
