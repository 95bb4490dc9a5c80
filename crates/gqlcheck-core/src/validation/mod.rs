//! Validation engine
//!
//! A small tree of [`Validator`] nodes that walks a JSON value and reports
//! every failing field with a yup-compatible message:
//!
//! - **Scalars**: strict string, number/integer and boolean checks
//! - **Required**: rejects absent and blank (`""`, `[]`) values
//! - **Lists**: element-indexed validation (`numbers[0]`)
//! - **Objects**: field-by-field validation in declaration order
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod combinators;
pub mod error;
pub mod message;
pub mod primitives;

pub use base::{SharedValidator, ValidationContext, Validator, ValidatorExt};
pub use combinators::{ArrayValidator, ObjectValidator, Required};
pub use error::{FieldError, FieldErrors};
pub use primitives::{BooleanValidator, NumberValidator, StringPredicate, StringTest, StringValidator};
