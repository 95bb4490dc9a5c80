//! Strict scalar validators
//!
//! None of these coerce: `"16"` is not a number and `1` is not a boolean.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, Validator};
use crate::validation::error::FieldErrors;
use crate::validation::message;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Email pattern of the yup validation library
///
/// The local part is a dot-atom or a quoted string; the domain needs at
/// least one dot and a top-level label starting with a letter.
const EMAIL_PATTERN: &str = concat!(
    r"(?i)^(",
    // dot-atom local part
    r"[a-z0-9!#$%&'*+\-/=?^_`{|}~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+",
    r"(\.[a-z0-9!#$%&'*+\-/=?^_`{|}~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+)*",
    r"|",
    // quoted local part
    r#""((([ \t]*\r\n)?[ \t]+)?([\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]"#,
    r"|\\[\x01-\x09\x0b\x0c\x0d-\x7f\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]))*",
    r#"(([ \t]*\r\n)?[ \t]+)?""#,
    r")@(",
    // domain labels, each followed by a dot
    r"([a-z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
    r"|[a-z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}][a-z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*[a-z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])\.",
    r")+(",
    // top-level label
    r"[a-z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
    r"|[a-z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}][a-z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*[a-z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
    r")$",
);

static EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Predicate used by custom string tests
pub type StringPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A check applied to string values, in declaration order
#[derive(Clone)]
pub enum StringTest {
    Email,
    Length(usize),
    Matches(Regex),
    Custom {
        name: String,
        message: String,
        predicate: StringPredicate,
    },
}

impl fmt::Debug for StringTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringTest::Email => write!(f, "Email"),
            StringTest::Length(n) => write!(f, "Length({})", n),
            StringTest::Matches(re) => write!(f, "Matches({})", re.as_str()),
            StringTest::Custom { name, .. } => write!(f, "Custom({})", name),
        }
    }
}

impl StringTest {
    fn run(&self, value: &str, ctx: &ValidationContext, errors: &mut FieldErrors) {
        match self {
            StringTest::Email => {
                if !value.is_empty() && !email_regex().is_match(value) {
                    ctx.report(errors, "email", message::email(ctx.path()));
                }
            }
            StringTest::Length(length) => {
                if value.chars().count() != *length {
                    ctx.report(errors, "length", message::length(ctx.path(), *length));
                }
            }
            StringTest::Matches(regex) => {
                if !regex.is_match(value) {
                    ctx.report(errors, "matches", message::matches(ctx.path(), regex.as_str()));
                }
            }
            StringTest::Custom {
                name,
                message: template,
                predicate,
            } => {
                if !predicate(value) {
                    ctx.report(errors, name, message::interpolate(template, ctx.path()));
                }
            }
        }
    }
}

/// Strict string validator with optional tests
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    tests: Vec<StringTest>,
}

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self) -> Self {
        self.tests.push(StringTest::Email);
        self
    }

    /// Require exactly `length` characters
    pub fn length(mut self, length: usize) -> Self {
        self.tests.push(StringTest::Length(length));
        self
    }

    pub fn matches(mut self, regex: Regex) -> Self {
        self.tests.push(StringTest::Matches(regex));
        self
    }

    /// Add a named test; `${path}` in `message` is replaced by the field path
    pub fn test<F>(mut self, name: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.tests.push(StringTest::Custom {
            name: name.into(),
            message: message.into(),
            predicate: Arc::new(predicate),
        });
        self
    }

    pub fn tests(&self) -> &[StringTest] {
        &self.tests
    }
}

impl Validator for StringValidator {
    fn type_label(&self) -> &str {
        "string"
    }

    fn check(&self, value: &Value, ctx: &ValidationContext, errors: &mut FieldErrors) {
        let Value::String(s) = value else {
            ctx.type_error(errors, self.type_label(), value);
            return;
        };
        for test in &self.tests {
            test.run(s, ctx, errors);
        }
    }

    fn is_blank(&self, value: &Value) -> bool {
        matches!(value, Value::String(s) if s.is_empty())
    }
}

/// Strict number validator, optionally restricted to integers
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberValidator {
    integer: bool,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    pub fn is_integer(&self) -> bool {
        self.integer
    }
}

fn is_integral(n: &serde_json::Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

impl Validator for NumberValidator {
    fn type_label(&self) -> &str {
        "number"
    }

    fn check(&self, value: &Value, ctx: &ValidationContext, errors: &mut FieldErrors) {
        let Value::Number(n) = value else {
            ctx.type_error(errors, self.type_label(), value);
            return;
        };
        if self.integer && !is_integral(n) {
            ctx.report(errors, "integer", message::integer(ctx.path()));
        }
    }
}

/// Strict boolean validator
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl BooleanValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BooleanValidator {
    fn type_label(&self) -> &str {
        "boolean"
    }

    fn check(&self, value: &Value, ctx: &ValidationContext, errors: &mut FieldErrors) {
        if !value.is_boolean() {
            ctx.type_error(errors, self.type_label(), value);
        }
    }
}
