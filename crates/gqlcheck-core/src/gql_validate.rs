//! Configured validation entry point
//!
//! [`configure`] merges caller bindings over the strict defaults and returns a
//! reusable [`GqlValidate`]. It validates in one call:
//!
//! ```no_run
//! # async fn example() -> gqlcheck_core::Result<()> {
//! use gqlcheck_core::{configure, custom_types};
//! use serde_json::json;
//!
//! let validate = configure(custom_types::bindings());
//! let errors = validate
//!     .validate("type Issuer { email: Email! }", "Issuer", &json!({"email": "nope"}))
//!     .await?;
//! assert_eq!(errors, vec!["email must be a valid email"]);
//! # Ok(())
//! # }
//! ```
//!
//! or one argument at a time, through [`GqlValidate::with_schema`] and
//! [`WithSchema::with_type`].
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::assembler::assemble;
use crate::config::{CapabilityBindings, ValidationConfig};
use crate::error::Result;
use crate::executor::execute;
use crate::validation::ObjectValidator;
use gqlcheck_schemas::{convert, migrate};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Validator configured with capability bindings
///
/// Cheap to clone; the bindings are shared read-only between clones and
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct GqlValidate {
    bindings: Arc<CapabilityBindings>,
    config: ValidationConfig,
}

/// Configure a validator, collecting every error
pub fn configure(bindings: CapabilityBindings) -> GqlValidate {
    configure_with(bindings, ValidationConfig::default())
}

/// Configure a validator with explicit validation settings
pub fn configure_with(bindings: CapabilityBindings, config: ValidationConfig) -> GqlValidate {
    let bindings = bindings.merge_over(CapabilityBindings::defaults());
    debug!(
        bindings = bindings.len(),
        abort_early = config.abort_early,
        max_errors = config.max_errors,
        "Configured GraphQL validator"
    );
    GqlValidate {
        bindings: Arc::new(bindings),
        config,
    }
}

/// Validator with the default bindings only
pub fn gql_validate() -> GqlValidate {
    configure(CapabilityBindings::new())
}

impl GqlValidate {
    pub fn bindings(&self) -> &CapabilityBindings {
        &self.bindings
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Build the object validator of `root_type`
    ///
    /// Returns `None` for an empty schema.
    pub fn build(&self, sdl: &str, root_type: &str) -> Result<Option<ObjectValidator>> {
        if sdl.is_empty() {
            return Ok(None);
        }

        let schema = migrate(convert(sdl)?);
        assemble(&self.bindings, &schema, root_type).map(Some)
    }

    /// Validate `data` against `root_type` of `sdl`
    ///
    /// Field failures come back as messages; `Err` means the schema or the
    /// bindings are unusable.
    pub async fn validate<'a>(
        &self,
        sdl: &str,
        root_type: &str,
        data: impl Into<Option<&'a Value>>,
    ) -> Result<Vec<String>> {
        self.validate_sync(sdl, root_type, data)
    }

    /// Blocking form of [`GqlValidate::validate`]
    pub fn validate_sync<'a>(
        &self,
        sdl: &str,
        root_type: &str,
        data: impl Into<Option<&'a Value>>,
    ) -> Result<Vec<String>> {
        match self.build(sdl, root_type)? {
            Some(validator) => Ok(execute(&validator, data.into(), &self.config)),
            None => Ok(Vec::new()),
        }
    }

    /// Fix the schema, leaving root type and data for later
    pub fn with_schema(&self, sdl: impl Into<String>) -> WithSchema {
        WithSchema {
            validate: self.clone(),
            sdl: sdl.into(),
        }
    }
}

/// Validator with its schema fixed
#[derive(Debug, Clone)]
pub struct WithSchema {
    validate: GqlValidate,
    sdl: String,
}

impl WithSchema {
    pub fn sdl(&self) -> &str {
        &self.sdl
    }

    /// Fix the root type
    pub fn with_type(&self, root_type: impl Into<String>) -> Prepared {
        Prepared {
            validate: self.validate.clone(),
            sdl: self.sdl.clone(),
            root_type: root_type.into(),
        }
    }

    pub async fn validate<'a>(
        &self,
        root_type: &str,
        data: impl Into<Option<&'a Value>>,
    ) -> Result<Vec<String>> {
        self.validate.validate(&self.sdl, root_type, data).await
    }
}

/// Validator with schema and root type fixed
#[derive(Debug, Clone)]
pub struct Prepared {
    validate: GqlValidate,
    sdl: String,
    root_type: String,
}

impl Prepared {
    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    pub async fn validate<'a>(&self, data: impl Into<Option<&'a Value>>) -> Result<Vec<String>> {
        self.validate.validate(&self.sdl, &self.root_type, data).await
    }

    pub fn validate_sync<'a>(&self, data: impl Into<Option<&'a Value>>) -> Result<Vec<String>> {
        self.validate.validate_sync(&self.sdl, &self.root_type, data)
    }
}
