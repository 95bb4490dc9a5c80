//! Root object validator assembly
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::CapabilityBindings;
use crate::error::Result;
use crate::resolver::resolve;
use crate::validation::ObjectValidator;
use gqlcheck_schemas::{extract_fields, NormalizedSchema};
use tracing::{debug, trace};

/// Build the object validator for `root_type`
///
/// Every field of the root type is resolved against `bindings`, in
/// declaration order. The first binding problem aborts assembly.
pub fn assemble(
    bindings: &CapabilityBindings,
    schema: &NormalizedSchema,
    root_type: &str,
) -> Result<ObjectValidator> {
    let fields = extract_fields(schema, root_type)?;

    let mut object = ObjectValidator::new();
    for (name, descriptor) in fields {
        trace!(root_type, field = name, kind = ?descriptor.kind, required = descriptor.required, "Resolving field");
        object = object.field(name, resolve(bindings, descriptor)?);
    }

    debug!(root_type, fields = object.len(), "Assembled validator");
    Ok(object)
}
