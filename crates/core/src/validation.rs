//! Flattening of `validator` errors into a stable, serializable list.
//!
//! `ValidationErrors` is keyed by a `HashMap`, so its iteration order is not
//! deterministic. API responses need a predictable shape, so violations are
//! flattened to one entry per failed rule and sorted by field name.

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// A single failed constraint on an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as the client sees it (JSON member name).
    pub field: String,
    pub message: String,
}

/// Flatten `errors` into violations, renaming fields through `field_name`.
///
/// Nested struct and list errors are not produced by any DTO in this crate
/// and are ignored.
pub fn collect_violations(
    errors: &ValidationErrors,
    field_name: fn(&str) -> &str,
) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let name = field_name(&field).to_string();
            errs.iter().map(move |err| FieldViolation {
                field: name.clone(),
                message: describe(err),
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

/// Run `input.validate()` and convert failures into [`CoreError::InvalidFields`].
pub fn check<T: Validate>(input: &T, field_name: fn(&str) -> &str) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::InvalidFields(collect_violations(&errors, field_name)))
}

fn describe(err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => format!("failed '{}' check", err.code),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
