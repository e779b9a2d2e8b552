//! Validation helpers shared by the params builders.

use serde::Serialize;
use serde_json::Value;

use crate::error::SemaphoreError;

/// Fails unless a required text field is set and non-blank.
pub(crate) fn require(value: &Option<String>, field: &str) -> Result<(), SemaphoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(SemaphoreError::validation(format!("{} is required", field))),
    }
}

/// Serializes a params struct into a request body.
pub(crate) fn to_body<T: Serialize>(params: &T) -> Result<Value, SemaphoreError> {
    serde_json::to_value(params).map_err(SemaphoreError::Serialization)
}
