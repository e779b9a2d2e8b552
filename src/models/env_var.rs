//! Environment variable payloads.
//!
//! Environment variables live inside a secret and are injected into every
//! job of the projects the secret is attached to.

use serde::Serialize;
use serde_json::Value;

use super::common::{require, to_body};
use crate::error::SemaphoreError;

/// Parameters for creating or updating an environment variable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnvVarParams {
    /// Variable name. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Variable value. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Whether the value is stored encrypted and hidden in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
}

impl EnvVarParams {
    /// Creates empty environment variable parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the variable value.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Marks the value as encrypted (or not).
    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }

    pub(crate) fn to_create_body(&self) -> Result<Value, SemaphoreError> {
        require(&self.name, "name")?;
        if self.content.is_none() {
            return Err(SemaphoreError::validation("content is required"));
        }
        to_body(self)
    }

    pub(crate) fn to_update_body(&self) -> Result<Value, SemaphoreError> {
        to_body(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_create_body() {
        let body = EnvVarParams::new()
            .with_name("RAILS_ENV")
            .with_content("test")
            .with_encrypted(false)
            .to_create_body()
            .unwrap();
        assert_eq!(
            body,
            json!({"name": "RAILS_ENV", "content": "test", "encrypted": false})
        );
    }

    #[test]
    fn test_create_body_allows_empty_content() {
        let body = EnvVarParams::new()
            .with_name("EMPTY")
            .with_content("")
            .to_create_body()
            .unwrap();
        assert_eq!(body, json!({"name": "EMPTY", "content": ""}));
    }

    #[test]
    fn test_create_body_requires_content() {
        let err = EnvVarParams::new()
            .with_name("RAILS_ENV")
            .to_create_body()
            .unwrap_err();
        assert_eq!(err.to_string(), "validation error: content is required");
    }
}
