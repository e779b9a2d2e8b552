//! Secret payloads.

use serde::Serialize;
use serde_json::Value;

use super::common::{require, to_body};
use crate::error::SemaphoreError;

/// Parameters for creating or updating a secret.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecretParams {
    /// Secret name. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SecretParams {
    /// Creates empty secret parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the secret name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn to_create_body(&self) -> Result<Value, SemaphoreError> {
        require(&self.name, "name")?;
        to_body(self)
    }

    pub(crate) fn to_update_body(&self) -> Result<Value, SemaphoreError> {
        to_body(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body() {
        let body = SecretParams::new()
            .with_name("aws-keys")
            .to_create_body()
            .unwrap();
        assert_eq!(body, json!({"name": "aws-keys"}));
    }

    #[test]
    fn test_create_body_requires_name() {
        let err = SecretParams::new()
            .with_description("no name")
            .to_create_body()
            .unwrap_err();
        assert!(err.is_validation());
    }
}
