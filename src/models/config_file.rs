//! Config file payloads.

use serde::Serialize;
use serde_json::Value;

use super::common::{require, to_body};
use crate::error::SemaphoreError;

/// Parameters for creating or updating a config file stored in a secret.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigFileParams {
    /// Path the file is written to inside the job, e.g. `.ssh/id_rsa`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// File content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Whether the content is stored encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
}

impl ConfigFileParams {
    /// Creates empty config file parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Marks the content as encrypted (or not).
    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }

    pub(crate) fn to_create_body(&self) -> Result<Value, SemaphoreError> {
        require(&self.path, "path")?;
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
    use serde_json::json;

    #[test]
    fn test_create_body() {
        let body = ConfigFileParams::new()
            .with_path(".npmrc")
            .with_content("//registry.npmjs.org/:_authToken=abc")
            .with_encrypted(true)
            .to_create_body()
            .unwrap();
        assert_eq!(body["path"], ".npmrc");
        assert_eq!(body["encrypted"], true);
    }

    #[test]
    fn test_create_body_requires_path() {
        let err = ConfigFileParams::new()
            .with_content("x")
            .to_create_body()
            .unwrap_err();
        assert!(err.to_string().contains("path"));
    }

    #[test]
    fn test_update_body_only_sends_set_fields() {
        let body = ConfigFileParams::new()
            .with_content("updated")
            .to_update_body()
            .unwrap();
        assert_eq!(body, json!({"content": "updated"}));
    }
}
