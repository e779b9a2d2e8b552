//! Config file endpoints, keyed by secret.

use reqwest::StatusCode;
use serde_json::Value;

use super::segment;
use crate::error::SemaphoreError;
use crate::models::ConfigFileParams;
use crate::request::Requester;

/// Config files stored in secrets.
#[derive(Debug, Clone, Copy)]
pub struct ConfigFiles<'a> {
    requester: &'a Requester,
}

impl<'a> ConfigFiles<'a> {
    /// Creates the wrapper over a shared requester.
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Lists the config files of a secret. GET `secrets/{id}/config_files`.
    pub async fn for_secret(&self, secret_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("secrets/{}/config_files", segment(secret_id, "secret_id")?);
        self.requester.get(&path).await
    }

    /// Gets a config file. GET `config_files/{id}`.
    pub async fn by_id(&self, config_file_id: &str) -> Result<Value, SemaphoreError> {
        self.requester
            .get(&Self::config_file_path(config_file_id)?)
            .await
    }

    /// Adds a config file to a secret. POST `secrets/{id}/config_files`.
    pub async fn create(
        &self,
        secret_id: &str,
        params: &ConfigFileParams,
    ) -> Result<Value, SemaphoreError> {
        let body = params.to_create_body()?;
        let path = format!("secrets/{}/config_files", segment(secret_id, "secret_id")?);
        self.requester.post(&path, Some(&body)).await
    }

    /// Updates a config file. PATCH `config_files/{id}`.
    pub async fn update(
        &self,
        config_file_id: &str,
        params: &ConfigFileParams,
    ) -> Result<Value, SemaphoreError> {
        let body = params.to_update_body()?;
        self.requester
            .patch(&Self::config_file_path(config_file_id)?, &body)
            .await
    }

    /// Deletes a config file. DELETE `config_files/{id}`, returning the status code.
    pub async fn delete(&self, config_file_id: &str) -> Result<StatusCode, SemaphoreError> {
        self.requester
            .delete(&Self::config_file_path(config_file_id)?)
            .await
    }

    fn config_file_path(config_file_id: &str) -> Result<String, SemaphoreError> {
        Ok(format!(
            "config_files/{}",
            segment(config_file_id, "config_file_id")?
        ))
    }
}
