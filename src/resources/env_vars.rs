//! Environment variable endpoints, keyed by secret.

use reqwest::StatusCode;
use serde_json::Value;

use super::segment;
use crate::error::SemaphoreError;
use crate::models::EnvVarParams;
use crate::request::Requester;

/// Environment variables stored in secrets.
#[derive(Debug, Clone, Copy)]
pub struct EnvVars<'a> {
    requester: &'a Requester,
}

impl<'a> EnvVars<'a> {
    /// Creates the wrapper over a shared requester.
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Lists the variables of a secret. GET `secrets/{id}/env_vars`.
    pub async fn for_secret(&self, secret_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("secrets/{}/env_vars", segment(secret_id, "secret_id")?);
        self.requester.get(&path).await
    }

    /// Gets a variable. GET `env_vars/{id}`.
    pub async fn by_id(&self, env_var_id: &str) -> Result<Value, SemaphoreError> {
        self.requester.get(&Self::env_var_path(env_var_id)?).await
    }

    /// Adds a variable to a secret. POST `secrets/{id}/env_vars`.
    pub async fn create(
        &self,
        secret_id: &str,
        params: &EnvVarParams,
    ) -> Result<Value, SemaphoreError> {
        let body = params.to_create_body()?;
        let path = format!("secrets/{}/env_vars", segment(secret_id, "secret_id")?);
        self.requester.post(&path, Some(&body)).await
    }

    /// Updates a variable. PATCH `env_vars/{id}`.
    pub async fn update(
        &self,
        env_var_id: &str,
        params: &EnvVarParams,
    ) -> Result<Value, SemaphoreError> {
        let body = params.to_update_body()?;
        self.requester
            .patch(&Self::env_var_path(env_var_id)?, &body)
            .await
    }

    /// Deletes a variable. DELETE `env_vars/{id}`, returning the status code.
    pub async fn delete(&self, env_var_id: &str) -> Result<StatusCode, SemaphoreError> {
        self.requester.delete(&Self::env_var_path(env_var_id)?).await
    }

    fn env_var_path(env_var_id: &str) -> Result<String, SemaphoreError> {
        Ok(format!("env_vars/{}", segment(env_var_id, "env_var_id")?))
    }
}
