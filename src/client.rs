//! Top-level client for the Semaphore API.
//!
//! `Semaphore` owns a [`Requester`] and hands out borrowed resource
//! wrappers, one per endpoint family. It also lists the links the API
//! advertises at its root.

use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::SemaphoreError;
use crate::request::Requester;
use crate::resources::{
    ConfigFiles, EnvVars, Organizations, Projects, Secrets, Teams, Users,
};

/// Entry point to the Semaphore API.
///
/// # Example
///
/// ```ignore
/// let client = Semaphore::from_config(&Config::load()?)?;
///
/// let org = client.organizations().by_name("acme").await?;
/// let status = client.teams().delete("42").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Semaphore {
    requester: Requester,
}

impl Semaphore {
    /// Creates a client for the public API with the given token.
    pub fn new(token: &str) -> Result<Self, SemaphoreError> {
        Ok(Self {
            requester: Requester::new(token)?,
        })
    }

    /// Creates a client against a different base domain.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, SemaphoreError> {
        Ok(Self {
            requester: Requester::with_base_url(base_url, token)?,
        })
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, SemaphoreError> {
        let client = Self::with_base_url(&config.base_url, &config.api_token)?;
        tracing::debug!(api_url = %client.requester.api_url(), "Semaphore client initialized");
        Ok(client)
    }

    /// The shared request core.
    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    /// Organization endpoints.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(&self.requester)
    }

    /// Team endpoints.
    pub fn teams(&self) -> Teams<'_> {
        Teams::new(&self.requester)
    }

    /// Team membership endpoints.
    pub fn users(&self) -> Users<'_> {
        Users::new(&self.requester)
    }

    /// Project endpoints.
    pub fn projects(&self) -> Projects<'_> {
        Projects::new(&self.requester)
    }

    /// Secret endpoints.
    pub fn secrets(&self) -> Secrets<'_> {
        Secrets::new(&self.requester)
    }

    /// Environment variable endpoints.
    pub fn env_vars(&self) -> EnvVars<'_> {
        EnvVars::new(&self.requester)
    }

    /// Config file endpoints.
    pub fn config_files(&self) -> ConfigFiles<'_> {
        ConfigFiles::new(&self.requester)
    }

    /// Gets the resource links advertised at the API root.
    ///
    /// Keys keep the order the server sent them in.
    ///
    /// # Errors
    ///
    /// Returns `SemaphoreError::UnexpectedResponse` if the root does not
    /// answer with a JSON object.
    pub async fn default_resources(&self) -> Result<Map<String, Value>, SemaphoreError> {
        match self.requester.get("").await? {
            Value::Object(resources) => Ok(resources),
            other => Err(SemaphoreError::UnexpectedResponse(format!(
                "expected an object of resource links, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Same as [`default_resources`](Self::default_resources), flattened to
    /// the list of values in order.
    pub async fn default_resources_as_list(&self) -> Result<Vec<Value>, SemaphoreError> {
        Ok(self
            .default_resources()
            .await?
            .into_iter()
            .map(|(_, link)| link)
            .collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_config_uses_base_url() {
        let config = Config {
            base_url: "http://localhost:4000".to_string(),
            api_token: "abc".to_string(),
        };
        let client = Semaphore::from_config(&config).unwrap();
        assert_eq!(client.requester().api_url(), "http://localhost:4000/v2");
    }

    #[test]
    fn test_new_targets_public_api() {
        let client = Semaphore::new("abc").unwrap();
        assert_eq!(
            client.requester().api_url(),
            "https://api.semaphoreci.com/v2"
        );
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!([])), "an array");
        assert_eq!(json_kind(&json!(null)), "null");
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Semaphore>();
    }
}
