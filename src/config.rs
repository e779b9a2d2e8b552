//! Configuration management for the Semaphore client.
//!
//! This module handles loading the API token and an optional base URL from
//! environment variables, with validation to catch obvious mistakes early.

use std::env;
use std::fmt;

use url::Url;

use crate::error::SemaphoreError;
use crate::request::BASE_URL;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "SEMAPHORE_API_TOKEN";

/// Environment variable overriding the API base domain.
pub const BASE_URL_ENV: &str = "SEMAPHORE_BASE_URL";

/// Configuration for connecting to Semaphore.
///
/// The token is stored but never logged; the `Debug` impl redacts it.
#[derive(Clone)]
pub struct Config {
    /// Base domain of the API, without the version segment
    /// (e.g., `https://api.semaphoreci.com`).
    pub base_url: String,

    /// API token for authentication.
    /// This value must never be logged or included in error messages.
    pub api_token: String,
}

impl Config {
    /// Creates a configuration for the public Semaphore API.
    pub fn new(api_token: impl Into<String>) -> Self {
        Config {
            base_url: BASE_URL.to_string(),
            api_token: api_token.into(),
        }
    }

    /// Loads a `.env` file if present, then reads the environment.
    ///
    /// A missing `.env` file is not an error.
    pub fn load() -> Result<Self, SemaphoreError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_env()
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEMAPHORE_API_TOKEN` (required): the API token
    /// - `SEMAPHORE_BASE_URL` (optional): defaults to `https://api.semaphoreci.com`
    ///
    /// # Errors
    ///
    /// Returns `SemaphoreError::Config` if the token is missing or if a
    /// value fails validation.
    pub fn from_env() -> Result<Self, SemaphoreError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, SemaphoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup(TOKEN_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| SemaphoreError::missing_env(TOKEN_ENV))?;
        let api_token = api_token.trim().to_string();
        Self::validate_api_token(&api_token)?;

        let base_url = match lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            Some(url) => Self::validate_base_url(&url)?,
            None => BASE_URL.to_string(),
        };

        Ok(Config {
            base_url,
            api_token,
        })
    }

    /// Validates and normalizes a base URL.
    fn validate_base_url(url: &str) -> Result<String, SemaphoreError> {
        let url = url.trim().trim_end_matches('/');

        let parsed = Url::parse(url).map_err(|e| {
            SemaphoreError::invalid_config(format!("{} is not a valid URL: {}", BASE_URL_ENV, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SemaphoreError::invalid_config(format!(
                "{} must start with http:// or https://",
                BASE_URL_ENV
            )));
        }

        Ok(url.to_string())
    }

    /// Rejects tokens that are obviously copied from documentation.
    fn validate_api_token(token: &str) -> Result<(), SemaphoreError> {
        let token_lower = token.to_lowercase();
        let placeholder_patterns = ["your_token", "your_api_token", "placeholder", "xxx", "changeme"];

        if placeholder_patterns
            .iter()
            .any(|pattern| token_lower.contains(pattern))
        {
            return Err(SemaphoreError::invalid_config(format!(
                "{} appears to be a placeholder value",
                TOKEN_ENV
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_uses_default_base_url() {
        let config = Config::from_lookup(lookup(&[(TOKEN_ENV, "abc123")])).unwrap();
        assert_eq!(config.base_url, "https://api.semaphoreci.com");
        assert_eq!(config.api_token, "abc123");
    }

    #[test]
    fn test_from_lookup_reads_base_url_override() {
        let config = Config::from_lookup(lookup(&[
            (TOKEN_ENV, "abc123"),
            (BASE_URL_ENV, "http://localhost:8080/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains(TOKEN_ENV));

        let err = Config::from_lookup(lookup(&[(TOKEN_ENV, "   ")])).unwrap_err();
        assert!(matches!(err, SemaphoreError::Config(_)));
    }

    #[test]
    fn test_validate_base_url_removes_trailing_slash() {
        let result = Config::validate_base_url("https://example.com/").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_base_url_requires_scheme() {
        assert!(Config::validate_base_url("example.com").is_err());
        assert!(Config::validate_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_api_token_rejects_placeholder() {
        assert!(Config::validate_api_token("your_token_here").is_err());
        assert!(Config::validate_api_token("CHANGEME").is_err());
    }

    #[test]
    fn test_validate_api_token_accepts_real_token() {
        assert!(Config::validate_api_token("abc123def456").is_ok());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new("very-secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}
