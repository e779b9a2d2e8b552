//! Error types for the Semaphore client.
//!
//! This module defines `SemaphoreError`, the unified error type returned by
//! every operation in the crate.
//!
//! # Security
//!
//! The API token must never end up in logs or error messages. Use
//! `sanitize_message()` when rendering text that could contain it.

use thiserror::Error;

/// Maximum length kept from a non-JSON error response body.
pub(crate) const MAX_ERROR_BODY_LEN: usize = 500;

/// Unified error type for all Semaphore operations.
///
/// Validation errors are raised locally before any request is sent.
/// Transport errors are passed through from `reqwest` unchanged. Remote error
/// payloads that decode as JSON are not errors at all; they are returned to
/// the caller like any other body.
#[derive(Error, Debug)]
pub enum SemaphoreError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input validation failed before any network call was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The server answered with a non-success status and a body that is not JSON.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, truncated.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response decoded fine but did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl SemaphoreError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        SemaphoreError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SemaphoreError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SemaphoreError::Validation(message.into())
    }

    /// Creates an error for a non-JSON, non-success response.
    ///
    /// The body is truncated to keep verbose proxy error pages out of logs.
    pub fn http_status(status: reqwest::StatusCode, body: &str) -> Self {
        let body = if body.len() > MAX_ERROR_BODY_LEN {
            let mut end = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...[truncated]", &body[..end])
        } else {
            body.to_string()
        };
        SemaphoreError::HttpStatus { status, body }
    }

    /// Returns true if the error was raised locally before any request was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, SemaphoreError::Validation(_))
    }

    /// Sanitizes a message by replacing every occurrence of the token.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `token` - The API token to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the token replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, token: &str) -> String {
        if token.is_empty() {
            return message.to_string();
        }
        message.replace(token, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = SemaphoreError::missing_env("SEMAPHORE_API_TOKEN");
        assert!(err.to_string().contains("SEMAPHORE_API_TOKEN"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validation_error() {
        let err = SemaphoreError::validation("permission must be one of read, edit, admin");
        assert_eq!(
            err.to_string(),
            "validation error: permission must be one of read, edit, admin"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_config_error_is_not_validation() {
        assert!(!SemaphoreError::invalid_config("bad").is_validation());
    }

    #[test]
    fn test_http_status_keeps_short_body() {
        let err = SemaphoreError::http_status(reqwest::StatusCode::BAD_GATEWAY, "bad gateway");
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: bad gateway");
    }

    #[test]
    fn test_http_status_truncates_long_body() {
        let body = "x".repeat(MAX_ERROR_BODY_LEN + 100);
        match SemaphoreError::http_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body) {
            SemaphoreError::HttpStatus { body, .. } => {
                assert!(body.ends_with("...[truncated]"));
                assert_eq!(body.len(), MAX_ERROR_BODY_LEN + "...[truncated]".len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_status_truncates_on_char_boundary() {
        let body = "é".repeat(MAX_ERROR_BODY_LEN);
        match SemaphoreError::http_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body) {
            SemaphoreError::HttpStatus { body, .. } => assert!(body.ends_with("...[truncated]")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sanitize_message_removes_token() {
        let token = "super_secret_token_12345";
        let message = format!("Authorization: Token {} rejected", token);
        let sanitized = SemaphoreError::sanitize_message(&message, token);
        assert!(!sanitized.contains(token));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_token() {
        let message = "Some error message";
        assert_eq!(SemaphoreError::sanitize_message(message, ""), message);
    }
}
