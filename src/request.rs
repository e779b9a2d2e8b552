//! Request core shared by every resource wrapper.
//!
//! This module provides the `Requester` struct, which owns the HTTP client,
//! the versioned base URL and the authentication header, and performs
//! exactly one HTTP round trip per call.
//!
//! # Replies
//!
//! A call is dispatched in one of two modes:
//! - `ReplyMode::Json`: the body is decoded and returned whatever the status
//!   code, so error payloads from the API reach the caller untouched
//! - `ReplyMode::Status`: only the status code is returned (used by deletes)
//!
//! There is no retry, no client-side timeout and no status inspection beyond
//! that. Transport failures surface as `SemaphoreError::Http`.
//!
//! # Security
//!
//! The token is never logged. The header value carrying it is marked
//! sensitive so `reqwest` keeps it out of its own debug output.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::SemaphoreError;

/// Base domain of the Semaphore API.
pub const BASE_URL: &str = "https://api.semaphoreci.com";

/// API version segment targeted by this crate.
pub const API_VERSION: &str = "/v2";

/// How a dispatched call turns the response into a `Reply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    /// Decode and return the JSON body.
    Json,
    /// Return only the HTTP status code.
    Status,
}

/// The normalized result of a dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Decoded response body. An empty body is `Value::Null`.
    Json(Value),
    /// HTTP status code of the response.
    Status(StatusCode),
}

impl Reply {
    /// Returns the JSON body, failing if the call was dispatched in status mode.
    pub fn into_json(self) -> Result<Value, SemaphoreError> {
        match self {
            Reply::Json(value) => Ok(value),
            Reply::Status(status) => Err(SemaphoreError::UnexpectedResponse(format!(
                "expected a JSON body, got status {}",
                status
            ))),
        }
    }

    /// Returns the status code, failing if the call was dispatched in JSON mode.
    pub fn into_status(self) -> Result<StatusCode, SemaphoreError> {
        match self {
            Reply::Status(status) => Ok(status),
            Reply::Json(_) => Err(SemaphoreError::UnexpectedResponse(
                "expected a status code, got a JSON body".to_string(),
            )),
        }
    }
}

/// Authenticated dispatcher for the Semaphore API.
///
/// Holds the token, the header map derived from it and the base domain.
/// None of these change after construction, so the requester can be cloned
/// and shared across tasks freely.
///
/// # Example
///
/// ```ignore
/// let requester = Requester::new("my-token")?;
/// assert_eq!(requester.api_url(), "https://api.semaphoreci.com/v2");
///
/// let orgs = requester.get("orgs").await?;
/// ```
#[derive(Clone)]
pub struct Requester {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base domain without the version segment.
    base_url: String,

    /// `Authorization: Token <token>`, built once.
    headers: HeaderMap,

    /// Kept only to redact it from transport error logs.
    /// SECURITY: Never log this value!
    token: String,
}

impl Requester {
    /// Creates a requester for the public Semaphore API.
    ///
    /// # Errors
    ///
    /// Returns `SemaphoreError::Validation` if the token contains characters
    /// that cannot be sent in an HTTP header, or `SemaphoreError::HttpClient`
    /// if the HTTP client fails to initialize.
    pub fn new(token: &str) -> Result<Self, SemaphoreError> {
        Self::build(BASE_URL.to_string(), token)
    }

    /// Creates a requester against a different base domain.
    ///
    /// The version segment is still appended, so `base_url` must not include it.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, SemaphoreError> {
        let base_url = Self::normalize_base_url(base_url)?;
        Self::build(base_url, token)
    }

    fn build(base_url: String, token: &str) -> Result<Self, SemaphoreError> {
        let http = Client::builder()
            .build()
            .map_err(SemaphoreError::HttpClient)?;

        Ok(Self {
            http,
            base_url,
            headers: Self::auth_headers(token)?,
            token: token.to_string(),
        })
    }

    /// Builds the header map sent with every call.
    fn auth_headers(token: &str) -> Result<HeaderMap, SemaphoreError> {
        let mut value = HeaderValue::from_str(&format!("Token {}", token)).map_err(|_| {
            SemaphoreError::validation("token contains characters not allowed in an HTTP header")
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Trims trailing slashes and checks the scheme.
    fn normalize_base_url(url: &str) -> Result<String, SemaphoreError> {
        let url = url.trim().trim_end_matches('/');
        let parsed = Url::parse(url)
            .map_err(|e| SemaphoreError::validation(format!("invalid base URL {:?}: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SemaphoreError::validation(
                "base URL must start with http:// or https://",
            ));
        }

        Ok(url.to_string())
    }

    /// Headers injected into every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Base domain without the version segment.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API version segment, e.g. `/v2`.
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Base domain plus the version segment.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url, API_VERSION)
    }

    /// Makes the API URL for a specific version segment.
    ///
    /// # Errors
    ///
    /// Returns `SemaphoreError::Validation` unless `api_version` starts with `/`.
    pub fn make_url(&self, api_version: &str) -> Result<String, SemaphoreError> {
        if !api_version.starts_with('/') {
            return Err(SemaphoreError::validation(format!(
                "API version must look like /v{}, got {:?}",
                api_version, api_version
            )));
        }
        Ok(format!("{}{}", self.base_url, api_version))
    }

    /// Full URL of a resource path under the current API version.
    ///
    /// An empty path yields `api_url()` itself.
    pub fn build_url(&self, resource_path: &str) -> String {
        let resource_path = resource_path.trim_start_matches('/');
        if resource_path.is_empty() {
            self.api_url()
        } else {
            format!("{}/{}", self.api_url(), resource_path)
        }
    }

    /// Sends one request and normalizes the response.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP verb
    /// * `resource_path` - Path relative to `api_url()`, e.g. `orgs/acme/teams`
    /// * `mode` - Whether to return the decoded body or the status code
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// - `SemaphoreError::Http` on transport failure
    /// - `SemaphoreError::HttpStatus` for a non-2xx response whose body is not JSON
    /// - `SemaphoreError::Serialization` for a 2xx response whose body is not JSON
    pub async fn dispatch(
        &self,
        method: Method,
        resource_path: &str,
        mode: ReplyMode,
        body: Option<&Value>,
    ) -> Result<Reply, SemaphoreError> {
        let url = self.build_url(resource_path);

        tracing::debug!(
            method = %method,
            path = %resource_path,
            "Making Semaphore API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers.clone());

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            tracing::debug!(
                method = %method,
                path = %resource_path,
                error = %SemaphoreError::sanitize_message(&e.to_string(), &self.token),
                "Semaphore API request failed"
            );
            SemaphoreError::Http(e)
        })?;
        let status = response.status();

        tracing::trace!(status = %status, "Semaphore API response");

        match mode {
            ReplyMode::Status => Ok(Reply::Status(status)),
            ReplyMode::Json => {
                let text = response.text().await.map_err(SemaphoreError::Http)?;
                self.decode_body(status, &text).map(Reply::Json)
            }
        }
    }

    /// Decodes a response body, tolerating empty bodies.
    fn decode_body(&self, status: StatusCode, text: &str) -> Result<Value, SemaphoreError> {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        match serde_json::from_str(text) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(SemaphoreError::http_status(
                status,
                &SemaphoreError::sanitize_message(text, &self.token),
            )),
            Err(e) => Err(SemaphoreError::Serialization(e)),
        }
    }

    /// GET a resource and return its JSON body.
    pub async fn get(&self, resource_path: &str) -> Result<Value, SemaphoreError> {
        self.dispatch(Method::GET, resource_path, ReplyMode::Json, None)
            .await?
            .into_json()
    }

    /// POST to a resource, with or without a body, and return the JSON reply.
    pub async fn post(
        &self,
        resource_path: &str,
        body: Option<&Value>,
    ) -> Result<Value, SemaphoreError> {
        self.dispatch(Method::POST, resource_path, ReplyMode::Json, body)
            .await?
            .into_json()
    }

    /// PATCH a resource and return the JSON reply.
    pub async fn patch(&self, resource_path: &str, body: &Value) -> Result<Value, SemaphoreError> {
        self.dispatch(Method::PATCH, resource_path, ReplyMode::Json, Some(body))
            .await?
            .into_json()
    }

    /// DELETE a resource and return the status code.
    pub async fn delete(&self, resource_path: &str) -> Result<StatusCode, SemaphoreError> {
        self.dispatch(Method::DELETE, resource_path, ReplyMode::Status, None)
            .await?
            .into_status()
    }
}

impl fmt::Debug for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requester")
            .field("base_url", &self.base_url)
            .field("api_version", &API_VERSION)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
