//! Organization endpoints.

use serde_json::Value;

use super::segment;
use crate::error::SemaphoreError;
use crate::request::Requester;

/// Read-only access to an organization and the collections it owns.
#[derive(Debug, Clone, Copy)]
pub struct Organizations<'a> {
    requester: &'a Requester,
}

impl<'a> Organizations<'a> {
    /// Creates the wrapper over a shared requester.
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Gets an organization by its username. GET `orgs/{org}`.
    pub async fn by_name(&self, org: &str) -> Result<Value, SemaphoreError> {
        let path = format!("orgs/{}", segment(org, "org")?);
        self.requester.get(&path).await
    }

    /// Lists the organization's projects. GET `orgs/{org}/projects`.
    pub async fn projects(&self, org: &str) -> Result<Value, SemaphoreError> {
        self.collection(org, "projects").await
    }

    /// Lists the organization's secrets. GET `orgs/{org}/secrets`.
    pub async fn secrets(&self, org: &str) -> Result<Value, SemaphoreError> {
        self.collection(org, "secrets").await
    }

    /// Lists the organization's members. GET `orgs/{org}/users`.
    pub async fn users(&self, org: &str) -> Result<Value, SemaphoreError> {
        self.collection(org, "users").await
    }

    /// Lists the organization's teams. GET `orgs/{org}/teams`.
    pub async fn teams(&self, org: &str) -> Result<Value, SemaphoreError> {
        self.collection(org, "teams").await
    }

    async fn collection(&self, org: &str, name: &str) -> Result<Value, SemaphoreError> {
        let path = format!("orgs/{}/{}", segment(org, "org")?, name);
        self.requester.get(&path).await
    }
}
