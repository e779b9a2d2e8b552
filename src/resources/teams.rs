//! Team endpoints.
//!
//! Teams belong to an organization and grant their members a permission
//! level over the projects and secrets attached to them.

use reqwest::StatusCode;
use serde_json::Value;

use super::segment;
use crate::error::SemaphoreError;
use crate::models::TeamParams;
use crate::request::Requester;

/// Team lookup and management.
#[derive(Debug, Clone, Copy)]
pub struct Teams<'a> {
    requester: &'a Requester,
}

impl<'a> Teams<'a> {
    /// Creates the wrapper over a shared requester.
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Gets a team. GET `teams/{id}`.
    pub async fn by_id(&self, team_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("teams/{}", segment(team_id, "team_id")?);
        self.requester.get(&path).await
    }

    /// Lists the teams with access to a project. GET `projects/{id}/teams`.
    pub async fn for_project(&self, project_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("projects/{}/teams", segment(project_id, "project_id")?);
        self.requester.get(&path).await
    }

    /// Lists the teams a secret is shared with. GET `secrets/{id}/teams`.
    pub async fn for_secret(&self, secret_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("secrets/{}/teams", segment(secret_id, "secret_id")?);
        self.requester.get(&path).await
    }

    /// Creates a team in an organization. POST `orgs/{org}/teams`.
    ///
    /// # Errors
    ///
    /// Returns `SemaphoreError::Validation`, without sending anything, if the
    /// name or permission is missing or the permission is not one of
    /// `read`, `edit`, `admin`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let team = client
    ///     .teams()
    ///     .create("acme", &TeamParams::new().with_name("X").with_permission("admin"))
    ///     .await?;
    /// ```
    pub async fn create(&self, org: &str, params: &TeamParams) -> Result<Value, SemaphoreError> {
        let body = params.to_create_body()?;
        let path = format!("orgs/{}/teams", segment(org, "org")?);
        self.requester.post(&path, Some(&body)).await
    }

    /// Updates a team. PATCH `teams/{id}`.
    ///
    /// Only the fields set on `params` are sent. The permission, if set, is
    /// validated before dispatch.
    pub async fn update(&self, team_id: &str, params: &TeamParams) -> Result<Value, SemaphoreError> {
        let body = params.to_update_body()?;
        let path = format!("teams/{}", segment(team_id, "team_id")?);
        self.requester.patch(&path, &body).await
    }

    /// Deletes a team. DELETE `teams/{id}`, returning the status code.
    pub async fn delete(&self, team_id: &str) -> Result<StatusCode, SemaphoreError> {
        let path = format!("teams/{}", segment(team_id, "team_id")?);
        self.requester.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Validation happens before any I/O, so these never reach the network.

    #[test]
    fn test_create_rejects_bad_permission_without_dispatch() {
        let requester = Requester::with_base_url("http://127.0.0.1:9", "abc").unwrap();
        let params = TeamParams::new().with_name("X").with_permission("owner");

        let err = tokio_test::block_on(Teams::new(&requester).create("acme", &params)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_rejects_bad_permission_without_dispatch() {
        let requester = Requester::with_base_url("http://127.0.0.1:9", "abc").unwrap();
        let params = TeamParams::new().with_permission("READ");

        let err = tokio_test::block_on(Teams::new(&requester).update("42", &params)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_rejects_empty_id() {
        let requester = Requester::with_base_url("http://127.0.0.1:9", "abc").unwrap();

        let err = tokio_test::block_on(Teams::new(&requester).delete("")).unwrap_err();
        assert!(err.is_validation());
    }
}
