//! Secret endpoints.
//!
//! A secret groups environment variables and config files. It is owned by
//! an organization, shared with teams and attached to projects.

use reqwest::StatusCode;
use serde_json::Value;

use super::segment;
use crate::error::SemaphoreError;
use crate::models::SecretParams;
use crate::request::Requester;

/// Secret lookup, management and sharing.
#[derive(Debug, Clone, Copy)]
pub struct Secrets<'a> {
    requester: &'a Requester,
}

impl<'a> Secrets<'a> {
    /// Creates the wrapper over a shared requester.
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Gets a secret. GET `secrets/{id}`.
    pub async fn by_id(&self, secret_id: &str) -> Result<Value, SemaphoreError> {
        self.requester.get(&Self::secret_path(secret_id)?).await
    }

    /// Lists the secrets shared with a team. GET `teams/{id}/secrets`.
    pub async fn for_team(&self, team_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("teams/{}/secrets", segment(team_id, "team_id")?);
        self.requester.get(&path).await
    }

    /// Lists the secrets attached to a project. GET `projects/{id}/secrets`.
    pub async fn for_project(&self, project_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("projects/{}/secrets", segment(project_id, "project_id")?);
        self.requester.get(&path).await
    }

    /// Creates a secret in an organization. POST `orgs/{org}/secrets`.
    pub async fn create(&self, org: &str, params: &SecretParams) -> Result<Value, SemaphoreError> {
        let body = params.to_create_body()?;
        let path = format!("orgs/{}/secrets", segment(org, "org")?);
        self.requester.post(&path, Some(&body)).await
    }

    /// Updates a secret. PATCH `secrets/{id}`.
    pub async fn update(
        &self,
        secret_id: &str,
        params: &SecretParams,
    ) -> Result<Value, SemaphoreError> {
        let body = params.to_update_body()?;
        self.requester
            .patch(&Self::secret_path(secret_id)?, &body)
            .await
    }

    /// Deletes a secret. DELETE `secrets/{id}`, returning the status code.
    pub async fn delete(&self, secret_id: &str) -> Result<StatusCode, SemaphoreError> {
        self.requester.delete(&Self::secret_path(secret_id)?).await
    }

    /// Shares a secret with a team. POST `teams/{tid}/secrets/{sid}`.
    pub async fn add_to_team(&self, team_id: &str, secret_id: &str) -> Result<Value, SemaphoreError> {
        let path = Self::link_path("teams", team_id, "team_id", secret_id)?;
        self.requester.post(&path, None).await
    }

    /// Stops sharing a secret with a team. DELETE `teams/{tid}/secrets/{sid}`.
    pub async fn remove_from_team(
        &self,
        team_id: &str,
        secret_id: &str,
    ) -> Result<StatusCode, SemaphoreError> {
        let path = Self::link_path("teams", team_id, "team_id", secret_id)?;
        self.requester.delete(&path).await
    }

    /// Attaches a secret to a project. POST `projects/{pid}/secrets/{sid}`.
    pub async fn attach_to_project(
        &self,
        project_id: &str,
        secret_id: &str,
    ) -> Result<Value, SemaphoreError> {
        let path = Self::link_path("projects", project_id, "project_id", secret_id)?;
        self.requester.post(&path, None).await
    }

    /// Detaches a secret from a project. DELETE `projects/{pid}/secrets/{sid}`.
    pub async fn detach_from_project(
        &self,
        project_id: &str,
        secret_id: &str,
    ) -> Result<StatusCode, SemaphoreError> {
        let path = Self::link_path("projects", project_id, "project_id", secret_id)?;
        self.requester.delete(&path).await
    }

    fn secret_path(secret_id: &str) -> Result<String, SemaphoreError> {
        Ok(format!("secrets/{}", segment(secret_id, "secret_id")?))
    }

    /// `{owner}/{owner_id}/secrets/{secret_id}`
    fn link_path(
        owner: &str,
        owner_id: &str,
        owner_field: &str,
        secret_id: &str,
    ) -> Result<String, SemaphoreError> {
        Ok(format!(
            "{}/{}/secrets/{}",
            owner,
            segment(owner_id, owner_field)?,
            segment(secret_id, "secret_id")?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_path() {
        assert_eq!(
            Secrets::link_path("teams", "t1", "team_id", "s1").unwrap(),
            "teams/t1/secrets/s1"
        );
        assert_eq!(
            Secrets::link_path("projects", "p1", "project_id", "s1").unwrap(),
            "projects/p1/secrets/s1"
        );
    }

    #[test]
    fn test_link_path_names_the_empty_field() {
        let err = Secrets::link_path("projects", "", "project_id", "s1").unwrap_err();
        assert!(err.to_string().contains("project_id"));
    }
}
