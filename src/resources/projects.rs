//! Project endpoints.

use reqwest::StatusCode;
use serde_json::Value;

use super::segment;
use crate::error::SemaphoreError;
use crate::request::Requester;

/// Project lookup and team access.
///
/// Listing every project of an organization lives on
/// [`Organizations::projects`](super::Organizations::projects).
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    requester: &'a Requester,
}

impl<'a> Projects<'a> {
    /// Creates the wrapper over a shared requester.
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Gets a project. GET `projects/{id}`.
    pub async fn by_id(&self, project_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("projects/{}", segment(project_id, "project_id")?);
        self.requester.get(&path).await
    }

    /// Lists the projects a team has access to. GET `teams/{id}/projects`.
    pub async fn for_team(&self, team_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("teams/{}/projects", segment(team_id, "team_id")?);
        self.requester.get(&path).await
    }

    /// Gives a team access to a project. POST `teams/{tid}/projects/{pid}`.
    pub async fn add_to_team(
        &self,
        team_id: &str,
        project_id: &str,
    ) -> Result<Value, SemaphoreError> {
        let path = Self::team_project_path(team_id, project_id)?;
        self.requester.post(&path, None).await
    }

    /// Revokes a team's access to a project. DELETE `teams/{tid}/projects/{pid}`,
    /// returning the status code.
    pub async fn remove_from_team(
        &self,
        team_id: &str,
        project_id: &str,
    ) -> Result<StatusCode, SemaphoreError> {
        let path = Self::team_project_path(team_id, project_id)?;
        self.requester.delete(&path).await
    }

    fn team_project_path(team_id: &str, project_id: &str) -> Result<String, SemaphoreError> {
        Ok(format!(
            "teams/{}/projects/{}",
            segment(team_id, "team_id")?,
            segment(project_id, "project_id")?
        ))
    }
}
