//! Team membership endpoints.

use reqwest::StatusCode;
use serde_json::Value;

use super::segment;
use crate::error::SemaphoreError;
use crate::request::Requester;

/// Users as members of teams.
///
/// Organization-wide user listing lives on
/// [`Organizations::users`](super::Organizations::users).
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    requester: &'a Requester,
}

impl<'a> Users<'a> {
    /// Creates the wrapper over a shared requester.
    pub fn new(requester: &'a Requester) -> Self {
        Self { requester }
    }

    /// Lists the members of a team. GET `teams/{id}/users`.
    pub async fn for_team(&self, team_id: &str) -> Result<Value, SemaphoreError> {
        let path = format!("teams/{}/users", segment(team_id, "team_id")?);
        self.requester.get(&path).await
    }

    /// Adds a user to a team. POST `teams/{id}/users/{username}`.
    pub async fn add_to_team(&self, team_id: &str, username: &str) -> Result<Value, SemaphoreError> {
        let path = Self::membership_path(team_id, username)?;
        self.requester.post(&path, None).await
    }

    /// Removes a user from a team. DELETE `teams/{id}/users/{username}`,
    /// returning the status code.
    pub async fn remove_from_team(
        &self,
        team_id: &str,
        username: &str,
    ) -> Result<StatusCode, SemaphoreError> {
        let path = Self::membership_path(team_id, username)?;
        self.requester.delete(&path).await
    }

    fn membership_path(team_id: &str, username: &str) -> Result<String, SemaphoreError> {
        Ok(format!(
            "teams/{}/users/{}",
            segment(team_id, "team_id")?,
            segment(username, "username")?
        ))
    }
}
