//! Team models: permission levels and create/update payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{require, to_body};
use crate::error::SemaphoreError;

/// Access level granted to a team over its projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Read-only access.
    Read,
    /// May modify projects.
    Edit,
    /// Full administrative access.
    Admin,
}

impl Permission {
    /// Every accepted permission, in increasing order of privilege.
    pub const ALL: [Permission; 3] = [Permission::Read, Permission::Edit, Permission::Admin];

    /// Wire name of the permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Edit => "edit",
            Permission::Admin => "admin",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = SemaphoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                SemaphoreError::validation(format!(
                    "permission must be one of read, edit, admin, got {:?}",
                    s
                ))
            })
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

/// Parameters for creating or updating a team.
///
/// # Example
///
/// ```ignore
/// let params = TeamParams::new()
///     .with_name("Developers")
///     .with_permission(Permission::Edit)
///     .with_description("Everyone who ships code");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamParams {
    /// Team name. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// One of `read`, `edit` or `admin`. Required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TeamParams {
    /// Creates empty team parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the team name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the permission. Accepts a `Permission` or its wire name.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks the permission, if one is set.
    fn validate_permission(&self) -> Result<(), SemaphoreError> {
        if let Some(permission) = &self.permission {
            permission.parse::<Permission>()?;
        }
        Ok(())
    }

    /// Body of a create call. Name and a valid permission are required.
    pub(crate) fn to_create_body(&self) -> Result<Value, SemaphoreError> {
        require(&self.name, "name")?;
        require(&self.permission, "permission")?;
        self.validate_permission()?;
        to_body(self)
    }

    /// Body of an update call. Only set fields are sent.
    pub(crate) fn to_update_body(&self) -> Result<Value, SemaphoreError> {
        self.validate_permission()?;
        to_body(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_permission_parse() {
        assert_eq!("read".parse::<Permission>().unwrap(), Permission::Read);
        assert_eq!("edit".parse::<Permission>().unwrap(), Permission::Edit);
        assert_eq!("admin".parse::<Permission>().unwrap(), Permission::Admin);
    }

    #[test]
    fn test_permission_rejects_unknown_values() {
        for bad in ["owner", "", "Admin", "write", " read"] {
            let err = bad.parse::<Permission>().unwrap_err();
            assert!(err.is_validation(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_permission_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Permission::Edit).unwrap(), json!("edit"));
        assert_eq!(Permission::Admin.to_string(), "admin");
    }

    #[test]
    fn test_create_body() {
        let body = TeamParams::new()
            .with_name("X")
            .with_permission("admin")
            .with_description("d")
            .to_create_body()
            .unwrap();
        assert_eq!(
            body,
            json!({"name": "X", "permission": "admin", "description": "d"})
        );
    }

    #[test]
    fn test_create_body_accepts_permission_enum() {
        let body = TeamParams::new()
            .with_name("X")
            .with_permission(Permission::Read)
            .to_create_body()
            .unwrap();
        assert_eq!(body, json!({"name": "X", "permission": "read"}));
    }

    #[test]
    fn test_create_body_requires_name_and_permission() {
        let err = TeamParams::new()
            .with_permission("read")
            .to_create_body()
            .unwrap_err();
        assert!(err.to_string().contains("name"));

        let err = TeamParams::new().with_name("X").to_create_body().unwrap_err();
        assert!(err.to_string().contains("permission"));
    }

    #[test]
    fn test_create_body_rejects_bad_permission() {
        let err = TeamParams::new()
            .with_name("X")
            .with_permission("superuser")
            .to_create_body()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_body_only_sends_set_fields() {
        let body = TeamParams::new()
            .with_description("new description")
            .to_update_body()
            .unwrap();
        assert_eq!(body, json!({"description": "new description"}));

        assert_eq!(TeamParams::new().to_update_body().unwrap(), json!({}));
    }

    #[test]
    fn test_update_body_rejects_bad_permission() {
        let err = TeamParams::new()
            .with_permission("root")
            .to_update_body()
            .unwrap_err();
        assert!(err.is_validation());
    }
}
