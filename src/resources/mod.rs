//! Resource wrappers for the Semaphore API.
//!
//! Each wrapper borrows a [`Requester`](crate::request::Requester), composes
//! the resource path for an operation and forwards the call. Wrappers hold no
//! state of their own and are `Copy`.
//!
//! Identifiers interpolated into paths are checked for emptiness and
//! percent-encoded, so an ID can never escape its path segment.

mod config_files;
mod env_vars;
mod organizations;
mod projects;
mod secrets;
mod teams;
mod users;

pub use config_files::ConfigFiles;
pub use env_vars::EnvVars;
pub use organizations::Organizations;
pub use projects::Projects;
pub use secrets::Secrets;
pub use teams::Teams;
pub use users::Users;

use crate::error::SemaphoreError;

/// Validates an identifier and encodes it as a single path segment.
///
/// # Errors
///
/// Returns `SemaphoreError::Validation` if the identifier is empty, blank,
/// or a dot segment (`.` or `..`) that URL normalization would collapse.
pub(crate) fn segment(id: &str, field_name: &str) -> Result<String, SemaphoreError> {
    if id.trim().is_empty() {
        return Err(SemaphoreError::validation(format!(
            "{} must not be empty",
            field_name
        )));
    }
    if id == "." || id == ".." {
        return Err(SemaphoreError::validation(format!(
            "{} must not be a dot segment, got {:?}",
            field_name, id
        )));
    }
    Ok(urlencoding::encode(id).into_owned())
}
