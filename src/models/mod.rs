//! Write payloads for the Semaphore API.
//!
//! Entities read from the API are passed through as `serde_json::Value`;
//! only the bodies of create/update calls are typed. Each params struct is
//! a builder, and only the fields that were set are serialized.

mod common;
mod config_file;
mod env_var;
mod secret;
mod team;

pub use config_file::*;
pub use env_var::*;
pub use secret::*;
pub use team::*;
