//! # semaphore-client
//!
//! A thin client for the Semaphore CI REST API (v2).
//!
//! Every call is a single authenticated round trip: the client composes the
//! resource URL, sends `Authorization: Token <token>`, and returns either the
//! decoded JSON body or, for deletes, the HTTP status code. There is no
//! retry, caching or pagination.
//!
//! ## Architecture
//!
//! - [`config`] - Token and base URL loading from environment variables
//! - [`error`] - The `SemaphoreError` type
//! - [`request`] - The request core: URL building, header injection, dispatch
//! - [`resources`] - One wrapper per endpoint family
//! - [`models`] - Typed payloads for create/update calls
//! - [`client`] - The `Semaphore` entry point tying it together
//!
//! ## Configuration
//!
//! - `SEMAPHORE_API_TOKEN`: API token (required by `Config::from_env`)
//! - `SEMAPHORE_BASE_URL`: optional override of `https://api.semaphoreci.com`
//!
//! Logging goes through `tracing`; enable it with e.g.
//! `RUST_LOG=semaphore_client=debug` in a subscriber of your choice.
//! The token is never logged.
//!
//! ## Example
//!
//! ```ignore
//! use semaphore_client::{Config, Permission, Semaphore, TeamParams};
//!
//! async fn example() -> Result<(), semaphore_client::SemaphoreError> {
//!     let client = Semaphore::from_config(&Config::load()?)?;
//!
//!     let team = client
//!         .teams()
//!         .create(
//!             "acme",
//!             &TeamParams::new()
//!                 .with_name("Developers")
//!                 .with_permission(Permission::Edit),
//!         )
//!         .await?;
//!     println!("{}", team["id"]);
//!
//!     let status = client.teams().delete("42").await?;
//!     assert!(status.is_success());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod resources;

pub use client::Semaphore;
pub use config::Config;
pub use error::SemaphoreError;
pub use models::{ConfigFileParams, EnvVarParams, Permission, SecretParams, TeamParams};
pub use request::{Reply, ReplyMode, Requester, API_VERSION, BASE_URL};
