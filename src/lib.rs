//! Client-side core for the Issueboard issue planner.
//!
//! The backend finishes its OAuth flow by redirecting to the frontend
//! with an API token and a GitHub token embedded in the URL fragment.
//! This crate owns everything stateful on the client side of that
//! contract:
//!
//! - [`auth`]: capturing the redirect, persisting the credential pair,
//!   and deciding locally whether the session is still valid
//! - [`api`]: authenticated reads of workspaces and their issues, with
//!   401 responses routed back into session teardown
//! - [`config`]: base URL and credential file location
//!
//! Rendering and routing are left to the embedding application, which
//! consumes these types and navigates to its login view when the
//! logout hook fires. Logging goes through `tracing`; installing a
//! subscriber is likewise the embedder's job.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{recover_unauthorized, ApiClient, ApiError};
pub use auth::{CredentialStore, FileStore, MemoryStore, SessionManager};
pub use config::Config;
pub use models::{Issue, Workspace};
