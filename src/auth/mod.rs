//! Authentication module for managing the user session.
//!
//! This module provides:
//! - `SessionManager`: session lifecycle built on the OAuth redirect
//!   flow, with local expiry checks against the token's `exp` claim
//! - `CredentialStore`: durable key/value storage for the credential
//!   pair, with file-backed and in-memory implementations
//!
//! The backend delivers an API token and a GitHub token in the landing
//! URL fragment; both must be present for a session to exist.

pub mod session;
pub mod store;

pub use session::{LogoutHook, SessionManager};
pub use store::{CredentialStore, FileStore, MemoryStore, PROVIDER_TOKEN_KEY, TOKEN_KEY};
