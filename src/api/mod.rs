//! REST API client module for the Issueboard service.
//!
//! This module provides the `ApiClient` for fetching workspaces and
//! their issues, authenticated with the JWT bearer token held by the
//! session manager, plus the recovery policy applied when a call comes
//! back 401.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use tracing::warn;

use crate::auth::SessionManager;

/// Apply the unauthorized-recovery policy to a resource-call result.
///
/// A 401 means the stored credential was rejected: the session is torn
/// down and the failure swallowed (`Ok(None)`), so the presentation
/// layer redirects to login instead of rendering an error. Every other
/// outcome passes through untouched - the caller decides what to show.
pub fn recover_unauthorized<T>(
    result: Result<T, ApiError>,
    session: &SessionManager,
) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_unauthorized() => {
            if let Err(err) = session.logout() {
                warn!(error = %err, "Logout after 401 failed");
            }
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
