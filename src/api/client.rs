//! API client for the Issueboard REST API.
//!
//! Read-only access to workspaces and their issues. Every request
//! carries the session's current access token; callers route 401
//! failures through [`super::recover_unauthorized`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::SessionManager;
use crate::models::{Issue, Workspace};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for Issueboard.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionManager>,
}

impl ApiClient {
    /// Create a new API client against `base_url`.
    pub fn new(base_url: impl Into<String>, session: Arc<SessionManager>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all workspaces, in server order.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let url = format!("{}/api/v1/workspaces", self.base_url);
        self.get(&url).await
    }

    /// Fetch a single workspace by id.
    pub async fn get_workspace(&self, workspace_id: i64) -> Result<Workspace, ApiError> {
        let url = format!("{}/api/v1/workspace/{}", self.base_url, workspace_id);
        self.get(&url).await
    }

    /// Fetch the issues associated with a workspace.
    pub async fn list_issues(&self, workspace_id: i64) -> Result<Vec<Issue>, ApiError> {
        let url = format!("{}/api/v1/workspace/{}/issues", self.base_url, workspace_id);
        self.get(&url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "Sending GET request");

        let mut request = self.client.get(url);
        // Attach the token as stored right now, so a login or logout in
        // another context takes effect on the next call.
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e)))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}
