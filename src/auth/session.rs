use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::{debug, warn};
use url::form_urlencoded;

use super::store::{CredentialStore, PROVIDER_TOKEN_KEY, TOKEN_KEY};

/// The slice of the access token's claims the client reads. The token
/// is issued and signed by the server; the client only needs the
/// validity window.
#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Called after a logout has cleared the store, so the presentation
/// layer can navigate to its login view.
pub type LogoutHook = Box<dyn Fn() + Send + Sync>;

/// Owns the session lifecycle: capturing credentials from the OAuth
/// redirect, persisting them, validating freshness, and tearing the
/// session down.
///
/// The manager never caches credentials in memory. Every query goes
/// back to the injected [`CredentialStore`], so concurrent contexts
/// sharing a store observe a single consistent session.
pub struct SessionManager {
    store: Box<dyn CredentialStore>,
    on_logout: Option<LogoutHook>,
}

impl SessionManager {
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        Self {
            store,
            on_logout: None,
        }
    }

    /// Register the hook fired after `logout` clears the store.
    pub fn with_logout_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_logout = Some(Box::new(hook));
        self
    }

    /// Capture credentials from the landing URL fragment,
    /// `#?token=<jwt>&github_token=<token>`.
    ///
    /// A session is all-or-nothing: unless both parameters are present
    /// and non-empty, nothing is written and `false` is returned. Runs
    /// once at startup, before any other consumer reads session state.
    pub fn capture_from_redirect(&self, fragment: &str) -> Result<bool> {
        let query = fragment.trim_start_matches('#').trim_start_matches('?');

        let mut token = None;
        let mut provider_token = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                TOKEN_KEY => token = Some(value.into_owned()),
                PROVIDER_TOKEN_KEY => provider_token = Some(value.into_owned()),
                _ => {}
            }
        }

        match (non_empty(token), non_empty(provider_token)) {
            (Some(token), Some(provider_token)) => {
                self.login(&token, &provider_token)?;
                Ok(true)
            }
            _ => {
                debug!("Redirect fragment without a full credential pair, ignoring");
                Ok(false)
            }
        }
    }

    /// Write both credentials, replacing any prior session.
    pub fn login(&self, token: &str, provider_token: &str) -> Result<()> {
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(PROVIDER_TOKEN_KEY, provider_token)?;
        Ok(())
    }

    /// Remove both credentials and fire the logout hook. Idempotent:
    /// safe to call when already logged out.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(PROVIDER_TOKEN_KEY)?;

        if let Some(ref hook) = self.on_logout {
            hook();
        }
        Ok(())
    }

    /// The stored access token, if present.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// The stored GitHub token, if present.
    pub fn provider_token(&self) -> Option<String> {
        self.read(PROVIDER_TOKEN_KEY)
    }

    /// Whether a complete, unexpired session exists: access token
    /// present and inside its validity window, and provider token
    /// present. A missing token is simply "not logged in", never an
    /// error.
    pub fn is_logged_in(&self) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        !Self::token_expired(&token) && self.provider_token().is_some()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            // An empty stored value counts as absent everywhere.
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(err) => {
                warn!(key, error = %err, "Failed to read credential store");
                None
            }
        }
    }

    /// Whether the access token's embedded validity window has passed.
    ///
    /// The signature is not checked (the client holds no key); only the
    /// `exp` claim matters. Undecodable tokens count as expired; a
    /// token without an `exp` claim never expires locally.
    fn token_expired(token: &str) -> bool {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        match decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation) {
            Ok(data) => match data.claims.exp {
                Some(exp) => exp <= Utc::now().timestamp(),
                None => false,
            },
            Err(err) => {
                debug!(error = %err, "Could not decode access token");
                true
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
