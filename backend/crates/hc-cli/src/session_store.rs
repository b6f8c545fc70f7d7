//! The authenticated session and its persistence.

use crate::Client;
use crate::cli_error::{CliError, CliResult};

use hc_auth::session_record::{self, PROFILE_URL_KEY};
use hc_auth::{GoogleIdentity, SessionStorage};
use hc_core::{AuthResponse, Session};

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde_json::Value;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password.";
pub const GOOGLE_LOGIN_FAILED_MESSAGE: &str = "Google authentication failed.";

/// Owns the current session and keeps it in step with persistent storage.
///
/// Every change is written to storage first and only then applied in memory,
/// so a failed write leaves both untouched.
pub struct SessionStore<S: SessionStorage> {
    client: Client,
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Build a store over `storage`, re-hydrating any session it already holds.
    pub fn new(mut client: Client, storage: S) -> Self {
        let session = session_record::from_storage(&storage);
        client.set_token(session.as_ref().map(|s| s.token.clone()));

        if let Some(ref s) = session {
            debug!("Restored session for user {}", s.user_id);
        }

        Self {
            client,
            storage,
            session,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        hc_auth::requires_auth(self.session())
    }

    /// Client carrying the current session's bearer token.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Password login. Returns `true` once the session is persisted and live.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        match self.try_login(email, password).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Login failed: {} ({})", e, e.location());
                false
            }
        }
    }

    async fn try_login(&mut self, email: &str, password: &str) -> CliResult<()> {
        let response = self
            .client
            .login(email, password)
            .await
            .map_err(|e| CliError::request_with(e, LOGIN_FAILED_MESSAGE))?;

        let session = response.into_session()?;
        self.establish(session)
    }

    /// Sign in with a Google ID token. The token's claims are read without
    /// verifying its signature and forwarded to the backend, which decides.
    pub async fn google_login(&mut self, credential: &str) -> bool {
        match self.try_google_login(credential).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Google login failed: {} ({})", e, e.location());
                false
            }
        }
    }

    async fn try_google_login(&mut self, credential: &str) -> CliResult<()> {
        let identity = GoogleIdentity::decode_unverified(credential)
            .map_err(|e| CliError::authentication(format!("Unreadable Google credential: {e}")))?;
        let data = self
            .client
            .google_auth(&identity)
            .await
            .map_err(|e| CliError::request_with(e, GOOGLE_LOGIN_FAILED_MESSAGE))?;

        if data.get("success").and_then(Value::as_bool) != Some(true) {
            let reason = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GOOGLE_LOGIN_FAILED_MESSAGE);
            return Err(CliError::authentication(reason));
        }

        let response: AuthResponse = serde_json::from_value(data)
            .map_err(|e| CliError::authentication(format!("Malformed google-auth response: {e}")))?;
        let session = response.into_session()?;
        self.establish(session)
    }

    /// Forget the session. Storage failures are logged, never surfaced.
    ///
    /// If the stored record cannot be removed it is overwritten with an empty
    /// one, so the session is not restored on the next run.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.clear() {
            warn!("Failed to clear session storage: {e}");
            if let Err(e) = self.storage.replace_all(BTreeMap::new()) {
                warn!("Failed to blank session storage: {e}");
            }
        }
        self.session = None;
        self.client.set_token(None);
        info!("Logged out");
    }

    /// Record a new profile image URL for the signed-in user.
    pub fn set_profile_url(&mut self, url: &str) -> CliResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Err(CliError::authentication(
                crate::profile_editor::LOGIN_REQUIRED_MESSAGE,
            ));
        };

        self.storage.set(PROFILE_URL_KEY, url)?;
        session.profile_url = Some(url.to_string());
        Ok(())
    }

    fn establish(&mut self, session: Session) -> CliResult<()> {
        self.storage
            .replace_all(session_record::to_entries(&session))?;

        info!("Signed in as user {}", session.user_id);
        self.client.set_token(Some(session.token.clone()));
        self.session = Some(session);
        Ok(())
    }
}
