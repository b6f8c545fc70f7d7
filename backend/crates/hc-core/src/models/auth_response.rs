use crate::models::{non_empty, null_as_default, user_id};
use crate::{CoreError, Result as CoreResult, Role, Session, UserId};

use std::str::FromStr;

use serde::Deserialize;

/// Body returned by `/api/auth/login` and, on success, `/api/auth/google-auth`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(rename = "userid", deserialize_with = "user_id::deserialize")]
    pub user_id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phonenum: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub profileurl: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthResponse {
    /// Build the session this response authorizes.
    ///
    /// Fails when the backend did not hand out a token. An unrecognized role
    /// is dropped rather than rejected.
    #[track_caller]
    pub fn into_session(self) -> CoreResult<Session> {
        if self.token.trim().is_empty() {
            return Err(CoreError::validation("auth response carried no token"));
        }

        let role = self
            .role
            .as_deref()
            .filter(|r| !r.is_empty())
            .and_then(|r| Role::from_str(r).ok());

        Ok(Session {
            token: self.token,
            user_id: self.user_id,
            email: self.email,
            username: self.username.unwrap_or_default(),
            display_name: self.name.unwrap_or_default(),
            phone_number: non_empty(self.phonenum),
            state: non_empty(self.state),
            profile_url: non_empty(self.profileurl),
            role,
        })
    }
}
