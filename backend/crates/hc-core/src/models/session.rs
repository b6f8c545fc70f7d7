use crate::{Role, UserId};

use serde::Serialize;

/// The identity of the currently authenticated user.
///
/// A session only exists while its token is non-empty; the stores that hand
/// out sessions never construct one without a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Bearer token issued by the backend. Never serialized into output.
    #[serde(skip_serializing)]
    pub token: String,
    pub user_id: UserId,
    pub email: String,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}
