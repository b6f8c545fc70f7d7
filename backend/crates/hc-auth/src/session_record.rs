//! Mapping between a [`Session`] and its persisted key/value form.

use crate::SessionStorage;

use hc_core::{Role, Session, parse_user_id};

use std::collections::BTreeMap;
use std::str::FromStr;

use log::warn;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_ID_KEY: &str = "userId";
pub const EMAIL_KEY: &str = "userEmail";
pub const USERNAME_KEY: &str = "userName";
pub const DISPLAY_NAME_KEY: &str = "userFirstName";
pub const PHONE_KEY: &str = "userPhonenum";
pub const STATE_KEY: &str = "userState";
pub const PROFILE_URL_KEY: &str = "userProfileUrl";
pub const ROLE_KEY: &str = "role";

/// Every key a session may occupy.
pub const SESSION_KEYS: [&str; 9] = [
    TOKEN_KEY,
    USER_ID_KEY,
    EMAIL_KEY,
    USERNAME_KEY,
    DISPLAY_NAME_KEY,
    PHONE_KEY,
    STATE_KEY,
    PROFILE_URL_KEY,
    ROLE_KEY,
];

/// Flatten a session into storage entries. Absent optional fields are left out.
pub fn to_entries(session: &Session) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    entries.insert(TOKEN_KEY.to_string(), session.token.clone());
    entries.insert(USER_ID_KEY.to_string(), session.user_id.to_string());
    entries.insert(EMAIL_KEY.to_string(), session.email.clone());
    entries.insert(USERNAME_KEY.to_string(), session.username.clone());
    entries.insert(DISPLAY_NAME_KEY.to_string(), session.display_name.clone());

    let optional = [
        (PHONE_KEY, session.phone_number.as_deref()),
        (STATE_KEY, session.state.as_deref()),
        (PROFILE_URL_KEY, session.profile_url.as_deref()),
        (ROLE_KEY, session.role.as_ref().map(Role::as_str)),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    entries
}

/// Rebuild the session held in storage.
///
/// Returns `None` when there is no token, or when the stored user id is
/// unreadable.
pub fn from_storage<S: SessionStorage + ?Sized>(storage: &S) -> Option<Session> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;

    let user_id = match storage.get(USER_ID_KEY).map(|raw| parse_user_id(&raw)) {
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            warn!("Ignoring stored session with bad user id: {}", e.user_message());
            return None;
        }
        None => {
            warn!("Ignoring stored session without a user id");
            return None;
        }
    };

    Some(Session {
        token,
        user_id,
        email: storage.get(EMAIL_KEY).unwrap_or_default(),
        username: storage.get(USERNAME_KEY).unwrap_or_default(),
        display_name: storage.get(DISPLAY_NAME_KEY).unwrap_or_default(),
        phone_number: storage.get(PHONE_KEY),
        state: storage.get(STATE_KEY),
        profile_url: storage.get(PROFILE_URL_KEY),
        role: storage
            .get(ROLE_KEY)
            .and_then(|raw| Role::from_str(&raw).ok()),
    })
}
