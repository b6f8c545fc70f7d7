pub mod auth_response;
pub mod connection_status;
pub mod profile_update;
pub mod registration_form;
pub mod role;
pub mod route;
pub mod session;
pub mod skill;
pub mod user_id;
pub mod user_profile;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that the backend may send as `null`, falling back to
/// the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat empty strings as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
