use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer};

/// Backend user identifier.
pub type UserId = i64;

/// The backend sends ids both as JSON numbers and as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Number(i64),
    Text(String),
}

/// Parse a user id from its textual form (storage, CLI arguments).
#[track_caller]
pub fn parse_user_id(raw: &str) -> CoreResult<UserId> {
    raw.trim().parse().map_err(|_| CoreError::InvalidUserId {
        value: raw.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    match RawUserId::deserialize(deserializer)? {
        RawUserId::Number(id) => Ok(id),
        RawUserId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawUserId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawUserId::Number(id)) => Ok(Some(id)),
        Some(RawUserId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawUserId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
