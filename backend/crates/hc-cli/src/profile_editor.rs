//! Viewing and editing the signed-in user's own profile.

use crate::cli_error::{CliError, CliResult};
use crate::session_store::SessionStore;

use hc_auth::SessionStorage;
use hc_core::{ProfileEdits, ProfileUpdate, UserId, UserProfile};

use std::path::Path;

use log::{debug, info};
use serde_json::Value;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to view your profile.";
pub const UPDATE_LOGIN_REQUIRED_MESSAGE: &str = "Please log in to update your profile.";
pub const PROFILE_LOAD_FAILED_MESSAGE: &str = "Failed to load profile data.";
const UPDATE_FAILED_PREFIX: &str = "Failed to update profile: ";
const UPDATE_FAILED_FALLBACK: &str = "Please try again.";

fn signed_in_user<S: SessionStorage>(store: &SessionStore<S>, message: &str) -> CliResult<UserId> {
    match store.session() {
        Some(session) if session.is_authenticated() => Ok(session.user_id),
        _ => Err(CliError::authentication(message)),
    }
}

/// Fetch the signed-in user's profile.
pub async fn load_profile<S: SessionStorage>(store: &SessionStore<S>) -> CliResult<UserProfile> {
    let user_id = signed_in_user(store, LOGIN_REQUIRED_MESSAGE)?;

    store
        .client()
        .get_user(user_id)
        .await
        .map_err(|e| CliError::request_with(e, PROFILE_LOAD_FAILED_MESSAGE))
}

fn update_failed(e: crate::ClientError) -> CliError {
    let reason = e.json_message().unwrap_or(UPDATE_FAILED_FALLBACK).to_string();
    CliError::request_with(e, format!("{UPDATE_FAILED_PREFIX}{reason}"))
}

/// Apply `edits` to the signed-in user's profile.
///
/// The current profile is fetched and merged so untouched fields keep their
/// values. A new photo is uploaded before the update is sent, and the update
/// carries the uploaded URL.
pub async fn update_profile<S: SessionStorage>(
    store: &mut SessionStore<S>,
    edits: ProfileEdits,
    photo: Option<&Path>,
) -> CliResult<Value> {
    let user_id = signed_in_user(store, UPDATE_LOGIN_REQUIRED_MESSAGE)?;

    let current = store
        .client()
        .get_user(user_id)
        .await
        .map_err(|e| CliError::request_with(e, PROFILE_LOAD_FAILED_MESSAGE))?;

    let uploaded = match photo {
        Some(path) => {
            debug!("Uploading profile photo {}", path.display());
            let url = store
                .client()
                .upload_profile_photo_file(path)
                .await
                .map_err(update_failed)?;
            Some(url)
        }
        None => None,
    };

    let profile_url = uploaded.clone().or_else(|| current.profile_url.clone());
    let update = ProfileUpdate::merge(&current, edits, profile_url);

    let response = store
        .client()
        .update_user(user_id, &update)
        .await
        .map_err(update_failed)?;

    if let Some(url) = uploaded {
        store.set_profile_url(&url)?;
    }

    info!("Updated profile for user {}", user_id);
    Ok(response)
}
