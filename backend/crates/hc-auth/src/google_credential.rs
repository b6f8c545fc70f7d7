use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity claims read from a Google sign-in credential, forwarded to the
/// backend's `google-auth` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleIdentity {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl GoogleIdentity {
    /// Read the identity claims out of a Google ID token.
    ///
    /// The signature is NOT verified here. The token only travels to our own
    /// backend, which is responsible for verifying it before issuing a
    /// session token; nothing on the client may treat these claims as
    /// authenticated.
    #[track_caller]
    pub fn decode_unverified(credential: &str) -> AuthErrorResult<Self> {
        let credential = credential.trim();

        jsonwebtoken::decode_header(credential).map_err(|e| AuthError::CredentialHeader {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut segments = credential.split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => {
                return Err(AuthError::InvalidCredential {
                    message: "expected three dot-separated segments".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::InvalidCredential {
                message: format!("payload is not base64url: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let identity: Self =
            serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidCredential {
                message: format!("payload is not a JSON claim set: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if identity.email.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email claim is missing".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(identity)
    }
}
