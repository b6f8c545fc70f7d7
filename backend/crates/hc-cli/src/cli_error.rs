use crate::ClientError;

use hc_auth::AuthError;
use hc_config::ConfigError;
use hc_core::{CoreError, Route};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Generic message for transport failures; nothing is retried.
pub const TRY_AGAIN_MESSAGE: &str = "An error occurred. Please try again.";

/// Failures surfaced to the person at the terminal. `Display` is the
/// user-facing message; the location is kept for debug logging.
#[derive(Error, Debug)]
pub enum CliError {
    /// Rejected before any request was sent
    #[error("{message}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Bad credentials, failed OTP, failed Google verification
    #[error("{message}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    /// The backend refused the request or could not be reached
    #[error("{message}")]
    Request {
        message: String,
        location: ErrorLocation,
        #[source]
        source: ClientError,
    },

    /// The current session may not open the requested view
    #[error("{message} (redirecting to {to})")]
    Redirect {
        to: Route,
        message: String,
        location: ErrorLocation,
    },

    #[error("Logging error: {message}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Session storage error: {source}")]
    Storage {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CliError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        CliError::Authentication {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a client error, preferring the backend's own message over
    /// `fallback`. Transport failures get the generic retry message.
    #[track_caller]
    pub fn request(source: ClientError, fallback: &str) -> Self {
        let message = match &source {
            ClientError::Http { .. } => TRY_AGAIN_MESSAGE.to_string(),
            other => other.api_message().unwrap_or(fallback).to_string(),
        };

        CliError::Request {
            message,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Wrap a client error with a fixed message.
    #[track_caller]
    pub fn request_with(source: ClientError, message: impl Into<String>) -> Self {
        CliError::Request {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        CliError::Logging {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn redirect<S: Into<String>>(to: Route, message: S) -> Self {
        CliError::Redirect {
            to,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn location(&self) -> &ErrorLocation {
        match self {
            Self::Validation { location, .. }
            | Self::Authentication { location, .. }
            | Self::Request { location, .. }
            | Self::Redirect { location, .. }
            | Self::Logging { location, .. }
            | Self::Config { location, .. }
            | Self::Storage { location, .. } => location,
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        CliError::validation(err.user_message())
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        CliError::Config {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for CliError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        CliError::Storage {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
