use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user id: {value} {location}")]
    InvalidUserId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown route: {value} {location}")]
    UnknownRoute {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message to show a user, without source location.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRole { value, .. } => format!("Invalid role: {value}"),
            Self::InvalidUserId { value, .. } => format!("Invalid user id: {value}"),
            Self::UnknownRoute { value, .. } => format!("Unknown route: {value}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
