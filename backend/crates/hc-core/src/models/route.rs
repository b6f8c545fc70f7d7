use crate::{CoreError, Result as CoreResult, UserId};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Serialize, Serializer};

/// Navigable views of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    VerifyOtp,
    Profile,
    UpdateProfile,
    Admin,
    Chat(UserId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::VerifyOtp => "/verify-otp".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::UpdateProfile => "/updateprofile".to_string(),
            Self::Admin => "/admin".to_string(),
            Self::Chat(user_id) => format!("/chat/{user_id}"),
        }
    }
}

impl FromStr for Route {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        let unknown = || CoreError::UnknownRoute {
            value: s.to_string(),
            location,
        };

        match s {
            "/" | "" => Ok(Self::Home),
            "/login" => Ok(Self::Login),
            "/register" => Ok(Self::Register),
            "/verify-otp" => Ok(Self::VerifyOtp),
            "/profile" => Ok(Self::Profile),
            "/updateprofile" => Ok(Self::UpdateProfile),
            "/admin" => Ok(Self::Admin),
            other => other
                .strip_prefix("/chat/")
                .and_then(|id| id.parse().ok())
                .map(Self::Chat)
                .ok_or_else(unknown),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
