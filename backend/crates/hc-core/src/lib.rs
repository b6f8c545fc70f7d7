pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::auth_response::AuthResponse;
pub use models::connection_status::ConnectionStatus;
pub use models::profile_update::{ProfileEdits, ProfileUpdate};
pub use models::registration_form::{RegistrationForm, is_valid_email};
pub use models::role::Role;
pub use models::route::Route;
pub use models::session::Session;
pub use models::skill::Skill;
pub use models::user_id::{UserId, parse_user_id};
pub use models::user_profile::UserProfile;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Role assigned to self-registered accounts.
pub const DEFAULT_REGISTRATION_ROLE: &str = "USER";

#[cfg(test)]
mod tests;
