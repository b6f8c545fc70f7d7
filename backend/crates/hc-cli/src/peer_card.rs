//! Everything shown about another community member.

use crate::Client;
use crate::connection_resolver::{ConnectionDirectory, ConnectionStatusResolver};

use hc_core::{ConnectionStatus, Skill, UserId, UserProfile};

use log::warn;
use serde::Serialize;

pub const SKILLS_LOAD_FAILED_MESSAGE: &str = "Failed to load skills data.";

/// Skills to show for `user`, resolved against the catalog.
pub async fn card_skills(client: &Client, user: &UserProfile) -> Result<Vec<Skill>, &'static str> {
    match client.list_skills().await {
        Ok(catalog) => Ok(user.resolve_skills(&catalog)),
        Err(e) => {
            warn!("Skill catalog lookup failed: {e}");
            Err(SKILLS_LOAD_FAILED_MESSAGE)
        }
    }
}

/// A user card plus the actions available on it.
#[derive(Debug, Clone, Serialize)]
pub struct PeerCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub username: String,
    pub display_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub role: String,
    pub timezone: String,
    pub availability: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    pub skills: Vec<Skill>,
    pub status: Option<ConnectionStatus>,
    pub connect_label: String,
    pub can_connect: bool,
    pub can_message: bool,
    /// First failure hit while assembling the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PeerCard {
    pub fn new<D: ConnectionDirectory + ?Sized>(
        user: &UserProfile,
        skills: Result<Vec<Skill>, &str>,
        resolver: &ConnectionStatusResolver<'_, D>,
    ) -> Self {
        let (skills, skills_error) = match skills {
            Ok(skills) => (skills, None),
            Err(message) => (Vec::new(), Some(message.to_string())),
        };

        Self {
            id: user.id,
            username: user.username.clone(),
            display_name: user.display_name().to_string(),
            email: user.email.clone(),
            bio: user.bio.clone().filter(|b| !b.is_empty()),
            role: user.role_label(),
            timezone: user.timezone_label().to_string(),
            availability: user.availability_label().to_string(),
            profile_url: user.profile_url.clone().filter(|u| !u.is_empty()),
            skills,
            status: resolver.status(),
            connect_label: resolver.connect_label().to_string(),
            can_connect: resolver.can_connect(),
            can_message: resolver.can_message(),
            error: resolver.error().map(String::from).or(skills_error),
        }
    }
}
