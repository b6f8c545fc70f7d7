use crate::models::{null_as_default, user_id};
use crate::{Skill, UserId};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

const COMMUNITY_MEMBER_LABEL: &str = "Community Member";
const NOT_SET_LABEL: &str = "Not set";

/// A user as the backend describes it. The client only ever holds a
/// transient copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "user_id::deserialize_option")]
    pub id: Option<UserId>,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub bio: Option<String>,
    #[serde(rename = "phonenum")]
    pub phone_number: Option<String>,
    pub state: Option<String>,
    pub timezone: Option<String>,
    pub availability: Option<String>,
    #[serde(rename = "profileurl")]
    pub profile_url: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "skillIds", deserialize_with = "null_as_default")]
    pub skill_ids: BTreeSet<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
}

impl UserProfile {
    /// Full name when present, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    /// Plain users (and users without a role) show as community members.
    pub fn role_label(&self) -> String {
        match self.role.as_deref() {
            None | Some("") => COMMUNITY_MEMBER_LABEL.to_string(),
            Some(role) if role.eq_ignore_ascii_case("user") => COMMUNITY_MEMBER_LABEL.to_string(),
            Some(role) => role.to_string(),
        }
    }

    pub fn timezone_label(&self) -> &str {
        self.timezone
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(NOT_SET_LABEL)
    }

    pub fn availability_label(&self) -> &str {
        self.availability
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(NOT_SET_LABEL)
    }

    /// Map this profile's skill ids onto the catalog.
    ///
    /// Profiles that carry no ids fall back to their embedded skill list.
    pub fn resolve_skills(&self, catalog: &[Skill]) -> Vec<Skill> {
        if self.skill_ids.is_empty() {
            return self.skills.clone();
        }

        catalog
            .iter()
            .filter(|skill| self.skill_ids.contains(&skill.id))
            .cloned()
            .collect()
    }

    /// Skill ids to send back on update: explicit ids, else ids of the
    /// embedded skills.
    pub fn selected_skill_ids(&self) -> Vec<i64> {
        if self.skill_ids.is_empty() {
            self.skills.iter().map(|s| s.id).collect()
        } else {
            self.skill_ids.iter().copied().collect()
        }
    }
}
