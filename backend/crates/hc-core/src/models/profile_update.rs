use crate::UserProfile;

use serde::Serialize;

/// Fields a user may change on the edit-profile form. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEdits {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub bio: Option<String>,
    pub timezone: Option<String>,
    pub availability: Option<String>,
    pub skill_ids: Option<Vec<i64>>,
}

/// Body of `PUT /api/auth/update/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileUpdate {
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    pub phonenum: Option<String>,
    pub state: Option<String>,
    pub profileurl: Option<String>,
    pub bio: Option<String>,
    pub timezone: Option<String>,
    pub availability: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "skillIds")]
    pub skill_ids: Vec<i64>,
}

impl ProfileUpdate {
    /// Merge edits over the profile as last fetched. `profile_url` is the
    /// freshly uploaded photo URL, if any.
    pub fn merge(current: &UserProfile, edits: ProfileEdits, profile_url: Option<String>) -> Self {
        Self {
            username: edits.username.unwrap_or_else(|| current.username.clone()),
            name: edits.full_name.or_else(|| current.name.clone()),
            email: edits.email.unwrap_or_else(|| current.email.clone()),
            phonenum: edits.phone.or_else(|| current.phone_number.clone()),
            state: edits.state.or_else(|| current.state.clone()),
            profileurl: profile_url.or_else(|| current.profile_url.clone()),
            bio: edits.bio.or_else(|| current.bio.clone()),
            timezone: edits.timezone.or_else(|| current.timezone.clone()),
            availability: edits.availability.or_else(|| current.availability.clone()),
            role: current.role.clone().filter(|r| !r.is_empty()),
            skill_ids: edits
                .skill_ids
                .unwrap_or_else(|| current.selected_skill_ids()),
        }
    }
}
