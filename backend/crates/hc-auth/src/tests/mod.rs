
use hc_core::{Role, Session};

pub(crate) fn sample_session() -> Session {
    Session {
        token: "jwt-abc".to_string(),
        user_id: 5,
        email: "ada@example.com".to_string(),
        username: "ada".to_string(),
        display_name: "Ada Lovelace".to_string(),
        phone_number: Some("555-0100".to_string()),
        state: None,
        profile_url: Some("https://cdn.example.com/ada.png".to_string()),
        role: Some(Role::User),
    }
}
