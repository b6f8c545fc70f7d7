use crate::{ProfileEdits, ProfileUpdate, Skill, UserProfile};

fn current() -> UserProfile {
    UserProfile {
        id: Some(5),
        username: "ada".to_string(),
        name: Some("Ada".to_string()),
        email: "ada@example.com".to_string(),
        bio: Some("Engines".to_string()),
        profile_url: Some("https://cdn.example.com/old.png".to_string()),
        role: Some("USER".to_string()),
        skills: vec![Skill { id: 2, name: "Design".to_string() }],
        ..UserProfile::default()
    }
}

#[test]
fn test_merge_keeps_current_values_without_edits() {
    let update = ProfileUpdate::merge(&current(), ProfileEdits::default(), None);

    assert_eq!(update.username, "ada");
    assert_eq!(update.name.as_deref(), Some("Ada"));
    assert_eq!(
        update.profileurl.as_deref(),
        Some("https://cdn.example.com/old.png")
    );
    assert_eq!(update.role.as_deref(), Some("USER"));
    assert_eq!(update.skill_ids, vec![2]);
}

#[test]
fn test_merge_applies_edits_and_new_photo() {
    let edits = ProfileEdits {
        full_name: Some("Ada King".to_string()),
        bio: Some("Analytical".to_string()),
        skill_ids: Some(vec![1, 3]),
        ..ProfileEdits::default()
    };

    let update = ProfileUpdate::merge(
        &current(),
        edits,
        Some("https://cdn.example.com/new.png".to_string()),
    );

    assert_eq!(update.name.as_deref(), Some("Ada King"));
    assert_eq!(update.bio.as_deref(), Some("Analytical"));
    assert_eq!(
        update.profileurl.as_deref(),
        Some("https://cdn.example.com/new.png")
    );
    assert_eq!(update.skill_ids, vec![1, 3]);
}

#[test]
fn test_update_body_uses_backend_field_names() {
    let update = ProfileUpdate::merge(&current(), ProfileEdits::default(), None);
    let body = serde_json::to_value(&update).unwrap();

    assert_eq!(body["skillIds"], serde_json::json!([2]));
    assert_eq!(body["profileurl"], "https://cdn.example.com/old.png");
    assert!(body["phonenum"].is_null());
}
