use crate::{Skill, UserProfile};

use serde_json::json;

fn catalog() -> Vec<Skill> {
    vec![
        Skill { id: 1, name: "Rust".to_string() },
        Skill { id: 2, name: "Design".to_string() },
        Skill { id: 3, name: "ML".to_string() },
    ]
}

#[test]
fn test_profile_parses_backend_names() {
    let body = json!({
        "id": "9",
        "username": "grace",
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "phonenum": "555",
        "profileurl": "https://cdn.example.com/g.png",
        "skillIds": [3, 1],
        "skills": null
    });

    let profile: UserProfile = serde_json::from_value(body).unwrap();

    assert_eq!(profile.id, Some(9));
    assert_eq!(profile.phone_number.as_deref(), Some("555"));
    assert_eq!(
        profile.profile_url.as_deref(),
        Some("https://cdn.example.com/g.png")
    );
    assert_eq!(profile.skill_ids.len(), 2);
    assert!(profile.skills.is_empty());
}

#[test]
fn test_profile_without_id() {
    let profile: UserProfile = serde_json::from_value(json!({ "username": "x" })).unwrap();
    assert!(profile.id.is_none());
}

#[test]
fn test_resolve_skills_from_ids() {
    let profile = UserProfile {
        skill_ids: [1, 3].into_iter().collect(),
        ..UserProfile::default()
    };

    let names: Vec<String> = profile
        .resolve_skills(&catalog())
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, vec!["Rust".to_string(), "ML".to_string()]);
}

#[test]
fn test_resolve_skills_falls_back_to_embedded_list() {
    let profile = UserProfile {
        skills: vec![Skill { id: 7, name: "Go".to_string() }],
        ..UserProfile::default()
    };

    let skills = profile.resolve_skills(&catalog());

    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "Go");
    assert_eq!(profile.selected_skill_ids(), vec![7]);
}

#[test]
fn test_role_label() {
    let mut profile = UserProfile::default();
    assert_eq!(profile.role_label(), "Community Member");

    profile.role = Some("user".to_string());
    assert_eq!(profile.role_label(), "Community Member");

    profile.role = Some("Mentor".to_string());
    assert_eq!(profile.role_label(), "Mentor");
}

#[test]
fn test_labels_and_display_name() {
    let mut profile = UserProfile {
        username: "grace".to_string(),
        ..UserProfile::default()
    };
    assert_eq!(profile.display_name(), "grace");
    assert_eq!(profile.timezone_label(), "Not set");
    assert_eq!(profile.availability_label(), "Not set");

    profile.name = Some("Grace".to_string());
    profile.timezone = Some("UTC+5:30".to_string());
    profile.availability = Some("Weekends".to_string());
    assert_eq!(profile.display_name(), "Grace");
    assert_eq!(profile.timezone_label(), "UTC+5:30");
    assert_eq!(profile.availability_label(), "Weekends");
}
