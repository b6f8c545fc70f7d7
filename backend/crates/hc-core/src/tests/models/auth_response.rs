use crate::{AuthResponse, Role};

use serde_json::json;

#[test]
fn test_login_body_becomes_session() {
    let body = json!({
        "token": "jwt-abc",
        "userid": 5,
        "email": "ada@example.com",
        "username": "ada",
        "name": "Ada Lovelace",
        "phonenum": "555-0100",
        "state": "Kerala",
        "profileurl": "https://cdn.example.com/ada.png",
        "role": "admin"
    });

    let response: AuthResponse = serde_json::from_value(body).unwrap();
    let session = response.into_session().unwrap();

    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user_id, 5);
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(session.username, "ada");
    assert_eq!(session.display_name, "Ada Lovelace");
    assert_eq!(session.phone_number.as_deref(), Some("555-0100"));
    assert_eq!(session.state.as_deref(), Some("Kerala"));
    assert_eq!(
        session.profile_url.as_deref(),
        Some("https://cdn.example.com/ada.png")
    );
    assert_eq!(session.role, Some(Role::Admin));
    assert!(session.is_authenticated());
    assert!(session.is_admin());
}

#[test]
fn test_string_user_id_and_missing_optionals() {
    let body = json!({
        "token": "t",
        "userid": "42",
        "email": "g@example.com",
        "username": "g",
        "name": "G",
        "phonenum": null,
        "role": "USER"
    });

    let response: AuthResponse = serde_json::from_value(body).unwrap();
    let session = response.into_session().unwrap();

    assert_eq!(session.user_id, 42);
    assert!(session.phone_number.is_none());
    assert!(session.state.is_none());
    assert!(session.profile_url.is_none());
    assert_eq!(session.role, Some(Role::User));
    assert!(!session.is_admin());
}

#[test]
fn test_unknown_role_is_dropped() {
    let body = json!({ "token": "t", "userid": 1, "email": "e@x.io", "role": "judge" });

    let session = serde_json::from_value::<AuthResponse>(body)
        .unwrap()
        .into_session()
        .unwrap();

    assert!(session.role.is_none());
}

#[test]
fn test_empty_token_is_rejected() {
    let body = json!({ "token": "", "userid": 1, "email": "e@x.io" });

    let response: AuthResponse = serde_json::from_value(body).unwrap();

    assert!(response.into_session().is_err());
}

#[test]
fn test_missing_user_id_fails_to_parse() {
    let body = json!({ "token": "t", "email": "e@x.io" });

    assert!(serde_json::from_value::<AuthResponse>(body).is_err());
}

#[test]
fn test_session_serialization_hides_token() {
    let body = json!({ "token": "secret-token", "userid": 1, "email": "e@x.io" });
    let session = serde_json::from_value::<AuthResponse>(body)
        .unwrap()
        .into_session()
        .unwrap();

    let rendered = serde_json::to_string(&session).unwrap();

    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("\"user_id\":1"));
}
