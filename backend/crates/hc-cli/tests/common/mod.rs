//! Shared fixtures for the wiremock-backed tests

#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};

/// Login/google-auth body the backend returns for user 42.
pub fn auth_body() -> Value {
    json!({
        "token": "backend-jwt",
        "userid": 42,
        "email": "grace@example.com",
        "username": "grace",
        "name": "Grace Hopper",
        "phonenum": "555-0142",
        "state": "VA",
        "profileurl": "https://cdn.example.com/grace.png",
        "role": "admin"
    })
}

/// An unsigned-looking Google ID token carrying `claims`.
pub fn google_credential(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT","kid":"test"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

pub fn profile_body(id: i64) -> Value {
    json!({
        "id": id,
        "username": "grace",
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "phonenum": "555-0142",
        "state": "VA",
        "bio": "Compilers",
        "timezone": null,
        "availability": "Weekends",
        "profileurl": "https://cdn.example.com/grace.png",
        "role": "USER",
        "skillIds": [1, 3],
        "skills": []
    })
}
