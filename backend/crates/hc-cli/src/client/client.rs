use crate::{CliClientResult, ClientError};

use hc_auth::GoogleIdentity;
use hc_core::{AuthResponse, ProfileUpdate, RegistrationForm, Skill, UserId, UserProfile};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Multipart field the upload endpoint reads the image from.
const PROFILE_PHOTO_FIELD: &str = "thumbnailUrl";

/// HTTP client for the platform REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8080")
    /// * `token` - Optional bearer token sent on every request
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Build a request with the bearer token, if one is set
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.request_to(method, &format!("{}{}", self.base_url, path))
    }

    fn request_to(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        debug!("{} {}", method, url);
        let req = self.client.request(method, url);

        match self.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// `base_url` + `path` with `segment` appended as a single path segment.
    fn url_with_segment(&self, path: &str, segment: &str) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|_| ClientError::invalid_url(raw.as_str()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(raw.as_str()))?
            .push(segment);
        Ok(url)
    }

    /// Send a request and hand back the response if it succeeded.
    async fn send(&self, req: reqwest::RequestBuilder) -> CliClientResult<reqwest::Response> {
        let location = ErrorLocation::from(Location::caller());
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let json_message = json_message(&body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message: json_message
                .clone()
                .unwrap_or_else(|| text_message(&body)),
            json_message,
            location,
        })
    }

    /// Execute request and decode a JSON body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute request and return the body as text
    async fn execute_text(&self, req: reqwest::RequestBuilder) -> CliClientResult<String> {
        let response = self.send(req).await?;
        Ok(response.text().await?)
    }

    // =========================================================================
    // Registration & OTP
    // =========================================================================

    /// Start sign-up; the backend mails an OTP to the address
    pub async fn register(&self, form: &RegistrationForm) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/auth/register").json(form);
        let body = self.execute_text(req).await?;
        Ok(json_or_text(&body))
    }

    /// Confirm an email address with the mailed OTP
    pub async fn verify_otp(&self, email: &str, otp: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct VerifyOtpRequest<'a> {
            email: &'a str,
            otp: &'a str,
        }

        let body = VerifyOtpRequest { email, otp };
        let req = self
            .request(Method::POST, "/api/auth/verify-otp")
            .json(&body);
        let body = self.execute_text(req).await?;
        Ok(json_or_text(&body))
    }

    /// Ask for a fresh OTP. The address travels as one encoded path segment.
    pub async fn resend_otp(&self, email: &str) -> CliClientResult<String> {
        let url = self.url_with_segment("/api/auth/resend-otp", email)?;
        let req = self.request_to(Method::POST, url.as_str());
        self.execute_text(req).await
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Password login. Only an HTTP 200 counts as success.
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<AuthResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let location = ErrorLocation::from(Location::caller());
        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/api/auth/login").json(&body);
        let response = self.send(req).await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::Api {
                status: response.status().as_u16(),
                message: "login requires HTTP 200".to_string(),
                json_message: None,
                location,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Exchange Google identity claims for a platform session. The caller
    /// inspects the `success` flag.
    pub async fn google_auth(&self, identity: &GoogleIdentity) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/auth/google-auth")
            .json(identity);
        self.execute(req).await
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    /// Get a user's full profile
    pub async fn get_user(&self, id: UserId) -> CliClientResult<UserProfile> {
        let req = self.request(Method::GET, &format!("/api/auth/user/{}", id));
        self.execute(req).await
    }

    /// Replace a user's profile
    pub async fn update_user(&self, id: UserId, update: &ProfileUpdate) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &format!("/api/auth/update/{}", id))
            .json(update);
        let body = self.execute_text(req).await?;
        Ok(json_or_text(&body))
    }

    /// Upload a profile photo; returns the URL the backend stored it under
    pub async fn upload_profile_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> CliClientResult<String> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part(PROFILE_PHOTO_FIELD, part);
        let req = self
            .request(Method::POST, "/upload/profilephoto")
            .multipart(form);

        let body = self.execute_text(req).await?;
        Ok(match json_or_text(&body) {
            Value::String(url) => url,
            other => other
                .get("url")
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| body.trim().to_string()),
        })
    }

    /// Read a photo from disk and upload it
    pub async fn upload_profile_photo_file(&self, path: &Path) -> CliClientResult<String> {
        let location = ErrorLocation::from(Location::caller());
        let bytes = std::fs::read(path).map_err(|e| ClientError::Io {
            path: path.to_path_buf(),
            location,
            source: e,
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("profile-photo");

        self.upload_profile_photo(file_name, bytes).await
    }

    // =========================================================================
    // Skills
    // =========================================================================

    /// List the skill catalog
    pub async fn list_skills(&self) -> CliClientResult<Vec<Skill>> {
        let req = self.request(Method::GET, "/api/skills");
        self.execute(req).await
    }

    // =========================================================================
    // Connections
    // =========================================================================

    /// Users with a pending request to or from `user_id`
    pub async fn pending_requests(&self, user_id: UserId) -> CliClientResult<Vec<UserProfile>> {
        let req = self.request(Method::GET, &format!("/api/auth/pending/{}", user_id));
        self.execute(req).await
    }

    /// Users with an accepted connection to `user_id`
    pub async fn connections(&self, user_id: UserId) -> CliClientResult<Vec<UserProfile>> {
        let req = self.request(Method::GET, &format!("/api/auth/connections/{}", user_id));
        self.execute(req).await
    }

    /// Send a connection request
    pub async fn connect(&self, sender_id: UserId, receiver_id: UserId) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ConnectRequest {
            sender_id: UserId,
            receiver_id: UserId,
        }

        let body = ConnectRequest {
            sender_id,
            receiver_id,
        };
        let req = self.request(Method::POST, "/api/auth/connect").json(&body);
        self.execute(req).await
    }
}

/// The `message` of a JSON error body, top-level or under `error`.
fn json_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error").and_then(|e| e.get("message")))
        .and_then(|m| m.as_str())
        .map(String::from)
}

/// An error body without a JSON `message`: a JSON string, else the raw text.
fn text_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        _ => body.trim().to_string(),
    }
}

/// Endpoints answer with JSON or plain text depending on the route.
fn json_or_text(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.trim().to_string()))
}
