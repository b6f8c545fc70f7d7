//! Sign-up and email verification.

use crate::Client;
use crate::cli_error::{CliError, CliResult};

use hc_core::{RegistrationForm, Route};

use log::info;
use serde::Serialize;
use serde_json::Value;

pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed.";
pub const VERIFICATION_FAILED_MESSAGE: &str = "Verification failed. Please try again.";
pub const EMAIL_MISSING_MESSAGE: &str = "Email is missing.";
pub const OTP_SENT_MESSAGE: &str = "OTP sent successfully.";
pub const RESEND_FAILED_MESSAGE: &str = "Failed to resend OTP.";

/// Result of a step in the sign-up flow, and where to go next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowOutcome {
    pub message: String,
    pub next: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn message_of(body: &Value) -> Option<String> {
    match body {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        other => other
            .get("message")
            .and_then(Value::as_str)
            .map(String::from),
    }
}

/// Validate the form and, only if it passes, submit it.
pub async fn register(client: &Client, form: &RegistrationForm) -> CliResult<FlowOutcome> {
    form.validate()?;

    let body = client
        .register(form)
        .await
        .map_err(|e| CliError::request(e, REGISTRATION_FAILED_MESSAGE))?;

    info!("Registered {}, awaiting OTP", form.email);
    Ok(FlowOutcome {
        message: message_of(&body).unwrap_or_else(|| "Registration successful.".to_string()),
        next: Route::VerifyOtp,
        email: Some(form.email.clone()),
    })
}

pub async fn verify_otp(client: &Client, email: &str, otp: &str) -> CliResult<FlowOutcome> {
    if email.trim().is_empty() {
        return Err(CliError::validation(EMAIL_MISSING_MESSAGE));
    }

    let body = client
        .verify_otp(email, otp)
        .await
        .map_err(|e| CliError::request(e, VERIFICATION_FAILED_MESSAGE))?;

    Ok(FlowOutcome {
        message: message_of(&body).unwrap_or_default(),
        next: Route::Login,
        email: None,
    })
}

pub async fn resend_otp(client: &Client, email: &str) -> CliResult<FlowOutcome> {
    if email.trim().is_empty() {
        return Err(CliError::validation(EMAIL_MISSING_MESSAGE));
    }

    client
        .resend_otp(email)
        .await
        .map_err(|e| CliError::request(e, RESEND_FAILED_MESSAGE))?;

    Ok(FlowOutcome {
        message: OTP_SENT_MESSAGE.to_string(),
        next: Route::VerifyOtp,
        email: Some(email.to_string()),
    })
}
