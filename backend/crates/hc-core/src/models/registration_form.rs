use crate::{CoreError, DEFAULT_REGISTRATION_ROLE, MIN_PASSWORD_LENGTH, Result as CoreResult};

use serde::Serialize;

/// Sign-up form. Only `username`, `email`, `password` and `role` are sent.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub role: String,
    #[serde(skip)]
    pub terms_accepted: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: String::from(DEFAULT_REGISTRATION_ROLE),
            terms_accepted: false,
        }
    }
}

impl RegistrationForm {
    /// Check the form before anything is sent. The first failing rule wins.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::validation("Username cannot be empty."));
        }
        if !is_valid_email(&self.email) {
            return Err(CoreError::validation(
                "Please enter a valid email address.",
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters."
            )));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::validation("Passwords do not match."));
        }
        if !self.terms_accepted {
            return Err(CoreError::validation(
                "You must agree to the Terms and Conditions.",
            ));
        }
        Ok(())
    }
}

/// Loose shape check: something, `@`, something, `.`, something, with no
/// whitespace inside the matched run.
pub fn is_valid_email(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();

    chars.iter().enumerate().any(|(at, &c)| {
        if c != '@' || at == 0 || chars[at - 1].is_whitespace() {
            return false;
        }

        let domain: Vec<char> = chars[at + 1..]
            .iter()
            .take_while(|d| !d.is_whitespace())
            .copied()
            .collect();

        domain
            .iter()
            .enumerate()
            .any(|(i, &d)| d == '.' && i > 0 && i + 1 < domain.len())
    })
}
